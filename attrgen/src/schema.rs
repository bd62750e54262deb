//! Attribute schema types.
//!
//! Generated `*_attributes()` functions build an [`Attributes`] collection
//! for every holder type; the generated crate's `schemas()` function wraps
//! them in a [`Schema`] per generation unit.

/// The external representation of one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    Bool,
    Number,
    String,
    /// A list whose elements are strings.
    ListOfString,
    /// A string-keyed map whose values are strings.
    MapOfStringToString,
    /// A single nested object with its own attributes.
    SingleNested(Attributes),
    /// A list of nested objects sharing one set of attributes.
    ListNested(Attributes),
}

/// One named attribute in a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub attribute_type: AttributeType,
    pub optional: bool,
}

impl Attribute {
    /// Creates an optional attribute. Generated schemas only use this form.
    pub fn optional(attribute_type: AttributeType) -> Self {
        Self {
            attribute_type,
            optional: true,
        }
    }
}

/// An ordered collection of named attributes.
///
/// Insertion order is preserved so schemas list attributes in the same order
/// as the fields of the type they describe.
///
/// ## Examples
///
/// ```
/// use attrgen::{Attribute, AttributeType, Attributes};
///
/// let attributes = Attributes::from([
///     ("username", Attribute::optional(AttributeType::String)),
///     ("password", Attribute::optional(AttributeType::String)),
/// ]);
///
/// let names: Vec<_> = attributes.names().collect();
/// assert_eq!(names, vec!["username", "password"]);
/// assert!(attributes.get("password").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(&'static str, Attribute)>,
}

impl Attributes {
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, attribute)| attribute)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attribute names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Attribute)> {
        self.entries.iter().map(|(name, attribute)| (*name, attribute))
    }
}

impl<const N: usize> From<[(&'static str, Attribute); N]> for Attributes {
    fn from(entries: [(&'static str, Attribute); N]) -> Self {
        Self {
            entries: entries.into(),
        }
    }
}

impl FromIterator<(&'static str, Attribute)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (&'static str, Attribute)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The schema of one generation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub attributes: Attributes,
}

impl Schema {
    pub fn new(attributes: Attributes) -> Self {
        Self { attributes }
    }
}
