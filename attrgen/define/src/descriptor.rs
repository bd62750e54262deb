//! Type descriptors.
//!
//! A [`TypeDescriptor`] is the static replacement for runtime reflection:
//! it records the name a type is known by, the path generated code uses to
//! refer to it, its [`Kind`], and (for structs) its ordered fields.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::describe::Describe;

/// Integer widths and signedness.
///
/// Displays as the Rust primitive name, which generated code uses verbatim.
///
/// ## Examples
///
/// ```
/// use attrgen_define::IntKind;
///
/// assert_eq!(IntKind::U16.to_string(), "u16");
/// assert!(IntKind::Isize.is_pointer_sized());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl IntKind {
    /// `isize`/`usize` have no lossless `From` conversion into `i128`.
    pub fn is_pointer_sized(self) -> bool {
        matches!(self, Self::Isize | Self::Usize)
    }
}

/// Leaf types with no structural decomposition; they travel as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OpaqueKind {
    /// `std::time::Duration`
    Duration,
    /// `chrono::DateTime<Utc>`
    Timestamp,
}

/// The shape of a native type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum Kind {
    Bool,
    Integer(IntKind),
    String,
    Opaque(OpaqueKind),
    /// A struct with its own descriptor table.
    Struct,
    /// One level of indirection (`Option<T>`).
    Optional(Box<TypeDescriptor>),
    /// `Vec<T>`
    Sequence(Box<TypeDescriptor>),
    /// `BTreeMap<K, V>` or `HashMap<K, V>`
    Mapping(Box<TypeDescriptor>, Box<TypeDescriptor>),
}

/// The introspectable shape of one native type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    /// Bare type name (e.g. `"HttpBasicAuth"`, `"u16"`).
    ///
    /// Struct names are what the known-type set is keyed by.
    pub name: String,
    /// How generated code spells the type (e.g. `"consul::HttpBasicAuth"`).
    pub path: String,
    #[serde(flatten)]
    pub kind: Kind,
    /// Ordered fields; empty for anything but structs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl TypeDescriptor {
    /// Creates a descriptor for a non-struct type whose name and path coincide.
    pub fn scalar(name: impl Into<String>, kind: Kind) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            kind,
            fields: Vec::new(),
        }
    }

    /// Starts a struct descriptor; add fields with [`TypeDescriptor::field`].
    ///
    /// ## Examples
    ///
    /// ```
    /// use attrgen_define::{Kind, TypeDescriptor};
    ///
    /// let auth = TypeDescriptor::structure("HttpBasicAuth", "consul::HttpBasicAuth")
    ///     .field::<String>("username", "username")
    ///     .field::<String>("password", "password");
    ///
    /// assert_eq!(auth.kind, Kind::Struct);
    /// assert_eq!(auth.path, "consul::HttpBasicAuth");
    /// assert_eq!(auth.fields.len(), 2);
    /// ```
    pub fn structure(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: Kind::Struct,
            fields: Vec::new(),
        }
    }

    /// Appends a field of type `T` with the given recognition tag.
    ///
    /// An empty tag declares the field but excludes it from generation.
    #[must_use]
    pub fn field<T: Describe>(mut self, name: &str, tag: &str) -> Self {
        self.fields.push(Field::new(name, T::describe(), tag));
        self
    }

    /// Appends a field that takes no part in generation.
    #[must_use]
    pub fn untagged<T: Describe>(self, name: &str) -> Self {
        self.field::<T>(name, "")
    }

    /// Fields carrying a non-empty recognition tag, in declaration order.
    pub fn tagged_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_tagged())
    }
}

/// A declared field of a struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// The Rust field name.
    pub name: String,
    pub ty: TypeDescriptor,
    /// Recognition tag; also the external attribute name.
    pub tag: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            tag: tag.into(),
        }
    }

    pub fn is_tagged(&self) -> bool {
        !self.tag.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn int_kind_round_trips_through_strings() {
        for kind in IntKind::iter() {
            assert_eq!(IntKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn untagged_fields_are_declared_but_filtered() {
        let ty = TypeDescriptor::structure("Config", "consul::Config")
            .field::<String>("address", "address")
            .untagged::<u64>("wait_index");

        assert_eq!(ty.fields.len(), 2);
        let tagged: Vec<_> = ty.tagged_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(tagged, vec!["address"]);
    }

    #[test]
    fn descriptors_serialize_with_kind_tags() {
        let json = serde_json::to_value(<Vec<u16>>::describe()).unwrap();
        assert_eq!(json["name"], "Vec<u16>");
        assert_eq!(json["kind"], "sequence");
        assert_eq!(json["of"]["kind"], "integer");
        assert_eq!(json["of"]["of"], "u16");
    }

    #[test]
    fn struct_descriptors_serialize_without_content() {
        let ty = TypeDescriptor::structure("Auth", "consul::Auth").field::<bool>("on", "on");
        let json = serde_json::to_value(&ty).unwrap();

        assert_eq!(json["kind"], "struct");
        assert!(json.get("of").is_none());
        assert_eq!(json["fields"][0]["ty"]["kind"], "bool");
    }
}
