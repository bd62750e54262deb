//! The type mapper.
//!
//! Turns a field's [`TypeDescriptor`] into the external [`AttributeType`] it
//! is exposed as, plus the [`Conversion`] both emitters use to move values
//! across. Both the schema and the model emitter consume the same
//! [`MappedField`]s, which keeps the two artifacts consistent.
//!
//! ## Resolution Order
//!
//! 1. Opaque leaves (`Duration`, `DateTime<Utc>`, `Vec<u8>`) -> `String`
//! 2. `Vec<String>` -> `ListOfString`; string-to-string maps -> `MapOfStringToString`
//! 3. A known type name -> `NestedObject`
//! 4. `Option` of a known type -> `NestedObject`
//! 5. `Vec` of a known type, or of `Option` of one -> `ListOfNestedObject`
//! 6. `bool` -> `Bool`; any integer -> `Number`; `String` -> `String`
//!
//! Anything else is a [`GeneratorError::Mapping`] naming the unit and field.

use attrgen_define::{Field, IntKind, Kind, OpaqueKind, TypeDescriptor};
use tracing::debug;

use crate::errors::GeneratorError;
use crate::registry::KnownTypes;

/// The external representation of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    Bool,
    Number,
    String,
    ListOfString,
    MapOfStringToString,
    /// A nested object described by the named known type.
    NestedObject(String),
    /// A list of nested objects described by the named known type.
    ListOfNestedObject(String),
}

impl AttributeType {
    /// The known type a nested attribute refers to.
    pub fn nested_type(&self) -> Option<&str> {
        match self {
            Self::NestedObject(name) | Self::ListOfNestedObject(name) => Some(name),
            _ => None,
        }
    }
}

/// How a value moves between the native field and its holder field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    Bool,
    /// Widened to `i128` on the way out, narrowed with `TryFrom` on the way in.
    Integer(IntKind),
    Text,
    /// Rendered with `attrgen::text::format_duration`.
    Duration,
    /// Rendered as RFC 3339.
    Timestamp,
    /// Raw bytes carried as (lossy) UTF-8 text.
    Bytes,
    StringList,
    StringMap,
    /// Delegates to the nested holder; `optional` when the native field is an `Option`.
    Nested { optional: bool },
    /// Delegates per element; `optional_items` when elements are `Option`s.
    NestedList { optional_items: bool },
}

/// A tagged field with everything the emitters need to know about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedField {
    /// Field name on both the native type and the holder.
    pub name: String,
    /// Recognition tag; the attribute name.
    pub tag: String,
    pub attribute_type: AttributeType,
    pub conversion: Conversion,
}

/// Maps one field, failing with the unit and field named.
///
/// ## Errors
///
/// Returns [`GeneratorError::Mapping`] when no rule applies.
pub fn map_field(
    unit: &str,
    field: &Field,
    known: &KnownTypes,
) -> Result<MappedField, GeneratorError> {
    let (attribute_type, conversion) =
        map_type(&field.ty, known).ok_or_else(|| GeneratorError::Mapping {
            unit: unit.to_string(),
            field: field.name.clone(),
            declared: field.ty.name.clone(),
        })?;

    debug!(
        unit,
        field = %field.name,
        declared = %field.ty.name,
        ?attribute_type,
        "mapped field"
    );

    Ok(MappedField {
        name: field.name.clone(),
        tag: field.tag.clone(),
        attribute_type,
        conversion,
    })
}

/// Maps every tagged field of `ty`, in declaration order.
///
/// Untagged fields are skipped. An empty result is not an error here; the
/// schema emitter decides what a type without attributes means.
pub fn map_fields(
    unit: &str,
    ty: &TypeDescriptor,
    known: &KnownTypes,
) -> Result<Vec<MappedField>, GeneratorError> {
    ty.tagged_fields()
        .map(|field| map_field(unit, field, known))
        .collect()
}

/// Resolves a descriptor by the rules listed in the module docs.
pub fn map_type(ty: &TypeDescriptor, known: &KnownTypes) -> Option<(AttributeType, Conversion)> {
    // 1. opaque leaves
    match &ty.kind {
        Kind::Opaque(OpaqueKind::Duration) => {
            return Some((AttributeType::String, Conversion::Duration));
        }
        Kind::Opaque(OpaqueKind::Timestamp) => {
            return Some((AttributeType::String, Conversion::Timestamp));
        }
        Kind::Sequence(inner) if inner.kind == Kind::Integer(IntKind::U8) => {
            return Some((AttributeType::String, Conversion::Bytes));
        }
        _ => {}
    }

    // 2. string collections
    match &ty.kind {
        Kind::Sequence(inner) if inner.kind == Kind::String => {
            return Some((AttributeType::ListOfString, Conversion::StringList));
        }
        Kind::Mapping(key, value) if key.kind == Kind::String && value.kind == Kind::String => {
            return Some((AttributeType::MapOfStringToString, Conversion::StringMap));
        }
        _ => {}
    }

    // 3. known name
    if known.contains(&ty.name) {
        return Some((
            AttributeType::NestedObject(ty.name.clone()),
            Conversion::Nested { optional: false },
        ));
    }

    // 4. optional known name
    if let Kind::Optional(inner) = &ty.kind
        && known.contains(&inner.name)
    {
        return Some((
            AttributeType::NestedObject(inner.name.clone()),
            Conversion::Nested { optional: true },
        ));
    }

    // 5. sequence of a known name, directly or through an Option
    if let Kind::Sequence(inner) = &ty.kind {
        if known.contains(&inner.name) {
            return Some((
                AttributeType::ListOfNestedObject(inner.name.clone()),
                Conversion::NestedList {
                    optional_items: false,
                },
            ));
        }
        if let Kind::Optional(item) = &inner.kind
            && known.contains(&item.name)
        {
            return Some((
                AttributeType::ListOfNestedObject(item.name.clone()),
                Conversion::NestedList {
                    optional_items: true,
                },
            ));
        }
    }

    // 6. primitives
    match &ty.kind {
        Kind::Bool => Some((AttributeType::Bool, Conversion::Bool)),
        Kind::Integer(kind) => Some((AttributeType::Number, Conversion::Integer(*kind))),
        Kind::String => Some((AttributeType::String, Conversion::Text)),
        _ => None,
    }
}
