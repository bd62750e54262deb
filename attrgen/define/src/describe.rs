//! The [`Describe`] trait and its implementations for standard types.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::descriptor::{IntKind, Kind, OpaqueKind, TypeDescriptor};

/// Produces the descriptor table for a type.
///
/// Implemented here for primitives, `String`, `Option<T>`, `Vec<T>`,
/// string-keyed maps, `Duration` and `DateTime<Utc>`. Domain structs
/// implement it by hand with [`TypeDescriptor::structure`].
///
/// ## Examples
///
/// ```
/// use attrgen_define::{Describe, Kind};
///
/// let ty = <Option<Vec<String>>>::describe();
/// assert_eq!(ty.path, "Option<Vec<String>>");
/// assert!(matches!(ty.kind, Kind::Optional(_)));
/// ```
pub trait Describe {
    fn describe() -> TypeDescriptor;
}

macro_rules! describe_int {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::scalar(stringify!($ty), Kind::Integer(IntKind::$kind))
                }
            }
        )*
    };
}

describe_int! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

impl Describe for bool {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::scalar("bool", Kind::Bool)
    }
}

impl Describe for String {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::scalar("String", Kind::String)
    }
}

impl Describe for Duration {
    fn describe() -> TypeDescriptor {
        TypeDescriptor {
            name: "Duration".to_string(),
            path: "std::time::Duration".to_string(),
            kind: Kind::Opaque(OpaqueKind::Duration),
            fields: Vec::new(),
        }
    }
}

impl Describe for DateTime<Utc> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor {
            name: "DateTime<Utc>".to_string(),
            path: "chrono::DateTime<chrono::Utc>".to_string(),
            kind: Kind::Opaque(OpaqueKind::Timestamp),
            fields: Vec::new(),
        }
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe() -> TypeDescriptor {
        wrap("Option", T::describe(), Kind::Optional)
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe() -> TypeDescriptor {
        wrap("Vec", T::describe(), Kind::Sequence)
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe() -> TypeDescriptor {
        mapping("BTreeMap", K::describe(), V::describe())
    }
}

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn describe() -> TypeDescriptor {
        mapping("HashMap", K::describe(), V::describe())
    }
}

fn wrap(
    outer: &str,
    inner: TypeDescriptor,
    kind: impl FnOnce(Box<TypeDescriptor>) -> Kind,
) -> TypeDescriptor {
    TypeDescriptor {
        name: format!("{outer}<{}>", inner.name),
        path: format!("{outer}<{}>", inner.path),
        kind: kind(Box::new(inner)),
        fields: Vec::new(),
    }
}

fn mapping(outer: &str, key: TypeDescriptor, value: TypeDescriptor) -> TypeDescriptor {
    TypeDescriptor {
        name: format!("{outer}<{}, {}>", key.name, value.name),
        path: format!("{outer}<{}, {}>", key.path, value.path),
        kind: Kind::Mapping(Box::new(key), Box::new(value)),
        fields: Vec::new(),
    }
}
