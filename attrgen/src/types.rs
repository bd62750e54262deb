//! Nullable attribute values.
//!
//! Every attribute exchanged with the configuration framework may be absent.
//! [`Value`] models that explicitly so decoders can tell "not configured"
//! apart from a zero value and leave native defaults untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A possibly-null attribute value.
///
/// Serializes transparently: a null value is `null`, anything else is the
/// inner value.
///
/// ## Examples
///
/// ```
/// use attrgen::types::Value;
///
/// let set = Value::new(true);
/// assert_eq!(set.value(), Some(&true));
///
/// let unset: Value<bool> = Value::null();
/// assert!(unset.is_null());
/// assert_eq!(serde_json::to_string(&unset).unwrap(), "null");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value<T>(Option<T>);

/// Boolean attribute.
pub type Bool = Value<bool>;
/// Numeric attribute. Wide enough for every 64-bit integer, signed or not.
pub type Number = Value<i128>;
/// Text attribute.
pub type String = Value<std::string::String>;
/// List of strings.
pub type List = Value<Vec<std::string::String>>;
/// String-keyed map of strings.
pub type Map = Value<BTreeMap<std::string::String, std::string::String>>;

impl<T> Value<T> {
    /// Creates a non-null value.
    pub fn new(value: T) -> Self {
        Self(Some(value))
    }

    /// Creates a null value.
    pub fn null() -> Self {
        Self(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the inner value, or `None` when null.
    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Value<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        assert!(Bool::default().is_null());
        assert!(Map::default().is_null());
    }

    #[test]
    fn number_holds_full_u64_range() {
        let n = Number::new(i128::from(u64::MAX));
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, u64::MAX.to_string());

        let back: Number = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }

    #[test]
    fn null_deserializes_from_json_null() {
        let value: String = serde_json::from_str("null").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn list_serializes_as_array() {
        let list = List::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn from_option_preserves_presence() {
        assert_eq!(Bool::from(Some(false)).value(), Some(&false));
        assert!(Bool::from(None).is_null());
    }
}
