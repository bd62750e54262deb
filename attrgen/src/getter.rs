//! Configuration sources that generated holders can be read from.

use serde::de::DeserializeOwned;

use crate::diag::{Diagnostic, Diagnostics};

/// A source of configuration that can be deserialized into a holder type.
///
/// Generated `decode()` functions call [`Getter::read`] to obtain the holder
/// and then decode it into the native type.
///
/// ## Examples
///
/// ```
/// use attrgen::{Getter, types};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Holder {
///     host: types::String,
/// }
///
/// let config = serde_json::json!({ "host": "localhost" });
/// let holder: Holder = config.read().unwrap();
/// assert_eq!(holder.host.value().map(String::as_str), Some("localhost"));
/// ```
pub trait Getter {
    fn read<T: DeserializeOwned>(&self) -> Result<T, Diagnostics>;
}

impl Getter for serde_json::Value {
    fn read<T: DeserializeOwned>(&self) -> Result<T, Diagnostics> {
        T::deserialize(self).map_err(|e| {
            tracing::debug!(error = %e, "configuration does not match holder type");
            Diagnostics::from(Diagnostic::error(
                "Failed to read configuration",
                e.to_string(),
            ))
        })
    }
}

impl Getter for str {
    fn read<T: DeserializeOwned>(&self) -> Result<T, Diagnostics> {
        serde_json::from_str(self).map_err(|e| {
            tracing::debug!(error = %e, "configuration is not valid JSON for holder type");
            Diagnostics::from(Diagnostic::error(
                "Failed to read configuration",
                e.to_string(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types;
    use serde::Deserialize;
    use tracing_test::traced_test;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Holder {
        #[serde(rename = "wait_time")]
        wait_time: types::String,
        #[serde(rename = "port")]
        port: types::Number,
    }

    #[test]
    fn missing_fields_default_to_null() {
        let config = serde_json::json!({ "port": 8500 });
        let holder: Holder = config.read().unwrap();
        assert!(holder.wait_time.is_null());
        assert_eq!(holder.port.value(), Some(&8500));
    }

    #[test]
    #[traced_test]
    fn mismatched_type_becomes_error_diagnostic() {
        let config = serde_json::json!({ "port": "not a number" });
        let diags = config.read::<Holder>().unwrap_err();
        assert!(diags.has_error());
        assert_eq!(diags.iter().next().unwrap().summary, "Failed to read configuration");
        assert!(logs_contain("configuration does not match holder type"));
    }

    #[test]
    fn raw_json_text_is_a_source() {
        let holder: Holder = r#"{"wait_time": "5s"}"#.read().unwrap();
        assert_eq!(holder.wait_time.value().map(String::as_str), Some("5s"));
    }
}
