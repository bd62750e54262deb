// This code was automatically generated by attrgen-gen. Do not edit manually.

//! Attribute schemas and holders for the `provider` unit.
use attrgen_definitions::provider;
/// Attributes of `provider::ProviderConfig`.
pub fn provider_config_attributes() -> attrgen::Attributes {
    attrgen::Attributes::from([
        ("host", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("username", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("password", attrgen::Attribute::optional(attrgen::AttributeType::String)),
    ])
}
/// Attribute holder for `provider::ProviderConfig`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    #[serde(rename = "host")]
    pub host: attrgen::types::String,
    #[serde(rename = "username")]
    pub username: attrgen::types::String,
    #[serde(rename = "password")]
    pub password: attrgen::types::String,
}
impl ProviderConfig {
    /// Builds a holder from a native value; `None` stays `None`.
    pub fn new(value: Option<&provider::ProviderConfig>) -> Option<Self> {
        let value = value?;
        Some(Self {
            host: attrgen::types::String::new(value.host.clone()),
            username: attrgen::types::String::new(value.username.clone()),
            password: attrgen::types::String::new(value.password.clone()),
        })
    }
    /// Reads the holder from `conf` and decodes it into `target`.
    pub fn decode(
        conf: &(impl attrgen::Getter + ?Sized),
        target: &mut provider::ProviderConfig,
    ) -> attrgen::Diagnostics {
        match conf.read::<Self>() {
            Ok(model) => model.decode_into(target),
            Err(diags) => diags,
        }
    }
    /// Writes every non-null attribute into `target`.
    pub fn decode_into(
        &self,
        target: &mut provider::ProviderConfig,
    ) -> attrgen::Diagnostics {
        let diags = attrgen::Diagnostics::new();
        if let Some(value) = self.host.value() {
            target.host = value.clone();
        }
        if let Some(value) = self.username.value() {
            target.username = value.clone();
        }
        if let Some(value) = self.password.value() {
            target.password = value.clone();
        }
        diags
    }
}
