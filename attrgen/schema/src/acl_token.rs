// This code was automatically generated by attrgen-gen. Do not edit manually.

//! Attribute schemas and holders for the `acl_token` unit.
use attrgen_definitions::acl;
/// Attributes of `acl::AclToken`.
pub fn acl_token_attributes() -> attrgen::Attributes {
    attrgen::Attributes::from([
        ("accessor_id", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("secret_id", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("description", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("local", attrgen::Attribute::optional(attrgen::AttributeType::Bool)),
        ("expiration_ttl", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("create_time", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("create_index", attrgen::Attribute::optional(attrgen::AttributeType::Number)),
        (
            "policies",
            attrgen::Attribute::optional(
                attrgen::AttributeType::ListNested(acl_token_policy_link_attributes()),
            ),
        ),
        (
            "service_identities",
            attrgen::Attribute::optional(
                attrgen::AttributeType::ListNested(acl_service_identity_attributes()),
            ),
        ),
    ])
}
/// Attributes of `acl::AclTokenPolicyLink`.
pub(crate) fn acl_token_policy_link_attributes() -> attrgen::Attributes {
    attrgen::Attributes::from([
        ("id", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("name", attrgen::Attribute::optional(attrgen::AttributeType::String)),
    ])
}
/// Attributes of `acl::AclServiceIdentity`.
pub(crate) fn acl_service_identity_attributes() -> attrgen::Attributes {
    attrgen::Attributes::from([
        ("service_name", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        (
            "datacenters",
            attrgen::Attribute::optional(attrgen::AttributeType::ListOfString),
        ),
    ])
}
/// Attribute holder for `acl::AclToken`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AclToken {
    #[serde(rename = "accessor_id")]
    pub accessor_id: attrgen::types::String,
    #[serde(rename = "secret_id")]
    pub secret_id: attrgen::types::String,
    #[serde(rename = "description")]
    pub description: attrgen::types::String,
    #[serde(rename = "local")]
    pub local: attrgen::types::Bool,
    #[serde(rename = "expiration_ttl")]
    pub expiration_ttl: attrgen::types::String,
    #[serde(rename = "create_time")]
    pub create_time: attrgen::types::String,
    #[serde(rename = "create_index")]
    pub create_index: attrgen::types::Number,
    #[serde(rename = "policies")]
    pub policies: Option<Vec<AclTokenPolicyLink>>,
    #[serde(rename = "service_identities")]
    pub service_identities: Option<Vec<AclServiceIdentity>>,
}
impl AclToken {
    /// Builds a holder from a native value; `None` stays `None`.
    pub fn new(value: Option<&acl::AclToken>) -> Option<Self> {
        let value = value?;
        Some(Self {
            accessor_id: attrgen::types::String::new(value.accessor_id.clone()),
            secret_id: attrgen::types::String::new(value.secret_id.clone()),
            description: attrgen::types::String::new(value.description.clone()),
            local: attrgen::types::Bool::new(value.local),
            expiration_ttl: attrgen::types::String::new(
                attrgen::text::format_duration(value.expiration_ttl),
            ),
            create_time: attrgen::types::String::new(
                attrgen::text::format_timestamp(&value.create_time),
            ),
            create_index: attrgen::types::Number::new(i128::from(value.create_index)),
            policies: Some(
                value
                    .policies
                    .iter()
                    .filter_map(|item| AclTokenPolicyLink::new(Some(item)))
                    .collect(),
            ),
            service_identities: Some(
                value
                    .service_identities
                    .iter()
                    .filter_map(|item| AclServiceIdentity::new(Some(item)))
                    .collect(),
            ),
        })
    }
    /// Reads the holder from `conf` and decodes it into `target`.
    pub fn decode(
        conf: &(impl attrgen::Getter + ?Sized),
        target: &mut acl::AclToken,
    ) -> attrgen::Diagnostics {
        match conf.read::<Self>() {
            Ok(model) => model.decode_into(target),
            Err(diags) => diags,
        }
    }
    /// Writes every non-null attribute into `target`.
    pub fn decode_into(&self, target: &mut acl::AclToken) -> attrgen::Diagnostics {
        let mut diags = attrgen::Diagnostics::new();
        if let Some(value) = self.accessor_id.value() {
            target.accessor_id = value.clone();
        }
        if let Some(value) = self.secret_id.value() {
            target.secret_id = value.clone();
        }
        if let Some(value) = self.description.value() {
            target.description = value.clone();
        }
        if let Some(value) = self.local.value() {
            target.local = *value;
        }
        if let Some(value) = self.expiration_ttl.value() {
            match attrgen::text::parse_duration(value) {
                Ok(value) => target.expiration_ttl = value,
                Err(err) => {
                    diags
                        .push(
                            attrgen::Diagnostic::error(
                                "Failed to convert expiration_ttl",
                                err.to_string(),
                            ),
                        );
                    return diags;
                }
            }
        }
        if let Some(value) = self.create_time.value() {
            match attrgen::text::parse_timestamp(value) {
                Ok(value) => target.create_time = value,
                Err(err) => {
                    diags
                        .push(
                            attrgen::Diagnostic::error(
                                "Failed to convert create_time",
                                err.to_string(),
                            ),
                        );
                    return diags;
                }
            }
        }
        if let Some(value) = self.create_index.value() {
            match u64::try_from(*value) {
                Ok(value) => target.create_index = value,
                Err(err) => {
                    diags
                        .push(
                            attrgen::Diagnostic::error(
                                "Failed to convert create_index",
                                err.to_string(),
                            ),
                        );
                    return diags;
                }
            }
        }
        if let Some(items) = &self.policies {
            target.policies.clear();
            for nested in items {
                let mut item = Default::default();
                diags.extend(nested.decode_into(&mut item));
                target.policies.push(item);
            }
        }
        if let Some(items) = &self.service_identities {
            target.service_identities.clear();
            for nested in items {
                let mut item = Default::default();
                diags.extend(nested.decode_into(&mut item));
                target.service_identities.push(item);
            }
        }
        diags
    }
}
/// Attribute holder for `acl::AclTokenPolicyLink`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AclTokenPolicyLink {
    #[serde(rename = "id")]
    pub id: attrgen::types::String,
    #[serde(rename = "name")]
    pub name: attrgen::types::String,
}
impl AclTokenPolicyLink {
    /// Builds a holder from a native value; `None` stays `None`.
    pub fn new(value: Option<&acl::AclTokenPolicyLink>) -> Option<Self> {
        let value = value?;
        Some(Self {
            id: attrgen::types::String::new(value.id.clone()),
            name: attrgen::types::String::new(value.name.clone()),
        })
    }
    /// Reads the holder from `conf` and decodes it into `target`.
    pub fn decode(
        conf: &(impl attrgen::Getter + ?Sized),
        target: &mut acl::AclTokenPolicyLink,
    ) -> attrgen::Diagnostics {
        match conf.read::<Self>() {
            Ok(model) => model.decode_into(target),
            Err(diags) => diags,
        }
    }
    /// Writes every non-null attribute into `target`.
    pub fn decode_into(
        &self,
        target: &mut acl::AclTokenPolicyLink,
    ) -> attrgen::Diagnostics {
        let diags = attrgen::Diagnostics::new();
        if let Some(value) = self.id.value() {
            target.id = value.clone();
        }
        if let Some(value) = self.name.value() {
            target.name = value.clone();
        }
        diags
    }
}
/// Attribute holder for `acl::AclServiceIdentity`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AclServiceIdentity {
    #[serde(rename = "service_name")]
    pub service_name: attrgen::types::String,
    #[serde(rename = "datacenters")]
    pub datacenters: attrgen::types::List,
}
impl AclServiceIdentity {
    /// Builds a holder from a native value; `None` stays `None`.
    pub fn new(value: Option<&acl::AclServiceIdentity>) -> Option<Self> {
        let value = value?;
        Some(Self {
            service_name: attrgen::types::String::new(value.service_name.clone()),
            datacenters: attrgen::types::List::new(value.datacenters.clone()),
        })
    }
    /// Reads the holder from `conf` and decodes it into `target`.
    pub fn decode(
        conf: &(impl attrgen::Getter + ?Sized),
        target: &mut acl::AclServiceIdentity,
    ) -> attrgen::Diagnostics {
        match conf.read::<Self>() {
            Ok(model) => model.decode_into(target),
            Err(diags) => diags,
        }
    }
    /// Writes every non-null attribute into `target`.
    pub fn decode_into(
        &self,
        target: &mut acl::AclServiceIdentity,
    ) -> attrgen::Diagnostics {
        let diags = attrgen::Diagnostics::new();
        if let Some(value) = self.service_name.value() {
            target.service_name = value.clone();
        }
        if let Some(value) = self.datacenters.value() {
            target.datacenters = value.clone();
        }
        diags
    }
}
