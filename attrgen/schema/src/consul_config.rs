// This code was automatically generated by attrgen-gen. Do not edit manually.

//! Attribute schemas and holders for the `consul_config` unit.
use attrgen_definitions::consul;
/// Attributes of `consul::Config`.
pub fn config_attributes() -> attrgen::Attributes {
    attrgen::Attributes::from([
        ("address", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("scheme", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("path_prefix", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("datacenter", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("wait_time", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("token", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("namespace", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("partition", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        (
            "http_auth",
            attrgen::Attribute::optional(
                attrgen::AttributeType::SingleNested(http_basic_auth_attributes()),
            ),
        ),
        (
            "tls_config",
            attrgen::Attribute::optional(
                attrgen::AttributeType::SingleNested(tls_config_attributes()),
            ),
        ),
        (
            "headers",
            attrgen::Attribute::optional(attrgen::AttributeType::MapOfStringToString),
        ),
    ])
}
/// Attributes of `consul::HttpBasicAuth`.
pub(crate) fn http_basic_auth_attributes() -> attrgen::Attributes {
    attrgen::Attributes::from([
        ("username", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("password", attrgen::Attribute::optional(attrgen::AttributeType::String)),
    ])
}
/// Attributes of `consul::TlsConfig`.
pub(crate) fn tls_config_attributes() -> attrgen::Attributes {
    attrgen::Attributes::from([
        ("address", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("ca_file", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("ca_pem", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("cert_file", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        ("key_file", attrgen::Attribute::optional(attrgen::AttributeType::String)),
        (
            "insecure_skip_verify",
            attrgen::Attribute::optional(attrgen::AttributeType::Bool),
        ),
    ])
}
/// Attribute holder for `consul::Config`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "address")]
    pub address: attrgen::types::String,
    #[serde(rename = "scheme")]
    pub scheme: attrgen::types::String,
    #[serde(rename = "path_prefix")]
    pub path_prefix: attrgen::types::String,
    #[serde(rename = "datacenter")]
    pub datacenter: attrgen::types::String,
    #[serde(rename = "wait_time")]
    pub wait_time: attrgen::types::String,
    #[serde(rename = "token")]
    pub token: attrgen::types::String,
    #[serde(rename = "namespace")]
    pub namespace: attrgen::types::String,
    #[serde(rename = "partition")]
    pub partition: attrgen::types::String,
    #[serde(rename = "http_auth")]
    pub http_auth: Option<HttpBasicAuth>,
    #[serde(rename = "tls_config")]
    pub tls_config: Option<TlsConfig>,
    #[serde(rename = "headers")]
    pub headers: attrgen::types::Map,
}
impl Config {
    /// Builds a holder from a native value; `None` stays `None`.
    pub fn new(value: Option<&consul::Config>) -> Option<Self> {
        let value = value?;
        Some(Self {
            address: attrgen::types::String::new(value.address.clone()),
            scheme: attrgen::types::String::new(value.scheme.clone()),
            path_prefix: attrgen::types::String::new(value.path_prefix.clone()),
            datacenter: attrgen::types::String::new(value.datacenter.clone()),
            wait_time: attrgen::types::String::new(
                attrgen::text::format_duration(value.wait_time),
            ),
            token: attrgen::types::String::new(value.token.clone()),
            namespace: attrgen::types::String::new(value.namespace.clone()),
            partition: attrgen::types::String::new(value.partition.clone()),
            http_auth: HttpBasicAuth::new(value.http_auth.as_ref()),
            tls_config: TlsConfig::new(Some(&value.tls_config)),
            headers: attrgen::types::Map::new(
                value.headers.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            ),
        })
    }
    /// Reads the holder from `conf` and decodes it into `target`.
    pub fn decode(
        conf: &(impl attrgen::Getter + ?Sized),
        target: &mut consul::Config,
    ) -> attrgen::Diagnostics {
        match conf.read::<Self>() {
            Ok(model) => model.decode_into(target),
            Err(diags) => diags,
        }
    }
    /// Writes every non-null attribute into `target`.
    pub fn decode_into(&self, target: &mut consul::Config) -> attrgen::Diagnostics {
        let mut diags = attrgen::Diagnostics::new();
        if let Some(value) = self.address.value() {
            target.address = value.clone();
        }
        if let Some(value) = self.scheme.value() {
            target.scheme = value.clone();
        }
        if let Some(value) = self.path_prefix.value() {
            target.path_prefix = value.clone();
        }
        if let Some(value) = self.datacenter.value() {
            target.datacenter = value.clone();
        }
        if let Some(value) = self.wait_time.value() {
            match attrgen::text::parse_duration(value) {
                Ok(value) => target.wait_time = value,
                Err(err) => {
                    diags
                        .push(
                            attrgen::Diagnostic::error(
                                "Failed to convert wait_time",
                                err.to_string(),
                            ),
                        );
                    return diags;
                }
            }
        }
        if let Some(value) = self.token.value() {
            target.token = value.clone();
        }
        if let Some(value) = self.namespace.value() {
            target.namespace = value.clone();
        }
        if let Some(value) = self.partition.value() {
            target.partition = value.clone();
        }
        if let Some(nested) = &self.http_auth {
            let mut value = target.http_auth.take().unwrap_or_default();
            diags.extend(nested.decode_into(&mut value));
            target.http_auth = Some(value);
        }
        if let Some(nested) = &self.tls_config {
            diags.extend(nested.decode_into(&mut target.tls_config));
        }
        if let Some(value) = self.headers.value() {
            target.headers = value.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        }
        diags
    }
}
/// Attribute holder for `consul::HttpBasicAuth`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HttpBasicAuth {
    #[serde(rename = "username")]
    pub username: attrgen::types::String,
    #[serde(rename = "password")]
    pub password: attrgen::types::String,
}
impl HttpBasicAuth {
    /// Builds a holder from a native value; `None` stays `None`.
    pub fn new(value: Option<&consul::HttpBasicAuth>) -> Option<Self> {
        let value = value?;
        Some(Self {
            username: attrgen::types::String::new(value.username.clone()),
            password: attrgen::types::String::new(value.password.clone()),
        })
    }
    /// Reads the holder from `conf` and decodes it into `target`.
    pub fn decode(
        conf: &(impl attrgen::Getter + ?Sized),
        target: &mut consul::HttpBasicAuth,
    ) -> attrgen::Diagnostics {
        match conf.read::<Self>() {
            Ok(model) => model.decode_into(target),
            Err(diags) => diags,
        }
    }
    /// Writes every non-null attribute into `target`.
    pub fn decode_into(
        &self,
        target: &mut consul::HttpBasicAuth,
    ) -> attrgen::Diagnostics {
        let diags = attrgen::Diagnostics::new();
        if let Some(value) = self.username.value() {
            target.username = value.clone();
        }
        if let Some(value) = self.password.value() {
            target.password = value.clone();
        }
        diags
    }
}
/// Attribute holder for `consul::TlsConfig`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    #[serde(rename = "address")]
    pub address: attrgen::types::String,
    #[serde(rename = "ca_file")]
    pub ca_file: attrgen::types::String,
    #[serde(rename = "ca_pem")]
    pub ca_pem: attrgen::types::String,
    #[serde(rename = "cert_file")]
    pub cert_file: attrgen::types::String,
    #[serde(rename = "key_file")]
    pub key_file: attrgen::types::String,
    #[serde(rename = "insecure_skip_verify")]
    pub insecure_skip_verify: attrgen::types::Bool,
}
impl TlsConfig {
    /// Builds a holder from a native value; `None` stays `None`.
    pub fn new(value: Option<&consul::TlsConfig>) -> Option<Self> {
        let value = value?;
        Some(Self {
            address: attrgen::types::String::new(value.address.clone()),
            ca_file: attrgen::types::String::new(value.ca_file.clone()),
            ca_pem: attrgen::types::String::new(
                String::from_utf8_lossy(&value.ca_pem).into_owned(),
            ),
            cert_file: attrgen::types::String::new(value.cert_file.clone()),
            key_file: attrgen::types::String::new(value.key_file.clone()),
            insecure_skip_verify: attrgen::types::Bool::new(value.insecure_skip_verify),
        })
    }
    /// Reads the holder from `conf` and decodes it into `target`.
    pub fn decode(
        conf: &(impl attrgen::Getter + ?Sized),
        target: &mut consul::TlsConfig,
    ) -> attrgen::Diagnostics {
        match conf.read::<Self>() {
            Ok(model) => model.decode_into(target),
            Err(diags) => diags,
        }
    }
    /// Writes every non-null attribute into `target`.
    pub fn decode_into(&self, target: &mut consul::TlsConfig) -> attrgen::Diagnostics {
        let diags = attrgen::Diagnostics::new();
        if let Some(value) = self.address.value() {
            target.address = value.clone();
        }
        if let Some(value) = self.ca_file.value() {
            target.ca_file = value.clone();
        }
        if let Some(value) = self.ca_pem.value() {
            target.ca_pem = value.as_bytes().to_vec();
        }
        if let Some(value) = self.cert_file.value() {
            target.cert_file = value.clone();
        }
        if let Some(value) = self.key_file.value() {
            target.key_file = value.clone();
        }
        if let Some(value) = self.insecure_skip_verify.value() {
            target.insecure_skip_verify = *value;
        }
        diags
    }
}
