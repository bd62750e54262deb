//! Consul client configuration.
//!
//! Mirrors the settings a Consul API client needs: where the agent lives,
//! how to authenticate, and how to set up TLS.

use std::collections::BTreeMap;
use std::time::Duration;

use attrgen_define::{Describe, GenerationUnit, TypeDescriptor};
use serde::{Deserialize, Serialize};

/// Client configuration for a Consul agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub address: String,
    pub scheme: String,
    pub path_prefix: String,
    pub datacenter: String,
    /// Maximum time a blocking query waits for a change.
    pub wait_time: Duration,
    pub token: String,
    pub namespace: String,
    pub partition: String,
    pub http_auth: Option<HttpBasicAuth>,
    pub tls_config: TlsConfig,
    pub headers: BTreeMap<String, String>,
    /// Index used by blocking queries; runtime state, never configured.
    pub wait_index: u64,
}

/// HTTP basic authentication credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpBasicAuth {
    pub username: String,
    pub password: String,
}

/// TLS settings for the agent connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Server name used for SNI and certificate verification.
    pub address: String,
    pub ca_file: String,
    /// PEM-encoded CA bundle.
    pub ca_pem: Vec<u8>,
    pub cert_file: String,
    pub key_file: String,
    pub insecure_skip_verify: bool,
}

impl Describe for Config {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::structure("Config", "consul::Config")
            .field::<String>("address", "address")
            .field::<String>("scheme", "scheme")
            .field::<String>("path_prefix", "path_prefix")
            .field::<String>("datacenter", "datacenter")
            .field::<Duration>("wait_time", "wait_time")
            .field::<String>("token", "token")
            .field::<String>("namespace", "namespace")
            .field::<String>("partition", "partition")
            .field::<Option<HttpBasicAuth>>("http_auth", "http_auth")
            .field::<TlsConfig>("tls_config", "tls_config")
            .field::<BTreeMap<String, String>>("headers", "headers")
            .untagged::<u64>("wait_index")
    }
}

impl Describe for HttpBasicAuth {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::structure("HttpBasicAuth", "consul::HttpBasicAuth")
            .field::<String>("username", "username")
            .field::<String>("password", "password")
    }
}

impl Describe for TlsConfig {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::structure("TlsConfig", "consul::TlsConfig")
            .field::<String>("address", "address")
            .field::<String>("ca_file", "ca_file")
            .field::<Vec<u8>>("ca_pem", "ca_pem")
            .field::<String>("cert_file", "cert_file")
            .field::<String>("key_file", "key_file")
            .field::<bool>("insecure_skip_verify", "insecure_skip_verify")
    }
}

pub fn consul_config_unit() -> GenerationUnit {
    GenerationUnit::of::<Config>("consul_config")
        .with_import("attrgen_definitions::consul")
        .depending_on::<HttpBasicAuth>()
        .depending_on::<TlsConfig>()
}
