//! ACL tokens.

use std::time::Duration;

use attrgen_define::{Describe, GenerationUnit, TypeDescriptor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclToken {
    pub accessor_id: String,
    pub secret_id: String,
    pub description: String,
    pub local: bool,
    pub expiration_ttl: Duration,
    pub create_time: DateTime<Utc>,
    pub create_index: u64,
    pub policies: Vec<AclTokenPolicyLink>,
    pub service_identities: Vec<AclServiceIdentity>,
    pub modify_index: u64,
}

/// Reference to a policy attached to a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclTokenPolicyLink {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclServiceIdentity {
    pub service_name: String,
    pub datacenters: Vec<String>,
}

impl Describe for AclToken {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::structure("AclToken", "acl::AclToken")
            .field::<String>("accessor_id", "accessor_id")
            .field::<String>("secret_id", "secret_id")
            .field::<String>("description", "description")
            .field::<bool>("local", "local")
            .field::<Duration>("expiration_ttl", "expiration_ttl")
            .field::<DateTime<Utc>>("create_time", "create_time")
            .field::<u64>("create_index", "create_index")
            .field::<Vec<AclTokenPolicyLink>>("policies", "policies")
            .field::<Vec<AclServiceIdentity>>("service_identities", "service_identities")
            .untagged::<u64>("modify_index")
    }
}

impl Describe for AclTokenPolicyLink {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::structure("AclTokenPolicyLink", "acl::AclTokenPolicyLink")
            .field::<String>("id", "id")
            .field::<String>("name", "name")
    }
}

impl Describe for AclServiceIdentity {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::structure("AclServiceIdentity", "acl::AclServiceIdentity")
            .field::<String>("service_name", "service_name")
            .field::<Vec<String>>("datacenters", "datacenters")
    }
}

pub fn acl_token_unit() -> GenerationUnit {
    GenerationUnit::of::<AclToken>("acl_token")
        .with_import("attrgen_definitions::acl")
        .depending_on::<AclTokenPolicyLink>()
        .depending_on::<AclServiceIdentity>()
}
