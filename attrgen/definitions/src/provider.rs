//! Provider-level connection settings.

use attrgen_define::{Describe, GenerationUnit, TypeDescriptor};
use serde::{Deserialize, Serialize};

/// Credentials and endpoint used to reach the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub host: String,
    pub username: String,
    pub password: String,
}

impl Describe for ProviderConfig {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::structure("ProviderConfig", "provider::ProviderConfig")
            .field::<String>("host", "host")
            .field::<String>("username", "username")
            .field::<String>("password", "password")
    }
}

pub fn provider_unit() -> GenerationUnit {
    GenerationUnit::of::<ProviderConfig>("provider").with_import("attrgen_definitions::provider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_tagged_with_its_own_name() {
        let ty = ProviderConfig::describe();
        for field in &ty.fields {
            assert_eq!(field.name, field.tag);
        }
        assert_eq!(ty.tagged_fields().count(), 3);
    }

    #[test]
    fn unit_has_no_dependencies() {
        assert!(provider_unit().depends_on.is_empty());
    }
}
