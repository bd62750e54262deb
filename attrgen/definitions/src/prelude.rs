//! Convenient re-exports for working with the bundled definitions.
//!
//! ```
//! use attrgen_definitions::prelude::*;
//!
//! assert_eq!(units().len(), 3);
//! let config = Config::default();
//! assert!(config.http_auth.is_none());
//! ```

pub use crate::units;

pub use crate::acl::{AclServiceIdentity, AclToken, AclTokenPolicyLink, acl_token_unit};
pub use crate::consul::{Config, HttpBasicAuth, TlsConfig, consul_config_unit};
pub use crate::provider::{ProviderConfig, provider_unit};
