//! attrgen Definitions
//!
//! Domain types whose tagged fields are exposed as configuration
//! attributes, together with their descriptor tables. Each domain lives in
//! its own module; [`units`] lists every generation unit in the order
//! `attrgen-gen` processes them.
//!
//! ## Available Units
//!
//! - `provider` - [`provider::ProviderConfig`]
//! - `consul_config` - [`consul::Config`] with `HttpBasicAuth` and `TlsConfig`
//! - `acl_token` - [`acl::AclToken`] with policy links and service identities
//!
//! ## Examples
//!
//! ```
//! use attrgen_definitions::units;
//!
//! let units = units();
//! let names: Vec<_> = units.iter().map(|u| u.name.as_str()).collect();
//! assert_eq!(names, vec!["provider", "consul_config", "acl_token"]);
//! ```

pub mod acl;
pub mod consul;
pub mod prelude;
pub mod provider;

use attrgen_define::GenerationUnit;

/// Every generation unit, in generation order.
pub fn units() -> Vec<GenerationUnit> {
    vec![
        provider::provider_unit(),
        consul::consul_config_unit(),
        acl::acl_token_unit(),
    ]
}
