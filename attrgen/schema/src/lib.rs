// This code was automatically generated by attrgen-gen. Do not edit manually.

//! Attribute schemas and holders generated by attrgen-gen.
//!
//! Each generation unit is a module holding its schema functions and
//! holder types; [`schemas`] collects every unit's schema by name.
pub mod provider;
pub mod consul_config;
pub mod acl_token;
/// Every unit's schema, keyed by unit name.
pub fn schemas() -> std::collections::BTreeMap<&'static str, attrgen::Schema> {
    std::collections::BTreeMap::from([
        ("provider", attrgen::Schema::new(provider::provider_config_attributes())),
        ("consul_config", attrgen::Schema::new(consul_config::config_attributes())),
        ("acl_token", attrgen::Schema::new(acl_token::acl_token_attributes())),
    ])
}
