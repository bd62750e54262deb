//! attrgen code generator library.
//!
//! This crate turns the type descriptors from `attrgen-define` into Rust
//! source for a crate built on the `attrgen` runtime. For every generation
//! unit it emits:
//!
//! - A schema function per type returning its `attrgen::Attributes`
//! - A holder struct per type whose fields are `attrgen::types` values
//! - `new()` to build a holder from a native value
//! - `decode()`/`decode_into()` to write configured values back into a native value
//!
//! plus a `lib.rs` whose `schemas()` function maps every unit to its schema.
//!
//! ## Modules
//!
//! - [`registry`] - Known nested types, built once per run
//! - [`mapper`] - Field type -> attribute type resolution
//! - [`codegen`] - Schema and holder emitters
//! - [`output`] - Orchestration, validation, formatting and file writing
//! - [`validation`] - Unit list checks
//! - [`naming`] - Identifier casing and validation
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use attrgen_gen::output::generate_and_write;
//!
//! let units = attrgen_definitions::units();
//! let output_dir = Path::new("generated/src");
//!
//! // dry_run=true prints instead of writing
//! let artifacts = generate_and_write(&units, output_dir, true).unwrap();
//! assert_eq!(artifacts.len(), units.len() + 1);
//! ```
//!
//! ## Generated Code Structure
//!
//! For a unit `provider` whose primary type is `ProviderConfig`:
//!
//! ```text
//! pub fn provider_config_attributes() -> attrgen::Attributes { ... }
//!
//! pub struct ProviderConfig {
//!     #[serde(rename = "host")]
//!     pub host: attrgen::types::String,
//!     ...
//! }
//!
//! impl ProviderConfig {
//!     pub fn new(value: Option<&provider::ProviderConfig>) -> Option<Self>;
//!     pub fn decode(conf: &(impl attrgen::Getter + ?Sized), target: &mut provider::ProviderConfig) -> attrgen::Diagnostics;
//!     pub fn decode_into(&self, target: &mut provider::ProviderConfig) -> attrgen::Diagnostics;
//! }
//! ```

pub mod codegen;
pub mod errors;
pub mod mapper;
pub mod naming;
pub mod output;
pub mod registry;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;
