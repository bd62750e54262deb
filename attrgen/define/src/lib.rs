//! attrgen Definition Library
//!
//! This crate provides the primitives for describing native Rust types to
//! the `attrgen-gen` code generator. Instead of discovering fields at
//! runtime, every domain type carries an explicit descriptor table listing
//! its fields, their types and their recognition tags.
//!
//! ## Core Types
//!
//! - [`TypeDescriptor`] - The shape of one native type (name, path, kind, fields)
//! - [`Kind`] - Scalar, optional, sequence, mapping, struct or opaque leaf
//! - [`Field`] - A declared field with its recognition tag (empty tag = excluded)
//! - [`Describe`] - Trait producing the descriptor of a type
//! - [`GenerationUnit`] - A primary type plus its dependency types
//!
//! ## Examples
//!
//! ```
//! use attrgen_define::{Describe, GenerationUnit, TypeDescriptor};
//!
//! struct ProviderConfig {
//!     host: String,
//!     username: String,
//!     password: String,
//! }
//!
//! impl Describe for ProviderConfig {
//!     fn describe() -> TypeDescriptor {
//!         TypeDescriptor::structure("ProviderConfig", "provider::ProviderConfig")
//!             .field::<String>("host", "host")
//!             .field::<String>("username", "username")
//!             .field::<String>("password", "password")
//!     }
//! }
//!
//! let unit = GenerationUnit::of::<ProviderConfig>("provider")
//!     .with_import("my_crate::provider");
//!
//! assert_eq!(unit.object.name, "ProviderConfig");
//! assert_eq!(unit.object.tagged_fields().count(), 3);
//! ```

pub mod describe;
pub mod descriptor;
pub mod prelude;
pub mod unit;

pub use describe::Describe;
pub use descriptor::{Field, IntKind, Kind, OpaqueKind, TypeDescriptor};
pub use unit::GenerationUnit;
