//! Runtime support for attrgen-generated code.
//!
//! Code produced by `attrgen-gen` exchanges values with a declarative
//! configuration framework through the types in this crate:
//!
//! - [`types`] - Nullable attribute values (`Bool`, `Number`, `String`, `List`, `Map`)
//! - [`Attribute`], [`AttributeType`], [`Attributes`], [`Schema`] - Attribute schemas
//! - [`Diagnostic`], [`Diagnostics`] - Non-fatal error reporting used by decoders
//! - [`Getter`] - A source of configuration that can be read into a holder type
//! - [`text`] - Textual encodings for opaque leaf types (durations, timestamps)
//!
//! ## Examples
//!
//! ```
//! use attrgen::{Attribute, AttributeType, Attributes, types};
//!
//! let attributes = Attributes::from([
//!     ("host", Attribute::optional(AttributeType::String)),
//!     ("port", Attribute::optional(AttributeType::Number)),
//! ]);
//! assert_eq!(attributes.len(), 2);
//!
//! let host = types::String::new("localhost".to_string());
//! assert_eq!(host.value().map(String::as_str), Some("localhost"));
//! assert!(types::Number::null().is_null());
//! ```

pub mod diag;
pub mod getter;
pub mod schema;
pub mod text;
pub mod types;

pub use diag::{Diagnostic, Diagnostics, Severity};
pub use getter::Getter;
pub use schema::{Attribute, AttributeType, Attributes, Schema};
