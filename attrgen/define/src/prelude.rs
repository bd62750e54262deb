//! Convenient re-exports for writing descriptor tables.
//!
//! ```
//! use attrgen_define::prelude::*;
//!
//! let ty = TypeDescriptor::structure("Link", "acl::Link").field::<String>("id", "id");
//! assert_eq!(ty.kind, Kind::Struct);
//! ```

pub use crate::describe::Describe;
pub use crate::descriptor::{Field, IntKind, Kind, OpaqueKind, TypeDescriptor};
pub use crate::unit::GenerationUnit;
