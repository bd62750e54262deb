//! Generation units.

use serde::Serialize;

use crate::describe::Describe;
use crate::descriptor::TypeDescriptor;

/// One primary type plus the dependency types generated alongside it.
///
/// The unit name becomes the generated module name and the key of the
/// aggregate schema registry. Import paths are emitted as `use` items so
/// that descriptor paths such as `consul::Config` resolve.
///
/// ## Examples
///
/// ```
/// use attrgen_define::{GenerationUnit, TypeDescriptor};
///
/// let auth = TypeDescriptor::structure("HttpBasicAuth", "consul::HttpBasicAuth")
///     .field::<String>("username", "username");
/// let config = TypeDescriptor::structure("Config", "consul::Config")
///     .field::<String>("address", "address");
///
/// let unit = GenerationUnit::new("consul_config", config)
///     .with_import("my_crate::consul")
///     .with_dependency(auth);
///
/// assert_eq!(unit.imports, vec!["my_crate::consul"]);
/// assert_eq!(unit.depends_on[0].name, "HttpBasicAuth");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationUnit {
    pub name: String,
    pub imports: Vec<String>,
    /// The primary type, generated under its own (public) name.
    pub object: TypeDescriptor,
    /// Types the primary type nests, in generation order.
    pub depends_on: Vec<TypeDescriptor>,
}

impl GenerationUnit {
    pub fn new(name: impl Into<String>, object: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            imports: Vec::new(),
            object,
            depends_on: Vec::new(),
        }
    }

    /// Creates a unit whose primary type is `T`.
    pub fn of<T: Describe>(name: impl Into<String>) -> Self {
        Self::new(name, T::describe())
    }

    #[must_use]
    pub fn with_import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }

    #[must_use]
    pub fn with_dependency(mut self, ty: TypeDescriptor) -> Self {
        self.depends_on.push(ty);
        self
    }

    /// Adds `T` as a dependency type.
    #[must_use]
    pub fn depending_on<T: Describe>(self) -> Self {
        self.with_dependency(T::describe())
    }

    /// The primary type followed by every dependency type.
    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        std::iter::once(&self.object).chain(self.depends_on.iter())
    }
}
