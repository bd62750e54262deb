//! The known-type registry.
//!
//! Nested attributes can only refer to types that some unit generates a
//! holder for. [`KnownTypes`] records every dependency type across all units
//! together with the unit that owns it; it is built once before any code is
//! emitted and only read afterwards.

use std::collections::BTreeMap;

use attrgen_define::GenerationUnit;
use tracing::debug;

use crate::errors::GeneratorError;
use crate::naming::attributes_fn_name;

/// Dependency type names, each mapped to the unit declaring it.
///
/// ## Examples
///
/// ```
/// use attrgen_gen::registry::KnownTypes;
///
/// let known = KnownTypes::build(&attrgen_definitions::units()).unwrap();
/// assert!(known.contains("HttpBasicAuth"));
/// assert_eq!(known.owner("AclTokenPolicyLink"), Some("acl_token"));
///
/// // Primary types are not nestable.
/// assert!(!known.contains("ProviderConfig"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownTypes {
    owners: BTreeMap<String, String>,
}

impl KnownTypes {
    /// Builds the registry from every unit's dependency list.
    ///
    /// ## Errors
    ///
    /// Every generated holder lives in one crate, so a type name may only be
    /// generated once. A name that appears twice, whether as a dependency of
    /// two units or as both a primary and a dependency type, is reported as
    /// [`GeneratorError::DuplicateType`]. Names are compared by the schema
    /// function they generate, so `HTTPAuth` and `HttpAuth` also collide.
    pub fn build(units: &[GenerationUnit]) -> Result<Self, GeneratorError> {
        let mut declared: BTreeMap<String, &str> = BTreeMap::new();
        for unit in units {
            for ty in unit.types() {
                if let Some(first) = declared.insert(attributes_fn_name(&ty.name), &unit.name) {
                    return Err(GeneratorError::DuplicateType {
                        type_name: ty.name.clone(),
                        first: first.to_string(),
                        second: unit.name.clone(),
                    });
                }
            }
        }

        let owners: BTreeMap<String, String> = units
            .iter()
            .flat_map(|unit| {
                unit.depends_on
                    .iter()
                    .map(move |ty| (ty.name.clone(), unit.name.clone()))
            })
            .collect();

        debug!(count = owners.len(), "built known-type registry");
        Ok(Self { owners })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.owners.contains_key(name)
    }

    /// The unit whose generated module declares `name`.
    pub fn owner(&self, name: &str) -> Option<&str> {
        self.owners.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Known names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.owners.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_struct, make_unit};

    #[test]
    fn dependencies_are_known_primaries_are_not() {
        let units = vec![
            make_unit("first", make_struct("First"), vec![make_struct("Inner")]),
            make_unit("second", make_struct("Second"), vec![make_struct("Other")]),
        ];
        let known = KnownTypes::build(&units).unwrap();

        assert_eq!(known.len(), 2);
        assert!(known.contains("Inner"));
        assert!(known.contains("Other"));
        assert!(!known.contains("First"));
        assert_eq!(known.owner("Other"), Some("second"));
        assert_eq!(known.names().collect::<Vec<_>>(), vec!["Inner", "Other"]);
    }

    #[test]
    fn empty_input_builds_empty_registry() {
        let known = KnownTypes::build(&[]).unwrap();
        assert!(known.is_empty());
        assert_eq!(known.owner("Anything"), None);
    }

    #[test]
    fn shared_dependency_is_a_duplicate() {
        let units = vec![
            make_unit("first", make_struct("First"), vec![make_struct("Shared")]),
            make_unit("second", make_struct("Second"), vec![make_struct("Shared")]),
        ];

        match KnownTypes::build(&units) {
            Err(GeneratorError::DuplicateType {
                type_name,
                first,
                second,
            }) => {
                assert_eq!(type_name, "Shared");
                assert_eq!(first, "first");
                assert_eq!(second, "second");
            }
            other => panic!("expected DuplicateType, got {other:?}"),
        }
    }

    #[test]
    fn primary_reused_as_dependency_is_a_duplicate() {
        let units = vec![
            make_unit("first", make_struct("First"), vec![]),
            make_unit("second", make_struct("Second"), vec![make_struct("First")]),
        ];
        assert!(matches!(
            KnownTypes::build(&units),
            Err(GeneratorError::DuplicateType { .. })
        ));
    }

    #[test]
    fn names_generating_the_same_function_are_duplicates() {
        let units = vec![make_unit(
            "auth",
            make_struct("Auth"),
            vec![make_struct("HTTPAuth"), make_struct("HttpAuth")],
        )];

        match KnownTypes::build(&units) {
            Err(GeneratorError::DuplicateType {
                type_name,
                first,
                second,
            }) => {
                assert_eq!(type_name, "HttpAuth");
                assert_eq!(first, "auth");
                assert_eq!(second, "auth");
            }
            other => panic!("expected DuplicateType, got {other:?}"),
        }
    }
}
