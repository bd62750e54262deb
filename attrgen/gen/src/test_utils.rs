//! Shared test fixtures for attrgen-gen tests.

use attrgen_define::{GenerationUnit, TypeDescriptor};
use proc_macro2::TokenStream;

/// A struct descriptor at `native::{name}` with a single tagged `String` field.
pub fn make_struct(name: &str) -> TypeDescriptor {
    TypeDescriptor::structure(name, format!("native::{name}")).field::<String>("value", "value")
}

/// A struct descriptor with no tagged fields at all.
pub fn make_empty_struct(name: &str) -> TypeDescriptor {
    TypeDescriptor::structure(name, format!("native::{name}")).untagged::<u64>("index")
}

/// A unit importing `native` with the given primary and dependency types.
pub fn make_unit(name: &str, object: TypeDescriptor, depends_on: Vec<TypeDescriptor>) -> GenerationUnit {
    depends_on.into_iter().fold(
        GenerationUnit::new(name, object).with_import("crate::native"),
        GenerationUnit::with_dependency,
    )
}

/// The provider-style unit: three tagged strings, no dependencies.
pub fn make_provider_unit() -> GenerationUnit {
    let object = TypeDescriptor::structure("ProviderConfig", "native::ProviderConfig")
        .field::<String>("host", "host")
        .field::<String>("username", "username")
        .field::<String>("password", "password");
    make_unit("provider", object, vec![])
}

/// Formats generated code using prettyplease.
///
/// ## Panics
///
/// Panics if the tokens do not parse as a Rust file.
pub fn format_tokens(tokens: &TokenStream) -> String {
    let file = syn::parse2::<syn::File>(tokens.clone()).expect("generated code should parse");
    prettyplease::unparse(&file)
}

/// Token text with all whitespace removed, for substring assertions that
/// should not depend on how `quote!` spaces tokens.
pub fn compact(tokens: &TokenStream) -> String {
    tokens.to_string().split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_unit_keeps_dependency_order() {
        let unit = make_unit(
            "unit",
            make_struct("Primary"),
            vec![make_struct("A"), make_struct("B")],
        );
        let names: Vec<_> = unit.types().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Primary", "A", "B"]);
        assert_eq!(unit.imports, vec!["crate::native"]);
    }

    #[test]
    fn empty_struct_has_no_tagged_fields() {
        let ty = make_empty_struct("Empty");
        assert_eq!(ty.fields.len(), 1);
        assert_eq!(ty.tagged_fields().count(), 0);
    }
}
