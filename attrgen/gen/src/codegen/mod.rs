//! Code generation for one generation unit.
//!
//! A unit's module contains, in order:
//!
//! 1. `use` items for the unit's imports and for nested holders owned by
//!    other units
//! 2. A schema function per type ([`schema`])
//! 3. A holder struct with `new`/`decode`/`decode_into` per type ([`model`])
//!
//! Both emitters work from the same [`MappedField`]s, produced once per type
//! by the [`crate::mapper`].
//!
//! ## Output Format
//!
//! All generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn::parse2` to ensure correctness
//! - Formatted with `prettyplease` for consistent style
//!
//! See [`crate::output`] for the assembly and file writing logic.

pub mod model;
pub mod schema;

use std::collections::{BTreeMap, BTreeSet};

use attrgen_define::GenerationUnit;
use proc_macro2::TokenStream;
use quote::quote;
use tracing::debug;

use crate::errors::GeneratorError;
use crate::mapper::{MappedField, map_fields};
use crate::naming::{attributes_fn_name, ident, use_path};
use crate::registry::KnownTypes;

pub use model::{generate_getter, generate_model, generate_setter};
pub use schema::generate_attributes_fn;

/// Generates the complete module for `unit`.
///
/// ## Errors
///
/// Fails on the first type that cannot be mapped or has no tagged fields;
/// nothing is returned for a unit that fails part-way.
pub fn generate_unit_module(
    unit: &GenerationUnit,
    known: &KnownTypes,
) -> Result<TokenStream, GeneratorError> {
    let mut schemas = Vec::new();
    let mut models = Vec::new();
    let mut mapped_types = Vec::new();

    for (index, ty) in unit.types().enumerate() {
        let fields = map_fields(&unit.name, ty, known)?;
        debug!(unit = %unit.name, type_name = %ty.name, fields = fields.len(), "generating type");

        schemas.push(generate_attributes_fn(&unit.name, ty, &fields, index == 0)?);
        models.push(generate_model(ty, &fields)?);
        mapped_types.push(fields);
    }

    let imports = generate_imports(unit, known, &mapped_types)?;
    let doc = format!(
        " Attribute schemas and holders for the `{}` unit.",
        unit.name
    );

    Ok(quote! {
        #![doc = #doc]

        #imports

        #(#schemas)*

        #(#models)*
    })
}

/// `use` items for the unit's import paths, then for nested holders that
/// another unit declares.
fn generate_imports(
    unit: &GenerationUnit,
    known: &KnownTypes,
    mapped_types: &[Vec<MappedField>],
) -> Result<TokenStream, GeneratorError> {
    let context = format!("import of unit '{}'", unit.name);
    let paths = unit
        .imports
        .iter()
        .map(|import| use_path(import, &context))
        .collect::<Result<Vec<_>, _>>()?;

    let mut foreign: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for field in mapped_types.iter().flatten() {
        if let Some(nested) = field.attribute_type.nested_type()
            && let Some(owner) = known.owner(nested)
            && owner != unit.name
        {
            foreign.entry(owner).or_default().insert(nested);
        }
    }

    let mut cross_unit = Vec::with_capacity(foreign.len());
    for (owner, names) in foreign {
        let module = ident(owner, &context)?;
        let mut items = Vec::with_capacity(names.len() * 2);
        for name in names {
            items.push(ident(name, &context)?);
            items.push(ident(&attributes_fn_name(name), &context)?);
        }
        cross_unit.push(quote! { use crate::#module::{#(#items),*}; });
    }

    Ok(quote! {
        #(use #paths;)*
        #(#cross_unit)*
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{compact, format_tokens, make_empty_struct, make_provider_unit, make_struct, make_unit};
    use attrgen_define::{Field, Kind, TypeDescriptor};

    fn with_nested(name: &str, path: &str, nested: &str) -> TypeDescriptor {
        let mut ty = TypeDescriptor::structure(name, path).field::<String>("value", "value");
        ty.fields.push(Field::new(
            "nested",
            TypeDescriptor::scalar(
                format!("Option<{nested}>"),
                Kind::Optional(Box::new(make_struct(nested))),
            ),
            "nested",
        ));
        ty
    }

    #[test]
    fn provider_module_is_a_valid_file() {
        let unit = make_provider_unit();
        let known = KnownTypes::build(std::slice::from_ref(&unit)).unwrap();
        let tokens = generate_unit_module(&unit, &known).unwrap();
        let code = format_tokens(&tokens);

        assert!(code.starts_with("//! Attribute schemas and holders for the `provider` unit."));
        assert!(code.contains("use crate::native;"));
        assert!(code.contains("pub fn provider_config_attributes()"));
        assert!(code.contains("pub struct ProviderConfig"));
        assert!(code.contains("pub fn new(value: Option<&native::ProviderConfig>) -> Option<Self>"));
    }

    #[test]
    fn schema_functions_precede_holders() {
        let unit = make_unit("first", make_struct("First"), vec![make_struct("Inner")]);
        let known = KnownTypes::build(std::slice::from_ref(&unit)).unwrap();
        let code = compact(&generate_unit_module(&unit, &known).unwrap());

        let primary_fn = code.find("pubfnfirst_attributes").unwrap();
        let dependency_fn = code.find("pub(crate)fninner_attributes").unwrap();
        let first_struct = code.find("pubstructFirst").unwrap();
        assert!(primary_fn < dependency_fn);
        assert!(dependency_fn < first_struct);
    }

    #[test]
    fn nested_holders_from_other_units_are_imported() {
        let units = vec![
            make_unit("auth", make_struct("AuthConfig"), vec![make_struct("Credentials")]),
            make_unit(
                "client",
                with_nested("Client", "native::Client", "Credentials"),
                vec![],
            ),
        ];
        let known = KnownTypes::build(&units).unwrap();
        let code = compact(&generate_unit_module(&units[1], &known).unwrap());

        assert!(code.contains("usecrate::auth::{Credentials,credentials_attributes};"));
    }

    #[test]
    fn own_nested_holders_are_not_imported() {
        let unit = make_unit(
            "client",
            with_nested("Client", "native::Client", "Credentials"),
            vec![make_struct("Credentials")],
        );
        let known = KnownTypes::build(std::slice::from_ref(&unit)).unwrap();
        let code = compact(&generate_unit_module(&unit, &known).unwrap());

        assert!(!code.contains("credentials_attributes};"));
        assert!(code.contains("pubstructCredentials"));
    }

    #[test]
    fn empty_dependency_fails_the_unit() {
        let unit = make_unit("unit", make_struct("Primary"), vec![make_empty_struct("Hollow")]);
        let known = KnownTypes::build(std::slice::from_ref(&unit)).unwrap();

        match generate_unit_module(&unit, &known) {
            Err(GeneratorError::EmptySchema { unit, type_name }) => {
                assert_eq!(unit, "unit");
                assert_eq!(type_name, "Hollow");
            }
            other => panic!("expected EmptySchema, got {other:?}"),
        }
    }

    #[test]
    fn unknown_nested_type_fails_with_unit_and_field() {
        let unit = make_unit(
            "client",
            with_nested("Client", "native::Client", "Missing"),
            vec![],
        );
        let known = KnownTypes::build(std::slice::from_ref(&unit)).unwrap();

        match generate_unit_module(&unit, &known) {
            Err(GeneratorError::Mapping { unit, field, .. }) => {
                assert_eq!(unit, "client");
                assert_eq!(field, "nested");
            }
            other => panic!("expected Mapping error, got {other:?}"),
        }
    }

    #[test]
    fn bad_import_is_an_invalid_identifier() {
        let unit = make_provider_unit().with_import("not a path");
        let known = KnownTypes::default();

        assert!(matches!(
            generate_unit_module(&unit, &known),
            Err(GeneratorError::InvalidIdentifier { .. })
        ));
    }
}
