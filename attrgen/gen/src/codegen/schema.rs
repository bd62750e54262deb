//! Schema function generation.
//!
//! Each generated type gets a function returning its `attrgen::Attributes`:
//!
//! ```text
//! pub fn provider_config_attributes() -> attrgen::Attributes {
//!     attrgen::Attributes::from([
//!         ("host", attrgen::Attribute::optional(attrgen::AttributeType::String)),
//!         ...
//!     ])
//! }
//! ```
//!
//! Nested attributes call the nested type's function, so a schema is always
//! built from the same functions the holders were generated next to.

use attrgen_define::TypeDescriptor;
use proc_macro2::TokenStream;
use quote::quote;

use crate::errors::GeneratorError;
use crate::mapper::{AttributeType, MappedField};
use crate::naming::{attributes_fn_name, ident};

/// Generates the schema function for `ty`.
///
/// The primary type's function is `pub`; dependency types get `pub(crate)`
/// since they are only reachable through the primary schema.
///
/// ## Errors
///
/// Returns [`GeneratorError::EmptySchema`] when `fields` is empty and
/// [`GeneratorError::InvalidIdentifier`] for names that are not identifiers.
pub fn generate_attributes_fn(
    unit: &str,
    ty: &TypeDescriptor,
    fields: &[MappedField],
    public: bool,
) -> Result<TokenStream, GeneratorError> {
    if fields.is_empty() {
        return Err(GeneratorError::EmptySchema {
            unit: unit.to_string(),
            type_name: ty.name.clone(),
        });
    }

    let fn_name = ident(
        &attributes_fn_name(&ty.name),
        &format!("schema function of type '{}'", ty.name),
    )?;

    let entries = fields
        .iter()
        .map(|field| {
            let tag = &field.tag;
            let attribute_type = attribute_type_tokens(&field.attribute_type)?;
            Ok(quote! {
                (#tag, attrgen::Attribute::optional(#attribute_type))
            })
        })
        .collect::<Result<Vec<_>, GeneratorError>>()?;

    let visibility = if public {
        quote! { pub }
    } else {
        quote! { pub(crate) }
    };
    let doc = format!(" Attributes of `{}`.", ty.path);

    Ok(quote! {
        #[doc = #doc]
        #visibility fn #fn_name() -> attrgen::Attributes {
            attrgen::Attributes::from([
                #(#entries),*
            ])
        }
    })
}

/// The `attrgen::AttributeType` expression for one attribute.
pub fn attribute_type_tokens(attribute_type: &AttributeType) -> Result<TokenStream, GeneratorError> {
    let tokens = match attribute_type {
        AttributeType::Bool => quote! { attrgen::AttributeType::Bool },
        AttributeType::Number => quote! { attrgen::AttributeType::Number },
        AttributeType::String => quote! { attrgen::AttributeType::String },
        AttributeType::ListOfString => quote! { attrgen::AttributeType::ListOfString },
        AttributeType::MapOfStringToString => {
            quote! { attrgen::AttributeType::MapOfStringToString }
        }
        AttributeType::NestedObject(name) => {
            let nested = nested_fn(name)?;
            quote! { attrgen::AttributeType::SingleNested(#nested()) }
        }
        AttributeType::ListOfNestedObject(name) => {
            let nested = nested_fn(name)?;
            quote! { attrgen::AttributeType::ListNested(#nested()) }
        }
    };
    Ok(tokens)
}

fn nested_fn(type_name: &str) -> Result<proc_macro2::Ident, GeneratorError> {
    ident(
        &attributes_fn_name(type_name),
        &format!("schema function of type '{type_name}'"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{Conversion, map_fields};
    use crate::registry::KnownTypes;
    use crate::test_utils::{compact, format_tokens, make_empty_struct, make_provider_unit};

    #[test]
    fn provider_schema_has_three_optional_strings() {
        let unit = make_provider_unit();
        let fields = map_fields(&unit.name, &unit.object, &KnownTypes::default()).unwrap();
        let tokens = generate_attributes_fn(&unit.name, &unit.object, &fields, true).unwrap();
        let code = format_tokens(&tokens);

        assert!(code.contains("pub fn provider_config_attributes() -> attrgen::Attributes"));
        for tag in ["\"host\"", "\"username\"", "\"password\""] {
            assert!(code.contains(tag), "missing {tag} in:\n{code}");
        }
        assert_eq!(
            compact(&tokens)
                .matches("attrgen::Attribute::optional(attrgen::AttributeType::String)")
                .count(),
            3
        );
    }

    #[test]
    fn dependency_functions_are_crate_private() {
        let unit = make_provider_unit();
        let fields = map_fields(&unit.name, &unit.object, &KnownTypes::default()).unwrap();
        let tokens = generate_attributes_fn(&unit.name, &unit.object, &fields, false).unwrap();

        assert!(compact(&tokens).contains("pub(crate)fnprovider_config_attributes"));
    }

    #[test]
    fn nested_attributes_call_the_nested_function() {
        let fields = vec![
            MappedField {
                name: "http_auth".to_string(),
                tag: "http_auth".to_string(),
                attribute_type: AttributeType::NestedObject("HttpBasicAuth".to_string()),
                conversion: Conversion::Nested { optional: true },
            },
            MappedField {
                name: "policies".to_string(),
                tag: "policies".to_string(),
                attribute_type: AttributeType::ListOfNestedObject("AclTokenPolicyLink".to_string()),
                conversion: Conversion::NestedList {
                    optional_items: false,
                },
            },
        ];
        let ty = make_empty_struct("Config");
        let tokens = generate_attributes_fn("unit", &ty, &fields, true).unwrap();
        let code = compact(&tokens);

        assert!(code.contains("SingleNested(http_basic_auth_attributes())"));
        assert!(code.contains("ListNested(acl_token_policy_link_attributes())"));
    }

    #[test]
    fn zero_fields_is_an_empty_schema() {
        let ty = make_empty_struct("Empty");
        match generate_attributes_fn("unit", &ty, &[], true) {
            Err(GeneratorError::EmptySchema { unit, type_name }) => {
                assert_eq!(unit, "unit");
                assert_eq!(type_name, "Empty");
            }
            other => panic!("expected EmptySchema, got {other:?}"),
        }
    }

    #[test]
    fn tags_are_emitted_as_escaped_literals() {
        let fields = vec![MappedField {
            name: "weird".to_string(),
            tag: "needs \"quotes\"".to_string(),
            attribute_type: AttributeType::Bool,
            conversion: Conversion::Bool,
        }];
        let ty = make_empty_struct("Weird");
        let tokens = generate_attributes_fn("unit", &ty, &fields, true).unwrap();
        let code = format_tokens(&tokens);

        assert!(code.contains(r#""needs \"quotes\"""#));
    }
}
