//! Holder type generation.
//!
//! For every generated type this emits a holder struct with one
//! `attrgen::types` field per tagged field, plus three functions:
//!
//! - `new(Option<&Native>) -> Option<Self>` builds the holder from a native value
//! - `decode(&impl Getter, &mut Native)` reads the holder from a configuration
//!   source and decodes it
//! - `decode_into(&self, &mut Native)` writes every non-null attribute back
//!   into the native value
//!
//! Decoding stops at the first value that cannot be converted (an unparsable
//! duration, an out-of-range number). Later fields are left untouched and the
//! returned diagnostics carry the failure. Diagnostics from nested holders
//! are merged and do not stop the parent.

use attrgen_define::{IntKind, TypeDescriptor};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::errors::GeneratorError;
use crate::mapper::{AttributeType, Conversion, MappedField};
use crate::naming::{ident, type_path};

/// Generates the holder struct and its `impl` block for `ty`.
pub fn generate_model(ty: &TypeDescriptor, fields: &[MappedField]) -> Result<TokenStream, GeneratorError> {
    let holder = ident(&ty.name, &format!("holder for type '{}'", ty.name))?;
    let native = type_path(&ty.path, &format!("path of type '{}'", ty.name))?;

    let mut declarations = Vec::with_capacity(fields.len());
    let mut setters = Vec::with_capacity(fields.len());
    let mut getters = Vec::with_capacity(fields.len());
    for field in fields {
        let name = ident(&field.name, &format!("field of type '{}'", ty.name))?;
        let holder_type = holder_field_type(field)?;
        let tag = &field.tag;

        declarations.push(quote! {
            #[serde(rename = #tag)]
            pub #name: #holder_type
        });
        setters.push(generate_setter(&name, field)?);
        getters.push(generate_getter(&name, field)?);
    }

    let diags = if fields.iter().any(|f| writes_diagnostics(&f.conversion)) {
        quote! { let mut diags = attrgen::Diagnostics::new(); }
    } else {
        quote! { let diags = attrgen::Diagnostics::new(); }
    };

    let struct_doc = format!(" Attribute holder for `{}`.", ty.path);

    Ok(quote! {
        #[doc = #struct_doc]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct #holder {
            #(#declarations),*
        }

        impl #holder {
            /// Builds a holder from a native value; `None` stays `None`.
            pub fn new(value: Option<&#native>) -> Option<Self> {
                let value = value?;
                Some(Self {
                    #(#setters),*
                })
            }

            /// Reads the holder from `conf` and decodes it into `target`.
            pub fn decode(
                conf: &(impl attrgen::Getter + ?Sized),
                target: &mut #native,
            ) -> attrgen::Diagnostics {
                match conf.read::<Self>() {
                    Ok(model) => model.decode_into(target),
                    Err(diags) => diags,
                }
            }

            /// Writes every non-null attribute into `target`.
            pub fn decode_into(&self, target: &mut #native) -> attrgen::Diagnostics {
                #diags
                #(#getters)*
                diags
            }
        }
    })
}

fn writes_diagnostics(conversion: &Conversion) -> bool {
    matches!(
        conversion,
        Conversion::Integer(_)
            | Conversion::Duration
            | Conversion::Timestamp
            | Conversion::Nested { .. }
            | Conversion::NestedList { .. }
    )
}

fn holder_field_type(field: &MappedField) -> Result<TokenStream, GeneratorError> {
    let tokens = match &field.conversion {
        Conversion::Bool => quote! { attrgen::types::Bool },
        Conversion::Integer(_) => quote! { attrgen::types::Number },
        Conversion::Text | Conversion::Duration | Conversion::Timestamp | Conversion::Bytes => {
            quote! { attrgen::types::String }
        }
        Conversion::StringList => quote! { attrgen::types::List },
        Conversion::StringMap => quote! { attrgen::types::Map },
        Conversion::Nested { .. } => {
            let nested = nested_holder(&field.attribute_type, field)?;
            quote! { Option<#nested> }
        }
        Conversion::NestedList { .. } => {
            let nested = nested_holder(&field.attribute_type, field)?;
            quote! { Option<Vec<#nested>> }
        }
    };
    Ok(tokens)
}

fn nested_holder(attribute_type: &AttributeType, field: &MappedField) -> Result<Ident, GeneratorError> {
    let name = attribute_type
        .nested_type()
        .ok_or_else(|| GeneratorError::InvalidIdentifier {
            ident: field.name.clone(),
            context: "nested field without a nested type".to_string(),
        })?;
    ident(name, &format!("nested holder of field '{}'", field.name))
}

/// Native -> holder expression for one field, as a struct-literal field
/// reading from `value`.
pub fn generate_setter(name: &Ident, field: &MappedField) -> Result<TokenStream, GeneratorError> {
    let value = match &field.conversion {
        Conversion::Bool => quote! { attrgen::types::Bool::new(value.#name) },
        Conversion::Integer(kind) if kind.is_pointer_sized() => {
            quote! { attrgen::types::Number::new(value.#name as i128) }
        }
        Conversion::Integer(_) => quote! { attrgen::types::Number::new(i128::from(value.#name)) },
        Conversion::Text => quote! { attrgen::types::String::new(value.#name.clone()) },
        Conversion::Duration => {
            quote! { attrgen::types::String::new(attrgen::text::format_duration(value.#name)) }
        }
        Conversion::Timestamp => {
            quote! { attrgen::types::String::new(attrgen::text::format_timestamp(&value.#name)) }
        }
        Conversion::Bytes => quote! {
            attrgen::types::String::new(String::from_utf8_lossy(&value.#name).into_owned())
        },
        Conversion::StringList => quote! { attrgen::types::List::new(value.#name.clone()) },
        Conversion::StringMap => quote! {
            attrgen::types::Map::new(
                value.#name.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            )
        },
        Conversion::Nested { optional: false } => {
            let nested = nested_holder(&field.attribute_type, field)?;
            quote! { #nested::new(Some(&value.#name)) }
        }
        Conversion::Nested { optional: true } => {
            let nested = nested_holder(&field.attribute_type, field)?;
            quote! { #nested::new(value.#name.as_ref()) }
        }
        Conversion::NestedList { optional_items } => {
            let nested = nested_holder(&field.attribute_type, field)?;
            let item = if *optional_items {
                quote! { item.as_ref() }
            } else {
                quote! { Some(item) }
            };
            quote! {
                Some(value.#name.iter().filter_map(|item| #nested::new(#item)).collect())
            }
        }
    };
    Ok(quote! { #name: #value })
}

/// Holder -> native statements for one field, writing into `target`.
///
/// Expects `diags` in scope; fallible conversions return it early.
pub fn generate_getter(name: &Ident, field: &MappedField) -> Result<TokenStream, GeneratorError> {
    let summary = format!("Failed to convert {}", field.name);
    let tokens = match &field.conversion {
        Conversion::Bool => quote! {
            if let Some(value) = self.#name.value() {
                target.#name = *value;
            }
        },
        Conversion::Integer(kind) => {
            let int = int_ident(*kind);
            fallible(name, &summary, quote! { #int::try_from(*value) })
        }
        Conversion::Text | Conversion::StringList => quote! {
            if let Some(value) = self.#name.value() {
                target.#name = value.clone();
            }
        },
        Conversion::Duration => fallible(
            name,
            &summary,
            quote! { attrgen::text::parse_duration(value) },
        ),
        Conversion::Timestamp => fallible(
            name,
            &summary,
            quote! { attrgen::text::parse_timestamp(value) },
        ),
        Conversion::Bytes => quote! {
            if let Some(value) = self.#name.value() {
                target.#name = value.as_bytes().to_vec();
            }
        },
        Conversion::StringMap => quote! {
            if let Some(value) = self.#name.value() {
                target.#name = value.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            }
        },
        Conversion::Nested { optional: false } => quote! {
            if let Some(nested) = &self.#name {
                diags.extend(nested.decode_into(&mut target.#name));
            }
        },
        Conversion::Nested { optional: true } => quote! {
            if let Some(nested) = &self.#name {
                let mut value = target.#name.take().unwrap_or_default();
                diags.extend(nested.decode_into(&mut value));
                target.#name = Some(value);
            }
        },
        Conversion::NestedList { optional_items } => {
            let push = if *optional_items {
                quote! { target.#name.push(Some(item)); }
            } else {
                quote! { target.#name.push(item); }
            };
            quote! {
                if let Some(items) = &self.#name {
                    target.#name.clear();
                    for nested in items {
                        let mut item = Default::default();
                        diags.extend(nested.decode_into(&mut item));
                        #push
                    }
                }
            }
        }
    };
    Ok(tokens)
}

/// A conversion that may fail: on error, record a diagnostic and stop decoding.
fn fallible(name: &Ident, summary: &str, convert: TokenStream) -> TokenStream {
    quote! {
        if let Some(value) = self.#name.value() {
            match #convert {
                Ok(value) => target.#name = value,
                Err(err) => {
                    diags.push(attrgen::Diagnostic::error(#summary, err.to_string()));
                    return diags;
                }
            }
        }
    }
}

fn int_ident(kind: IntKind) -> Ident {
    // IntKind displays as the primitive's name.
    format_ident!("{}", kind.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::map_fields;
    use crate::registry::KnownTypes;
    use crate::test_utils::{compact, format_tokens, make_provider_unit, make_struct, make_unit};
    use attrgen_define::{Field, GenerationUnit, Kind, TypeDescriptor};
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn model_for(unit: &GenerationUnit, ty: &TypeDescriptor) -> TokenStream {
        let known = KnownTypes::build(std::slice::from_ref(unit)).unwrap();
        let fields = map_fields(&unit.name, ty, &known).unwrap();
        generate_model(ty, &fields).unwrap()
    }

    fn config_unit() -> GenerationUnit {
        let auth = make_struct("Auth");
        let mut config = TypeDescriptor::structure("Config", "native::Config")
            .field::<String>("address", "address")
            .field::<Duration>("wait_time", "wait_time")
            .field::<u16>("port", "port")
            .field::<Vec<u8>>("ca_pem", "ca_pem")
            .field::<BTreeMap<String, String>>("headers", "headers")
            .untagged::<u64>("wait_index")
            .untagged::<Option<String>>("ignored");
        config.fields.push(Field::new(
            "auth",
            TypeDescriptor::scalar("Option<Auth>", Kind::Optional(Box::new(auth.clone()))),
            "http_auth",
        ));
        config.fields.push(Field::new(
            "links",
            TypeDescriptor::scalar("Vec<Auth>", Kind::Sequence(Box::new(auth.clone()))),
            "links",
        ));
        make_unit("config", config, vec![auth])
    }

    #[test]
    fn provider_holder_has_three_string_fields_with_tags() {
        let unit = make_provider_unit();
        let code = format_tokens(&model_for(&unit, &unit.object));

        assert!(code.contains("pub struct ProviderConfig {"));
        for tag in ["host", "username", "password"] {
            assert!(code.contains(&format!("#[serde(rename = \"{tag}\")]")), "{code}");
            assert!(code.contains(&format!("pub {tag}: attrgen::types::String")), "{code}");
        }
    }

    #[test]
    fn provider_decode_never_needs_mutable_diagnostics() {
        let unit = make_provider_unit();
        let code = compact(&model_for(&unit, &unit.object));

        assert!(code.contains("letdiags=attrgen::Diagnostics::new();"));
        assert!(!code.contains("letmutdiags"));
    }

    #[test]
    fn untagged_fields_are_not_held() {
        let unit = config_unit();
        let code = compact(&model_for(&unit, &unit.object));

        assert!(!code.contains("wait_index"));
        assert!(!code.contains("ignored"));
    }

    #[test]
    fn fallible_fields_return_early() {
        let unit = config_unit();
        let code = compact(&model_for(&unit, &unit.object));

        assert!(code.contains("letmutdiags"));
        assert!(code.contains("matchattrgen::text::parse_duration(value)"));
        assert!(code.contains("matchu16::try_from(*value)"));
        assert!(code.contains("\"Failedtoconvertwait_time\""));
        assert_eq!(code.matches("returndiags;").count(), 2);
    }

    #[test]
    fn setters_render_opaque_leaves_as_text() {
        let unit = config_unit();
        let code = compact(&model_for(&unit, &unit.object));

        assert!(code.contains("attrgen::text::format_duration(value.wait_time)"));
        assert!(code.contains("String::from_utf8_lossy(&value.ca_pem)"));
        assert!(code.contains("i128::from(value.port)"));
    }

    #[test]
    fn nested_fields_delegate_to_nested_holder() {
        let unit = config_unit();
        let code = compact(&model_for(&unit, &unit.object));

        assert!(code.contains("#[serde(rename=\"http_auth\")]pubauth:Option<Auth>"));
        assert!(code.contains("Auth::new(value.auth.as_ref())"));
        assert!(code.contains("target.auth.take().unwrap_or_default()"));
        assert!(code.contains("publinks:Option<Vec<Auth>>"));
        assert!(code.contains("filter_map(|item|Auth::new(Some(item)))"));
        assert!(code.contains("target.links.push(item);"));
    }

    #[test]
    fn pointer_sized_integers_widen_with_a_cast() {
        let ty = TypeDescriptor::structure("Limits", "native::Limits")
            .field::<usize>("max", "max");
        let unit = make_unit("limits", ty, vec![]);
        let code = compact(&model_for(&unit, &unit.object));

        assert!(code.contains("value.maxasi128"));
        assert!(code.contains("usize::try_from(*value)"));
    }

    #[test]
    fn generated_model_parses() {
        let unit = config_unit();
        for ty in unit.types() {
            let tokens = model_for(&unit, ty);
            assert!(syn::parse2::<syn::File>(tokens).is_ok(), "{}", ty.name);
        }
    }

    #[test]
    fn keyword_field_names_are_rejected() {
        let ty = TypeDescriptor::structure("Bad", "native::Bad").field::<String>("type", "type");
        let fields = map_fields("bad", &ty, &KnownTypes::default()).unwrap();

        assert!(matches!(
            generate_model(&ty, &fields),
            Err(GeneratorError::InvalidIdentifier { .. })
        ));
    }
}
