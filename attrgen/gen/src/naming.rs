//! Identifier casing and validation.
//!
//! Generated item names are derived from type names:
//!
//! - [`camel_case`] lowers the leading capital (or leading acronym), so
//!   `HttpBasicAuth` becomes `httpBasicAuth` and `ACLToken` becomes `aclToken`
//! - [`snake_case`] turns that into a Rust item name
//! - [`attributes_fn_name`] appends the `_attributes` suffix used by schema
//!   functions
//!
//! Every name that ends up in generated code goes through [`ident`] first, so
//! a bad name is reported as [`GeneratorError::InvalidIdentifier`] instead of
//! producing unparseable output.

use proc_macro2::Ident;

use crate::errors::GeneratorError;

/// Lowers the initial capital of a type name.
///
/// A run of leading capitals is treated as an acronym: all but its last
/// letter are lowered, since the last one starts the next word. Names that
/// do not start with an ASCII capital are returned unchanged.
///
/// ## Examples
///
/// ```
/// use attrgen_gen::naming::camel_case;
///
/// assert_eq!(camel_case("CamelCaseTest"), "camelCaseTest");
/// assert_eq!(camel_case("ACLCamelCaseTest"), "aclCamelCaseTest");
/// assert_eq!(camel_case("aclCamelCaseTest"), "aclCamelCaseTest");
/// ```
pub fn camel_case(name: &str) -> String {
    let run = name.chars().take_while(char::is_ascii_uppercase).count();
    match run {
        0 => name.to_string(),
        1 => {
            let mut out = name[..1].to_ascii_lowercase();
            out.push_str(&name[1..]);
            out
        }
        // Uppercase letters are ASCII, so `run - 1` is a char boundary.
        _ => {
            let mut out = name[..run - 1].to_ascii_lowercase();
            out.push_str(&name[run - 1..]);
            out
        }
    }
}

/// Converts a camel-cased name to snake case.
///
/// ```
/// use attrgen_gen::naming::snake_case;
///
/// assert_eq!(snake_case("httpBasicAuth"), "http_basic_auth");
/// assert_eq!(snake_case("tls"), "tls");
/// ```
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Name of the schema function generated for a type.
pub fn attributes_fn_name(type_name: &str) -> String {
    format!("{}_attributes", snake_case(&camel_case(type_name)))
}

/// Parses `name` as a Rust identifier.
///
/// Keywords are rejected along with anything that is not identifier-shaped.
///
/// ## Errors
///
/// Returns [`GeneratorError::InvalidIdentifier`] naming `context`.
pub fn ident(name: &str, context: &str) -> Result<Ident, GeneratorError> {
    syn::parse_str::<Ident>(name).map_err(|_| GeneratorError::InvalidIdentifier {
        ident: name.to_string(),
        context: context.to_string(),
    })
}

/// Parses `path` as a Rust type, e.g. `consul::Config`.
pub fn type_path(path: &str, context: &str) -> Result<syn::Type, GeneratorError> {
    syn::parse_str::<syn::Type>(path).map_err(|_| GeneratorError::InvalidIdentifier {
        ident: path.to_string(),
        context: context.to_string(),
    })
}

/// Parses `path` as a module path suitable for a `use` item.
pub fn use_path(path: &str, context: &str) -> Result<syn::Path, GeneratorError> {
    syn::parse_str::<syn::Path>(path).map_err(|_| GeneratorError::InvalidIdentifier {
        ident: path.to_string(),
        context: context.to_string(),
    })
}
