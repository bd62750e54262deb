//! Error types for the attrgen generator.

use thiserror::Error;

/// Errors that can occur during code generation.
///
/// Every variant that concerns a single unit names it, so a failed run
/// points straight at the offending definition.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A tagged field's type has no attribute representation.
    #[error("{unit}: missing type for field '{field}' (declared as {declared})")]
    Mapping {
        unit: String,
        field: String,
        declared: String,
    },

    /// A type yielded no tagged fields, so it has no attributes to emit.
    #[error("{unit}: no attribute found for {type_name}")]
    EmptySchema { unit: String, type_name: String },

    /// Generated code failed the syntactic validity pass.
    #[error("Generated code for '{artifact}' is invalid: {source}")]
    Formatting {
        artifact: String,
        #[source]
        source: syn::Error,
    },

    /// A type name, or the schema function it generates, is declared twice.
    #[error("Type '{type_name}' is declared by both '{first}' and '{second}'")]
    DuplicateType {
        type_name: String,
        first: String,
        second: String,
    },

    /// A name or path cannot be spelled in generated Rust code.
    #[error("Invalid identifier '{ident}' in {context}")]
    InvalidIdentifier { ident: String, context: String },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl GeneratorError {
    /// The generation unit the error belongs to, when it belongs to one.
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::Mapping { unit, .. } | Self::EmptySchema { unit, .. } => Some(unit),
            _ => None,
        }
    }
}
