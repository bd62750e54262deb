//! Output assembly and file writing for generated code.
//!
//! This module drives a whole run: it validates the units, builds the
//! known-type registry once, generates every unit's module, assembles the
//! aggregate registry, validates and formats everything, and only then
//! writes files.
//!
//! ## Output Structure
//!
//! ```text
//! schema/src/
//! ├── lib.rs            # Module declarations and `schemas()`
//! ├── provider.rs       # One module per generation unit
//! ├── consul_config.rs
//! └── acl_token.rs
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is validated with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **All or nothing**: A failure in any unit aborts the run before the
//!   first file is written
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes

use std::fs;
use std::path::Path;

use attrgen_define::GenerationUnit;
use proc_macro2::TokenStream;
use quote::quote;
use tracing::{debug, info, warn};

use crate::codegen::generate_unit_module;
use crate::errors::GeneratorError;
use crate::naming::{attributes_fn_name, ident};
use crate::registry::KnownTypes;
use crate::validation::validate_units;

/// Notice prepended to every generated file.
pub const GENERATED_HEADER: &str =
    "// This code was automatically generated by attrgen-gen. Do not edit manually.";

/// One generated file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the output directory.
    pub file_name: String,
    pub content: String,
}

/// Assembles the lib.rs content for the generated crate.
///
/// Declares one module per unit, in caller order, and a `schemas()`
/// function mapping every unit name to the schema built from its primary
/// type.
pub fn assemble_lib_rs(units: &[GenerationUnit]) -> Result<TokenStream, GeneratorError> {
    let mut modules = Vec::with_capacity(units.len());
    let mut entries = Vec::with_capacity(units.len());

    for unit in units {
        let module = ident(&unit.name, "unit name")?;
        let schema_fn = ident(
            &attributes_fn_name(&unit.object.name),
            &format!("schema function of unit '{}'", unit.name),
        )?;
        let name = &unit.name;

        modules.push(quote! { pub mod #module; });
        entries.push(quote! { (#name, attrgen::Schema::new(#module::#schema_fn())) });
    }

    Ok(quote! {
        //! Attribute schemas and holders generated by attrgen-gen.
        //!
        //! Each generation unit is a module holding its schema functions and
        //! holder types; [`schemas`] collects every unit's schema by name.

        #(#modules)*

        /// Every unit's schema, keyed by unit name.
        pub fn schemas() -> std::collections::BTreeMap<&'static str, attrgen::Schema> {
            std::collections::BTreeMap::from([
                #(#entries),*
            ])
        }
    })
}

/// Validates generated code using syn.
///
/// Parses the token stream as a complete Rust file to ensure it's syntactically
/// valid before writing to disk.
///
/// ## Errors
///
/// Returns `GeneratorError::Formatting` naming `artifact` if the code fails
/// to parse.
pub fn validate_code(tokens: &TokenStream, artifact: &str) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone()).map_err(|source| GeneratorError::Formatting {
        artifact: artifact.to_string(),
        source,
    })
}

/// Formats generated code using prettyplease, prepending [`GENERATED_HEADER`].
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!("{GENERATED_HEADER}\n\n{formatted}")
}

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created as needed. Readers see either the old or
/// the new content, never a partial file.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("rs.tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "wrote artifact");
    Ok(())
}

/// Generates every artifact in memory.
///
/// Returns one artifact per unit, in caller order, followed by `lib.rs`.
/// Nothing is returned unless every unit succeeds.
///
/// ## Errors
///
/// Returns the first validation, registry, mapping, emission or formatting
/// error encountered.
pub fn generate(units: &[GenerationUnit]) -> Result<Vec<Artifact>, GeneratorError> {
    validate_units(units)?;
    let known = KnownTypes::build(units)?;
    info!(
        units = units.len(),
        known_types = known.len(),
        "starting generation"
    );

    let mut artifacts = Vec::with_capacity(units.len() + 1);
    for unit in units {
        info!(unit = %unit.name, types = unit.depends_on.len() + 1, "generating unit");
        let file_name = format!("{}.rs", unit.name);
        let tokens = generate_unit_module(unit, &known)?;
        let file = validate_code(&tokens, &file_name)?;
        artifacts.push(Artifact {
            file_name,
            content: format_code(&file),
        });
    }

    let lib_tokens = assemble_lib_rs(units)?;
    let lib_file = validate_code(&lib_tokens, "lib.rs")?;
    artifacts.push(Artifact {
        file_name: "lib.rs".to_string(),
        content: format_code(&lib_file),
    });

    Ok(artifacts)
}

/// Generates all artifacts and writes them to `output_dir`.
///
/// This is the main entry point for code generation. With `dry_run` the
/// artifacts are printed to stdout instead of written.
///
/// ## Returns
///
/// The generated artifacts (useful for dry-run mode or testing).
///
/// ## Errors
///
/// Returns an error if:
/// - Any unit fails to generate (no file is written in that case)
/// - File writing fails
pub fn generate_and_write(
    units: &[GenerationUnit],
    output_dir: &Path,
    dry_run: bool,
) -> Result<Vec<Artifact>, GeneratorError> {
    let artifacts = generate(units)?;

    if dry_run {
        warn!("dry run: no files will be written");
        for artifact in &artifacts {
            println!("=== {} ===\n{}\n", artifact.file_name, artifact.content);
        }
    } else {
        for artifact in &artifacts {
            write_atomic(&output_dir.join(&artifact.file_name), &artifact.content)?;
        }
        info!(
            files = artifacts.len(),
            dir = %output_dir.display(),
            "generation complete"
        );
    }

    Ok(artifacts)
}
