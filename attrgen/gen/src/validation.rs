//! Pre-generation validation of generation units.
//!
//! Catches problems that would otherwise surface as confusing output:
//!
//! - **No units**: there is nothing to generate
//! - **Unit names**: each becomes a module and a `<name>.rs` file, so it must
//!   be a valid identifier, must be unique, and must not be `lib`
//!
//! Type-level checks (duplicate type names, unmappable fields, empty types)
//! happen while building the registry and emitting code.
//!
//! ## Examples
//!
//! ```
//! use attrgen_gen::validation::validate_units;
//!
//! assert!(validate_units(&attrgen_definitions::units()).is_ok());
//! assert!(validate_units(&[]).is_err());
//! ```

use std::collections::BTreeSet;

use attrgen_define::GenerationUnit;

use crate::errors::GeneratorError;
use crate::naming::ident;

/// File stem taken by the aggregate registry.
const RESERVED_UNIT_NAME: &str = "lib";

/// Validates the unit list before code generation.
///
/// ## Errors
///
/// Returns `GeneratorError::ConfigError` for an empty list, a duplicate unit
/// name, or the reserved name `lib`; `GeneratorError::InvalidIdentifier` for
/// a unit name that is not a Rust identifier.
pub fn validate_units(units: &[GenerationUnit]) -> Result<(), GeneratorError> {
    if units.is_empty() {
        return Err(GeneratorError::ConfigError(
            "no generation units to process".to_string(),
        ));
    }

    let mut seen = BTreeSet::new();
    for unit in units {
        ident(&unit.name, "unit name")?;

        if unit.name == RESERVED_UNIT_NAME {
            return Err(GeneratorError::ConfigError(format!(
                "unit name '{RESERVED_UNIT_NAME}' is reserved for the aggregate registry"
            )));
        }

        if !seen.insert(unit.name.as_str()) {
            return Err(GeneratorError::ConfigError(format!(
                "duplicate unit name '{}'",
                unit.name
            )));
        }
    }

    Ok(())
}
