//! Assertions derived from a snapshot.

use std::fmt;

use crate::errors::HarnessError;
use crate::snapshot::{PRESENT_ONLY, Snapshot, State};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// The attribute is set to a non-empty value.
    Present { resource: String, attribute: String },
    /// The attribute holds exactly `value`.
    Equals {
        resource: String,
        attribute: String,
        value: String,
    },
}

impl Check {
    /// Checks the attribute against `state`, describing the mismatch on
    /// failure.
    pub fn verify(&self, state: &State) -> Result<(), String> {
        match self {
            Self::Present {
                resource,
                attribute,
            } => match state.attribute(resource, attribute) {
                Some(value) if !value.is_empty() => Ok(()),
                _ => Err(format!("{resource}.{attribute}: expected to be set")),
            },
            Self::Equals {
                resource,
                attribute,
                value,
            } => match state.attribute(resource, attribute) {
                Some(actual) if actual == value => Ok(()),
                Some(actual) => Err(format!(
                    "{resource}.{attribute}: expected '{value}', got '{actual}'"
                )),
                None => Err(format!(
                    "{resource}.{attribute}: expected '{value}', not set"
                )),
            },
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present {
                resource,
                attribute,
            } => write!(f, "{resource}.{attribute} is set"),
            Self::Equals {
                resource,
                attribute,
                value,
            } => write!(f, "{resource}.{attribute} == '{value}'"),
        }
    }
}

/// One check per snapshot attribute.
pub fn checks(snapshot: &Snapshot) -> Vec<Check> {
    snapshot
        .iter()
        .map(|(resource, attribute, value)| {
            let (resource, attribute) = (resource.to_string(), attribute.to_string());
            if value == PRESENT_ONLY {
                Check::Present {
                    resource,
                    attribute,
                }
            } else {
                Check::Equals {
                    resource,
                    attribute,
                    value: value.to_string(),
                }
            }
        })
        .collect()
}

/// Runs every check, reporting all failures together.
pub fn verify_all(checks: &[Check], state: &State) -> Result<(), HarnessError> {
    let failures: Vec<String> = checks
        .iter()
        .filter_map(|check| check.verify(state).err())
        .collect();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::ChecksFailed { failures })
    }
}
