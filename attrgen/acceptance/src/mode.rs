//! Replay or record, chosen by an environment variable.

use crate::errors::HarnessError;

/// Environment variable that switches the harness into record mode.
pub const RECORD_ENV: &str = "TF_TEST_RECORD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Check live state against the saved snapshots.
    #[default]
    Replay,
    /// Apply every fixture and rewrite its snapshot.
    Record,
}

impl RunMode {
    /// Reads [`RECORD_ENV`]; unset or empty means [`RunMode::Replay`].
    pub fn from_env() -> Result<Self, HarnessError> {
        match std::env::var(RECORD_ENV) {
            Ok(value) => Self::parse(&value),
            Err(std::env::VarError::NotPresent) => Ok(Self::Replay),
            Err(std::env::VarError::NotUnicode(value)) => Err(HarnessError::InvalidFlag {
                variable: RECORD_ENV,
                value: value.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Parses a flag value: empty is replay, otherwise a boolean spelled
    /// lowercase, uppercase or capitalized.
    pub fn parse(value: &str) -> Result<Self, HarnessError> {
        if value.is_empty() {
            return Ok(Self::Replay);
        }
        match value {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(Self::Record),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(Self::Replay),
            _ => Err(HarnessError::InvalidFlag {
                variable: RECORD_ENV,
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_replay() {
        assert_eq!(RunMode::parse("").unwrap(), RunMode::Replay);
    }

    #[test]
    fn booleans_in_common_spellings() {
        for value in ["1", "t", "T", "true", "TRUE", "True"] {
            assert_eq!(RunMode::parse(value).unwrap(), RunMode::Record, "{value}");
        }
        for value in ["0", "f", "F", "false", "FALSE", "False"] {
            assert_eq!(RunMode::parse(value).unwrap(), RunMode::Replay, "{value}");
        }
    }

    #[test]
    fn anything_else_is_rejected() {
        for value in ["yes", "2", " true", "tRuE", "fALSE"] {
            assert!(matches!(
                RunMode::parse(value),
                Err(HarnessError::InvalidFlag { .. })
            ));
        }
    }
}
