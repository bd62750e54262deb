//! Error types for the acceptance harness.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while planning or running acceptance steps.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The record flag is set to something that is not a boolean.
    #[error("Invalid value '{value}' for {variable}: expected 1, 0, true, false, t or f")]
    InvalidFlag { variable: &'static str, value: String },

    #[error("No fixture found in {}", dir.display())]
    NoFixtures { dir: PathBuf },

    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot '{}': {source}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An `# Error:` annotation is not a valid regular expression.
    #[error("Invalid error pattern in '{}': {source}", path.display())]
    Pattern {
        path: PathBuf,
        #[source]
        source: regex::Error,
    },

    /// The driver failed where success was expected.
    #[error("Driver failed: {0}")]
    Driver(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A fixture annotated with an error applied cleanly.
    #[error("Expected an error matching '{pattern}', got none")]
    MissingError { pattern: String },

    /// A fixture failed, but not with the annotated error.
    #[error("Expected an error matching '{pattern}', got: {message}")]
    UnexpectedError { pattern: String, message: String },

    /// One or more snapshot checks did not hold.
    #[error("{} check(s) failed:\n{}", failures.len(), failures.join("\n"))]
    ChecksFailed { failures: Vec<String> },
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
