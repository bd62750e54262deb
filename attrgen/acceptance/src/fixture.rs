//! Fixture discovery.
//!
//! A fixture is a `*.tf` configuration file. Its snapshot lives next to it
//! with a `.json` extension. A fixture expected to fail carries an
//! annotation line:
//!
//! ```text
//! # Error: address must not be empty
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::errors::HarnessError;

const FIXTURE_EXTENSION: &str = "tf";
const SNAPSHOT_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct Fixture {
    pub config_path: PathBuf,
    pub snapshot_path: PathBuf,
    pub config: String,
    /// Pattern the apply error must match, from the `# Error:` annotation.
    pub expect_error: Option<Regex>,
}

/// Loads every fixture in `dir`, sorted by file name.
///
/// ## Errors
///
/// Fails when the directory cannot be read, holds no fixture, or a fixture
/// carries an invalid error pattern.
pub fn discover_fixtures(dir: &Path) -> Result<Vec<Fixture>, HarnessError> {
    let entries = fs::read_dir(dir).map_err(|e| HarnessError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| HarnessError::io(dir, e))?.path();
        if path.extension().is_some_and(|ext| ext == FIXTURE_EXTENSION) {
            paths.push(path);
        }
    }
    if paths.is_empty() {
        return Err(HarnessError::NoFixtures {
            dir: dir.to_path_buf(),
        });
    }
    paths.sort();

    paths.into_iter().map(load_fixture).collect()
}

fn load_fixture(config_path: PathBuf) -> Result<Fixture, HarnessError> {
    let config = fs::read_to_string(&config_path).map_err(|e| HarnessError::io(&config_path, e))?;
    let expect_error = match annotation("Error", &config) {
        Some(pattern) => Some(Regex::new(&pattern).map_err(|source| HarnessError::Pattern {
            path: config_path.clone(),
            source,
        })?),
        None => None,
    };
    debug!(
        fixture = %config_path.display(),
        expects_error = expect_error.is_some(),
        "loaded fixture"
    );

    Ok(Fixture {
        snapshot_path: config_path.with_extension(SNAPSHOT_EXTENSION),
        config_path,
        config,
        expect_error,
    })
}

/// Value of the first `# <name>: <value>` line, trimmed. Empty values count
/// as absent.
pub fn annotation(name: &str, config: &str) -> Option<String> {
    let prefix = format!("{name}:");
    config.lines().find_map(|line| {
        let comment = line.trim().strip_prefix('#')?;
        let value = comment.trim_start().strip_prefix(prefix.as_str())?.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}
