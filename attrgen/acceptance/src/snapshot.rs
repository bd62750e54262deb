//! Observed resource state and its persisted snapshot.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::HarnessError;

/// Snapshot value meaning "the attribute is set to some non-empty value".
pub const PRESENT_ONLY: &str = "set()";

/// Attribute holding the element count of a flattened map; never recorded.
pub const COUNT_ATTRIBUTE: &str = "%";

type Attributes = BTreeMap<String, String>;

/// Flattened attributes of every resource, as reported by a driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    resources: BTreeMap<String, Attributes>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource<K, V>(
        mut self,
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.resources.insert(name.into(), attributes);
        self
    }

    pub fn attribute(&self, resource: &str, attribute: &str) -> Option<&str> {
        self.resources.get(resource)?.get(attribute).map(String::as_str)
    }

    pub fn resources(&self) -> impl Iterator<Item = (&str, &Attributes)> {
        self.resources.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Resource name to attribute name to expected value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(BTreeMap<String, Attributes>);

impl Snapshot {
    /// Reads a snapshot; a missing file is an empty snapshot.
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(snapshot = %path.display(), "no snapshot yet");
                return Ok(Self::default());
            }
            Err(e) => return Err(HarnessError::io(path, e)),
        };
        serde_json::from_str(&content).map_err(|source| HarnessError::Snapshot {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the snapshot as JSON indented with four spaces.
    pub fn save(&self, path: &Path) -> Result<(), HarnessError> {
        let mut content = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
        self.serialize(&mut serializer)
            .map_err(|source| HarnessError::Snapshot {
                path: path.to_path_buf(),
                source,
            })?;

        fs::write(path, content).map_err(|e| HarnessError::io(path, e))?;
        debug!(snapshot = %path.display(), resources = self.0.len(), "saved snapshot");
        Ok(())
    }

    /// Records every attribute of `state` as-is.
    pub fn from_state(state: &State) -> Self {
        Self::observe(state, |_, _, value| value.to_string())
    }

    /// Records `state`, replacing values that disagree with `old` by
    /// [`PRESENT_ONLY`].
    pub fn diff(old: &Snapshot, state: &State) -> Self {
        Self::observe(state, |resource, attribute, value| {
            if old.get(resource, attribute) == Some(value) {
                value.to_string()
            } else {
                PRESENT_ONLY.to_string()
            }
        })
    }

    fn observe(state: &State, record: impl Fn(&str, &str, &str) -> String) -> Self {
        let resources = state
            .resources()
            .map(|(name, attributes)| {
                let attributes = attributes
                    .iter()
                    .filter(|(k, _)| k.as_str() != COUNT_ATTRIBUTE)
                    .map(|(k, v)| (k.clone(), record(name, k, v)))
                    .collect();
                (name.to_string(), attributes)
            })
            .collect();
        Self(resources)
    }

    pub fn get(&self, resource: &str, attribute: &str) -> Option<&str> {
        self.0.get(resource)?.get(attribute).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.0.iter().flat_map(|(resource, attributes)| {
            attributes
                .iter()
                .map(move |(k, v)| (resource.as_str(), k.as_str(), v.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state(id: &str) -> State {
        State::new().with_resource(
            "consul_acl_token.ci",
            [("%", "3"), ("id", id), ("description", "ci")],
        )
    }

    #[test]
    fn from_state_skips_count_attribute() {
        let snapshot = Snapshot::from_state(&state("a1"));

        assert_eq!(snapshot.get("consul_acl_token.ci", "id"), Some("a1"));
        assert_eq!(snapshot.get("consul_acl_token.ci", "%"), None);
        assert_eq!(snapshot.iter().count(), 2);
    }

    #[test]
    fn diff_marks_changed_values_present_only() {
        let old = Snapshot::from_state(&state("a1"));
        let snapshot = Snapshot::diff(&old, &state("b2"));

        assert_eq!(snapshot.get("consul_acl_token.ci", "id"), Some(PRESENT_ONLY));
        assert_eq!(snapshot.get("consul_acl_token.ci", "description"), Some("ci"));
    }

    #[test]
    fn diff_against_empty_snapshot_marks_everything() {
        let snapshot = Snapshot::diff(&Snapshot::default(), &state("a1"));
        assert!(snapshot.iter().all(|(_, _, v)| v == PRESENT_ONLY));
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let snapshot = Snapshot::load(&dir.path().join("absent.json")).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn saves_with_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.json");
        let snapshot = Snapshot::from_state(&state("a1"));

        snapshot.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n    \"consul_acl_token.ci\": {\n        \""));
        assert_eq!(Snapshot::load(&path).unwrap(), snapshot);
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.json");
        fs::write(&path, "[1, 2]").unwrap();

        assert!(matches!(
            Snapshot::load(&path),
            Err(HarnessError::Snapshot { .. })
        ));
    }
}
