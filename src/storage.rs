//! Snapshot persistence.
//!
//! The whole triage history lives in one JSON document:
//!
//! ```text
//! ~/.story-triage/snapshot.json
//! ```
//!
//! Only the two story lists are stored. Selection, view and the alert flag
//! are session-local and always start fresh.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::source::Story;

/// The persisted portion of the client state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    /// Stories not yet dismissed.
    pub stories: Vec<Story>,
    /// The dismissed archive, most recent first.
    pub dismissed_stories: Vec<Story>,
}

/// File-backed storage for the snapshot.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Storage writing to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default snapshot location: `~/.story-triage/snapshot.json`.
    ///
    /// Falls back to the working directory when no home is known.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".story-triage")
            .join("snapshot.json")
    }

    /// Load the snapshot.
    ///
    /// A missing or unreadable file and a document that fails to parse mean
    /// the same thing: no prior state. Corruption is never surfaced.
    pub fn load(&self) -> Snapshot {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return Snapshot::default();
        };
        serde_json::from_str(&json).unwrap_or_default()
    }

    /// Write the snapshot, creating the parent directory if needed.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn story(id: &str) -> Story {
        Story {
            id: id.to_string(),
            title: format!("Story {id}"),
            url: format!("https://example.com/{id}"),
            external_url: None,
            published: None,
        }
    }

    #[test]
    fn save_then_load_returns_the_same_snapshot() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("snapshot.json"));

        let snapshot = Snapshot {
            stories: vec![story("a"), story("b")],
            dismissed_stories: vec![story("c")],
        };
        storage.save(&snapshot).unwrap();

        assert_eq!(storage.load(), snapshot);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("nothing-here.json"));

        assert_eq!(storage.load(), Snapshot::default());
    }

    #[test]
    fn load_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, "{ not json at all").unwrap();

        let storage = Storage::new(path);
        assert_eq!(storage.load(), Snapshot::default());
    }

    #[test]
    fn save_creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("deep").join("snapshot.json"));

        storage.save(&Snapshot::default()).unwrap();
        assert_eq!(storage.load(), Snapshot::default());
    }

    #[test]
    fn document_uses_camel_case_field_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        let storage = Storage::new(&path);

        storage
            .save(&Snapshot {
                stories: vec![],
                dismissed_stories: vec![story("a")],
            })
            .unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"dismissedStories\""));
    }
}
