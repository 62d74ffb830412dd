//! Export of the persisted active-stories snapshot.
//!
//! A pure read of storage: what was last saved is what gets exported, not
//! whatever the running state machine currently holds.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;

use crate::storage::Storage;

/// Write the persisted active stories as formatted JSON into `dir`.
///
/// Returns the path of the written file. The name carries a timestamp so
/// repeated exports never clobber each other.
pub fn export_active_stories(storage: &Storage, dir: &Path) -> Result<PathBuf> {
    let snapshot = storage.load();
    let json = serde_json::to_string_pretty(&snapshot.stories)?;

    let path = dir.join(format!("stories-{}.json", Utc::now().format("%Y%m%d-%H%M%S")));
    fs::write(&path, json)?;
    Ok(path)
}
