//! Snapshot data model and on-disk store.
//!
//! A [`Snapshot`] is the sole durable state: metadata (tool version, last-run
//! timestamp, root, and the selection config that produced it) plus the file
//! and folder digest maps. One snapshot exists per tracked root, stored as
//! pretty-printed JSON under the state directory. Field names match the
//! state files written by earlier versions of the tool bit-for-bit.
//!
//! Loading distinguishes "absent" from errors: a missing, corrupt, or
//! unreadable state file all degrade to `None` so callers only have to
//! handle first-run detection.

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// The include/exclude/exception lists that reproduce a selection.
///
/// Exceptions are literal relative paths compared for exact equality, not
/// patterns. List order is preserved through persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Glob patterns for files to track.
    pub include_patterns: Vec<String>,
    /// Glob patterns for files to drop.
    pub exclude_patterns: Vec<String>,
    /// Literal relative paths kept despite exclude matches.
    pub exceptions: Vec<String>,
}

/// Snapshot metadata: tool version, last run time, root, and selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Tool version that wrote the snapshot.
    pub version: String,
    /// ISO-8601 UTC timestamp of the run that wrote this snapshot.
    pub last_run: String,
    /// Absolute root path the snapshot was taken against.
    pub root: String,
    /// Selection config that produced the snapshot, flattened so the
    /// pattern lists serialize as top-level metadata keys.
    #[serde(flatten)]
    pub selection: SelectionConfig,
}

/// The persisted record of the last committed selection and its digests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version, timestamp, root, and selection config.
    pub metadata: SnapshotMetadata,
    /// Relative path to content digest, replaced wholesale on every run.
    pub file_hashes: BTreeMap<String, String>,
    /// Relative folder path (`"."` for the root) to aggregate digest.
    pub folder_hashes: BTreeMap<String, String>,
}

/// Process-wide store configuration, passed in explicitly rather than read
/// from globals.
#[derive(Debug, Clone)]
pub struct StoreLayout {
    /// State directory name under the tracked root.
    pub state_dir: String,
    /// State file name within the state directory.
    pub state_file: String,
    /// Tool version recorded in snapshot metadata.
    pub version: String,
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self {
            state_dir: crate::STATE_DIR.to_string(),
            state_file: crate::STATE_FILE.to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}

/// Loads and saves the snapshot for one tracked root.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
    layout: StoreLayout,
}

impl SnapshotStore {
    /// Creates a store for `root` with the given layout.
    #[must_use]
    pub fn new(root: &Path, layout: StoreLayout) -> Self {
        Self {
            root: root.to_path_buf(),
            layout,
        }
    }

    /// Path of the state file under the tracked root.
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.root.join(&self.layout.state_dir).join(&self.layout.state_file)
    }

    /// Tool version this store stamps into new snapshots.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.layout.version
    }

    /// Loads the snapshot, or `None` when absent.
    ///
    /// A corrupt or unreadable state file is treated the same as a missing
    /// one; the caller sees first-run state either way.
    #[must_use]
    pub fn load(&self) -> Option<Snapshot> {
        let path = self.state_path();
        if !path.exists() {
            return None;
        }

        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "state file unreadable, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&data) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "state file corrupt, treating as absent");
                None
            }
        }
    }

    /// Persists `snapshot`, creating the state directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the state directory cannot be created or the
    /// state file cannot be written.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let state_dir = self.root.join(&self.layout.state_dir);
        std::fs::create_dir_all(&state_dir).with_context(|| {
            format!("Failed to create state directory: {}", state_dir.display())
        })?;

        let path = self.state_path();
        let json = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write state file: {}", path.display()))?;

        Ok(())
    }
}

/// Current time as an ISO-8601 UTC timestamp with a `Z` suffix.
#[must_use]
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_snapshot(root: &Path) -> Snapshot {
        Snapshot {
            metadata: SnapshotMetadata {
                version: "1.0.0".to_string(),
                last_run: utc_timestamp(),
                root: root.display().to_string(),
                selection: SelectionConfig {
                    include_patterns: vec!["src/**/*.ts".to_string(), "package.json".to_string()],
                    exclude_patterns: vec!["**/*.test.ts".to_string()],
                    exceptions: vec!["src/keep.test.ts".to_string()],
                },
            },
            file_hashes: [("src/a.ts".to_string(), "abc123".to_string())].into(),
            folder_hashes: [(".".to_string(), "def456".to_string())].into(),
        }
    }

    #[test]
    fn test_load_absent() -> Result<()> {
        let dir = tempdir()?;
        let store = SnapshotStore::new(dir.path(), StoreLayout::default());
        assert!(store.load().is_none());
        Ok(())
    }

    #[test]
    fn test_save_load_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let store = SnapshotStore::new(dir.path(), StoreLayout::default());
        let snapshot = sample_snapshot(dir.path());

        store.save(&snapshot)?;
        let loaded = store.load().expect("snapshot should exist");
        assert_eq!(loaded, snapshot);
        Ok(())
    }

    #[test]
    fn test_corrupt_state_degrades_to_absent() -> Result<()> {
        let dir = tempdir()?;
        let store = SnapshotStore::new(dir.path(), StoreLayout::default());
        std::fs::create_dir_all(store.state_path().parent().unwrap())?;
        std::fs::write(store.state_path(), "{not valid json")?;

        assert!(store.load().is_none());
        Ok(())
    }

    #[test]
    fn test_metadata_fields_are_flat() -> Result<()> {
        // Selection lists serialize as flat metadata keys for compatibility
        // with existing state files.
        let dir = tempdir()?;
        let snapshot = sample_snapshot(dir.path());
        let json = serde_json::to_value(&snapshot)?;

        assert!(json["metadata"]["include_patterns"].is_array());
        assert!(json["metadata"]["exclude_patterns"].is_array());
        assert!(json["metadata"]["exceptions"].is_array());
        assert!(json["file_hashes"].is_object());
        assert!(json["folder_hashes"].is_object());
        Ok(())
    }

    #[test]
    fn test_timestamp_is_utc_with_z_suffix() {
        let ts = utc_timestamp();
        assert!(ts.ends_with('Z'));
        assert!(ts.contains('T'));
    }
}
