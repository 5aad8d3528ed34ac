//! Change detection between two digest snapshots.

use crate::selector::ancestor_folders;
use std::collections::{BTreeMap, BTreeSet};

/// The computed difference between two file-digest maps. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Paths present only in the current map.
    pub added: BTreeSet<String>,
    /// Paths present only in the saved map.
    pub removed: BTreeSet<String>,
    /// Paths present in both with differing digests.
    pub modified: BTreeSet<String>,
    /// Ancestor folders of every changed path, plus the root `"."`.
    pub affected_folders: BTreeSet<String>,
}

impl ChangeSet {
    /// True when nothing was added, removed, or modified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}

/// Diffs `saved` against `current`.
///
/// Pure function: neither map is touched and no state is read. Two files
/// recorded with the unreadable sentinel compare equal, so they count as
/// unchanged until one becomes readable.
#[must_use]
pub fn diff(
    saved: &BTreeMap<String, String>,
    current: &BTreeMap<String, String>,
) -> ChangeSet {
    let mut changes = ChangeSet::default();

    for (path, digest) in current {
        match saved.get(path) {
            None => {
                changes.added.insert(path.clone());
            }
            Some(old) if old != digest => {
                changes.modified.insert(path.clone());
            }
            Some(_) => {}
        }
    }

    for path in saved.keys() {
        if !current.contains_key(path) {
            changes.removed.insert(path.clone());
        }
    }

    if !changes.is_empty() {
        let mut affected = BTreeSet::new();
        for path in changes
            .added
            .iter()
            .chain(&changes.removed)
            .chain(&changes.modified)
        {
            affected.extend(ancestor_folders(path));
        }
        affected.insert(".".to_string());
        changes.affected_folders = affected;
    }

    changes
}
