//! `update`: recompute digests and commit them as the new baseline.

use super::{print_success, resolve_root, scan_tree};
use crate::snapshot::{SnapshotStore, StoreLayout, utc_timestamp};
use anyhow::Result;
use std::path::Path;

/// Recomputes the selection and digests under the *stored* config and
/// replaces the snapshot's maps wholesale. Never applies a diff as a patch.
///
/// # Errors
///
/// Returns an error if `root` is not a directory, no snapshot exists, or
/// the snapshot cannot be written.
pub fn execute(root: &Path) -> Result<()> {
    let root = resolve_root(root)?;

    let store = SnapshotStore::new(&root, StoreLayout::default());
    let Some(mut snapshot) = store.load() else {
        anyhow::bail!("No cartography state found. Run 'init' first.");
    };

    let scan = scan_tree(&root, &snapshot.metadata.selection)?;

    snapshot.metadata.last_run = utc_timestamp();
    snapshot.file_hashes = scan.file_hashes;
    snapshot.folder_hashes = scan.folder_hashes;
    store.save(&snapshot)?;

    let state_path = store.state_path();
    let shown = state_path.strip_prefix(&root).unwrap_or(&state_path);
    print_success(&format!(
        "Updated {} with {} files",
        shown.display(),
        snapshot.file_hashes.len()
    ));

    Ok(())
}
