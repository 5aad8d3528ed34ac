//! `init`: establish the baseline snapshot and scaffold codemap stubs.

use super::{print_info, print_success, resolve_root, scan_tree};
use crate::codemap;
use crate::selector;
use crate::snapshot::{
    SelectionConfig, Snapshot, SnapshotMetadata, SnapshotStore, StoreLayout, utc_timestamp,
};
use anyhow::Result;
use std::path::Path;

/// Runs the baseline scan and writes the first snapshot.
///
/// An empty include list defaults to `**/*` (track everything), since a
/// compiled empty pattern set matches nothing.
///
/// # Errors
///
/// Returns an error if `root` is not a directory or the snapshot cannot be
/// written.
pub fn execute(
    root: &Path,
    include: Vec<String>,
    exclude: Vec<String>,
    exceptions: Vec<String>,
) -> Result<()> {
    let root = resolve_root(root)?;

    let include = if include.is_empty() {
        vec!["**/*".to_string()]
    } else {
        include
    };
    let config = SelectionConfig {
        include_patterns: include,
        exclude_patterns: exclude,
        exceptions,
    };

    print_info(&format!("Scanning {}", root.display()));
    print_info(&format!("Include patterns: {:?}", config.include_patterns));
    print_info(&format!("Exclude patterns: {:?}", config.exclude_patterns));
    print_info(&format!("Exceptions: {:?}", config.exceptions));

    let scan = scan_tree(&root, &config)?;
    print_info(&format!("Selected {} files", scan.files.len()));

    let store = SnapshotStore::new(&root, StoreLayout::default());
    let snapshot = Snapshot {
        metadata: SnapshotMetadata {
            version: store.version().to_string(),
            last_run: utc_timestamp(),
            root: root.display().to_string(),
            selection: config,
        },
        file_hashes: scan.file_hashes,
        folder_hashes: scan.folder_hashes,
    };
    store.save(&snapshot)?;
    let state_path = store.state_path();
    let shown = state_path.strip_prefix(&root).unwrap_or(&state_path);
    print_success(&format!("Created {}", shown.display()));

    let folders = selector::folders_for(&scan.files);
    let mut created = 0usize;
    for folder in &folders {
        let (folder_path, folder_name) = if folder == "." {
            let name = root
                .file_name()
                .map_or_else(|| ".".to_string(), |n| n.to_string_lossy().into_owned());
            (root.clone(), name)
        } else {
            (root.join(folder), folder.clone())
        };
        if codemap::scaffold(&folder_path, &folder_name)? {
            created += 1;
        }
    }
    print_success(&format!("Created {created} empty codemap.md files"));

    Ok(())
}
