//! `changes`: read-only drift report against the stored baseline.

use super::{print_info, resolve_root, scan_tree};
use crate::changes as detector;
use crate::snapshot::{SnapshotStore, StoreLayout};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Reports drift since the last snapshot. The selection is reproduced from
/// the snapshot's own stored config, not from fresh flags.
///
/// # Errors
///
/// Returns an error if `root` is not a directory or no snapshot exists.
pub fn execute(root: &Path) -> Result<()> {
    let root = resolve_root(root)?;

    let store = SnapshotStore::new(&root, StoreLayout::default());
    let Some(snapshot) = store.load() else {
        anyhow::bail!("No cartography state found. Run 'init' first.");
    };

    let scan = scan_tree(&root, &snapshot.metadata.selection)?;
    let changes = detector::diff(&snapshot.file_hashes, &scan.file_hashes);

    if changes.is_empty() {
        print_info("No changes detected.");
        return Ok(());
    }

    if !changes.added.is_empty() {
        println!("\n{}", format!("{} added:", changes.added.len()).green().bold());
        for path in &changes.added {
            println!("  + {path}");
        }
    }

    if !changes.removed.is_empty() {
        println!("\n{}", format!("{} removed:", changes.removed.len()).red().bold());
        for path in &changes.removed {
            println!("  - {path}");
        }
    }

    if !changes.modified.is_empty() {
        println!(
            "\n{}",
            format!("{} modified:", changes.modified.len()).yellow().bold()
        );
        for path in &changes.modified {
            println!("  ~ {path}");
        }
    }

    println!(
        "\n{}",
        format!("{} folders affected:", changes.affected_folders.len()).bold()
    );
    for folder in &changes.affected_folders {
        println!("  {folder}/");
    }

    Ok(())
}
