//! Command implementations for the three-phase workflow:
//! baseline (`init`), drift report (`changes`), commit (`update`).

pub mod changes;
pub mod init;
pub mod update;

use crate::snapshot::SelectionConfig;
use crate::{hasher, ignore, selector};
use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::Path;

/// Prints a green success line.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints a red error line to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints a blue informational line.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// One full scan under `config`: selection, file digests, folder digests.
pub(crate) struct Scan {
    pub files: Vec<String>,
    pub file_hashes: BTreeMap<String, String>,
    pub folder_hashes: BTreeMap<String, String>,
}

/// Selects and hashes the tree under `root`, reading the ignore file fresh.
pub(crate) fn scan_tree(root: &Path, config: &SelectionConfig) -> Result<Scan> {
    let ignore_patterns = ignore::load_ignore_patterns(root)?;
    let files = selector::select_files(root, config, &ignore_patterns)?;

    let mut file_hashes = BTreeMap::new();
    for rel_path in &files {
        file_hashes.insert(rel_path.clone(), hasher::file_digest(&root.join(rel_path)));
    }

    let mut folder_hashes = BTreeMap::new();
    for folder in selector::folders_for(&files) {
        let digest = hasher::folder_digest(&folder, &file_hashes);
        folder_hashes.insert(folder, digest);
    }

    Ok(Scan {
        files,
        file_hashes,
        folder_hashes,
    })
}

/// Canonicalizes and validates the tracked root.
pub(crate) fn resolve_root(root: &Path) -> Result<std::path::PathBuf> {
    let resolved = root
        .canonicalize()
        .unwrap_or_else(|_| root.to_path_buf());
    if !resolved.is_dir() {
        anyhow::bail!("{} is not a directory", resolved.display());
    }
    Ok(resolved)
}
