//! Tree selection.
//!
//! Walks a root directory and resolves a [`SelectionConfig`] plus the live
//! ignore patterns into the sorted list of relative paths to track.
//!
//! Precedence per discovered file:
//!
//! 1. Hidden directories are pruned from traversal outright, before any
//!    pattern runs. This prevents descent; it is not a filter on discovered
//!    paths.
//! 2. An ignore-file match always excludes — exceptions do *not* override
//!    it. Exclude matches, by contrast, are overridable by exceptions. This
//!    asymmetry mirrors the tool's observed behavior and is kept as-is:
//!    ignore content is externally-owned policy, exceptions are local.
//! 3. A file is selected iff it matches an include pattern or is listed as
//!    a literal exception.

use crate::pattern::PatternSet;
use crate::snapshot::SelectionConfig;
use anyhow::Result;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::{Level, debug, span};
use walkdir::WalkDir;

/// Resolves the selection for `root`: sorted, deduplicated relative paths.
///
/// Paths are forward-slash separated and root-relative with no leading
/// `./`. Traversal errors on individual entries are skipped, not fatal.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` covers future traversal
/// policies that may need to fail.
pub fn select_files(
    root: &Path,
    config: &SelectionConfig,
    ignore_patterns: &[String],
) -> Result<Vec<String>> {
    let span = span!(Level::DEBUG, "select_files", root = %root.display());
    let _guard = span.enter();

    let include = PatternSet::compile(&config.include_patterns);
    let exclude = PatternSet::compile(&config.exclude_patterns);
    let ignore = PatternSet::compile(ignore_patterns);
    let exceptions: HashSet<&str> = config.exceptions.iter().map(String::as_str).collect();

    let mut selected = BTreeSet::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden_dir(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(rel_path) = relative_path(entry.path(), root) else {
            continue;
        };

        // Ignore-file matches are absolute; exceptions cannot bypass them.
        if ignore.matches(&rel_path) {
            continue;
        }

        if exclude.matches(&rel_path) && !exceptions.contains(rel_path.as_str()) {
            continue;
        }

        if include.matches(&rel_path) || exceptions.contains(rel_path.as_str()) {
            selected.insert(rel_path);
        }
    }

    debug!(count = selected.len(), "selection resolved");
    Ok(selected.into_iter().collect())
}

/// Collects every folder containing a selected file: each ancestor prefix of
/// each path, plus the root `"."`, which is recorded even when only
/// descendants hold files.
#[must_use]
pub fn folders_for(files: &[String]) -> BTreeSet<String> {
    let mut folders = BTreeSet::new();
    for file in files {
        folders.extend(ancestor_folders(file));
    }
    folders.insert(".".to_string());
    folders
}

/// Ancestor directory prefixes of a relative path, shallowest first,
/// excluding the root.
#[must_use]
pub fn ancestor_folders(path: &str) -> Vec<String> {
    let mut folders = Vec::new();
    let parts: Vec<&str> = path.split('/').collect();
    for depth in 1..parts.len() {
        folders.push(parts[..depth].join("/"));
    }
    folders
}

fn is_hidden_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn relative_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
