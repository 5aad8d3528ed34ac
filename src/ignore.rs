//! Ignore-file loading.
//!
//! Reads `.gitignore` at the repository root into a raw pattern list for the
//! pattern compiler. The file is read fresh on every invocation and never
//! cached in the snapshot, so edits take effect immediately.

use anyhow::{Context, Result};
use std::path::Path;

/// Name of the ignore file read from the repository root.
pub const IGNORE_FILE: &str = ".gitignore";

/// Loads ignore patterns from the root's `.gitignore`, if present.
///
/// Blank lines and `#` comments are skipped. A missing ignore file yields an
/// empty list, not an error.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_ignore_patterns(root: &Path) -> Result<Vec<String>> {
    let path = root.join(IGNORE_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read ignore file: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect())
}
