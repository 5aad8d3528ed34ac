//! Codemap stub scaffolding.
//!
//! `init` drops one placeholder `codemap.md` per discovered folder so that
//! architectural notes have a home next to the code they describe. Existing
//! stubs are never overwritten.

use anyhow::{Context, Result};
use std::path::Path;

/// Writes an empty codemap stub into `folder_path` if none exists.
///
/// Returns `true` when a new stub was created.
///
/// # Errors
///
/// Returns an error if the stub cannot be written.
pub fn scaffold(folder_path: &Path, folder_name: &str) -> Result<bool> {
    let codemap_path = folder_path.join(crate::CODEMAP_FILE);
    if codemap_path.exists() {
        return Ok(false);
    }

    let content = format!(
        "# {folder_name}/\n\
         \n\
         <!-- Explorer: Fill in this section with architectural understanding -->\n\
         \n\
         ## Responsibility\n\
         \n\
         <!-- What is this folder's job in the system? -->\n\
         \n\
         ## Design\n\
         \n\
         <!-- Key patterns, abstractions, architectural decisions -->\n\
         \n\
         ## Flow\n\
         \n\
         <!-- How does data/control flow through this module? -->\n\
         \n\
         ## Integration\n\
         \n\
         <!-- How does it connect to other parts of the system? -->\n"
    );

    std::fs::write(&codemap_path, content)
        .with_context(|| format!("Failed to write codemap stub: {}", codemap_path.display()))?;

    Ok(true)
}
