//! Content and folder digests.
//!
//! Files are hashed with streaming xxHash3-128 in fixed-size chunks. A file
//! that cannot be read hashes to the [`UNREADABLE_DIGEST`] sentinel instead
//! of aborting the scan, which means any two unreadable files compare equal;
//! such a file only shows up as modified once readable content appears.
//!
//! Folder digests aggregate the sorted `(path, digest)` pairs of every file
//! under the folder by path prefix, so a folder's digest covers its whole
//! subtree, not just direct children.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use xxhash_rust::xxh3::{Xxh3, xxh3_128};

/// Sentinel digest recorded for a file whose content could not be read.
pub const UNREADABLE_DIGEST: &str = "";

/// Read chunk size for streaming file hashing.
const CHUNK_SIZE: usize = 65536;

/// Hashes a byte slice to a 32-character lowercase hex digest.
#[must_use]
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:032x}", xxh3_128(data))
}

/// Computes the content digest of a file.
///
/// Any I/O failure (permission denied, file vanished mid-scan) yields the
/// unreadable sentinel rather than an error, so one bad file never aborts a
/// whole-tree scan.
#[must_use]
pub fn file_digest(path: &Path) -> String {
    match try_file_digest(path) {
        Ok(digest) => digest,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "file unreadable, using sentinel digest");
            UNREADABLE_DIGEST.to_string()
        }
    }
}

fn try_file_digest(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Xxh3::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:032x}", hasher.digest128()))
}

/// Computes the aggregate digest of a folder from a file-digest map.
///
/// Membership is prefix-based: `folder` contains every entry whose path
/// starts with `folder + "/"`, and the root folder `"."` contains the
/// entries with no slash in their path. Pairs are sorted by path before
/// hashing, so the result is independent of map iteration order. Returns
/// the empty-string sentinel when no files qualify.
#[must_use]
pub fn folder_digest(folder: &str, file_digests: &BTreeMap<String, String>) -> String {
    let prefix = format!("{folder}/");
    let mut members: Vec<(&str, &str)> = file_digests
        .iter()
        .filter(|(path, _)| path.starts_with(&prefix) || (folder == "." && !path.contains('/')))
        .map(|(path, digest)| (path.as_str(), digest.as_str()))
        .collect();

    if members.is_empty() {
        return String::new();
    }

    members.sort_unstable();

    let mut hasher = Xxh3::new();
    for (path, digest) in members {
        hasher.update(format!("{path}:{digest}\n").as_bytes());
    }
    format!("{:032x}", hasher.digest128())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(p, d)| ((*p).to_string(), (*d).to_string()))
            .collect()
    }

    #[test]
    fn test_hash_bytes_deterministic() {
        let h1 = hash_bytes(b"content");
        let h2 = hash_bytes(b"content");
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 32);
        assert_ne!(h1, hash_bytes(b"other"));
    }

    #[test]
    fn test_file_digest_deterministic() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "hello")?;

        let d1 = file_digest(&path);
        let d2 = file_digest(&path);
        assert_eq!(d1, d2);
        assert_eq!(d1, hash_bytes(b"hello"));
        Ok(())
    }

    #[test]
    fn test_file_digest_changes_with_content() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "one")?;
        let before = file_digest(&path);
        std::fs::write(&path, "two")?;
        assert_ne!(before, file_digest(&path));
        Ok(())
    }

    #[test]
    fn test_missing_file_yields_sentinel() {
        let digest = file_digest(Path::new("/nonexistent/path/file.txt"));
        assert_eq!(digest, UNREADABLE_DIGEST);
    }

    #[test]
    fn test_folder_digest_covers_subtree() {
        let digests = map(&[
            ("src/a.ts", "h1"),
            ("src/deep/b.ts", "h2"),
            ("lib/c.ts", "h3"),
        ]);

        // src aggregates its nested file too
        let shallow = folder_digest("src", &map(&[("src/a.ts", "h1")]));
        let full = folder_digest("src", &digests);
        assert_ne!(shallow, full);
    }

    #[test]
    fn test_folder_digest_root_holds_toplevel_files_only() {
        // "." aggregates files with no slash; nested files belong to their
        // own folder keys.
        let with_nested = map(&[("README.md", "h1"), ("src/a.ts", "h2")]);
        let root_only = map(&[("README.md", "h1")]);

        assert_eq!(
            folder_digest(".", &with_nested),
            folder_digest(".", &root_only)
        );
        assert_ne!(folder_digest("src", &with_nested), "");
    }

    #[test]
    fn test_folder_digest_empty_sentinel() {
        let digests = map(&[("src/a.ts", "h1")]);
        assert_eq!(folder_digest("docs", &digests), "");
    }

    #[test]
    fn test_folder_digest_value_locality() {
        let before = map(&[("src/a.ts", "h1"), ("docs/d.md", "h9")]);
        let after = map(&[("src/a.ts", "h2"), ("docs/d.md", "h9")]);

        assert_ne!(folder_digest("src", &before), folder_digest("src", &after));
        assert_eq!(
            folder_digest("docs", &before),
            folder_digest("docs", &after)
        );
    }

    #[test]
    fn test_folder_digest_prefix_is_not_substring() {
        // "source" must not count as inside "src"
        let digests = map(&[("source/a.ts", "h1")]);
        assert_eq!(folder_digest("src", &digests), "");
    }
}
