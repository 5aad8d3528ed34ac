#![warn(missing_docs)]

//! # Cartograph - Repository mapping and change detection
//!
//! Cartograph tracks which files in a directory tree have changed since a
//! prior checkpoint, using content hashes rather than timestamps. It exposes
//! a three-phase workflow: establish a baseline (`init`), report drift
//! (`changes`), and commit a new baseline (`update`).
//!
//! ## Architecture
//!
//! - [`pattern`]: glob pattern compilation into a single matching predicate
//! - [`ignore`]: ignore-file loading (`.gitignore` at the tracked root)
//! - [`selector`]: tree traversal and selection under the pattern sets
//! - [`hasher`]: content digests per file and aggregate digests per folder
//! - [`snapshot`]: the persisted snapshot model and its JSON store
//! - [`changes`]: diffing two digest snapshots into a change set
//! - [`codemap`]: placeholder documentation stubs written by `init`
//! - [`commands`]: the `init` / `changes` / `update` workflows
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! use std::path::Path;
//!
//! // Baseline, then report drift
//! cartograph::commands::init::execute(
//!     Path::new("/path/to/repo"),
//!     vec!["src/**/*.rs".to_string()],
//!     vec!["**/target/".to_string()],
//!     vec![],
//! )?;
//! cartograph::commands::changes::execute(Path::new("/path/to/repo"))?;
//! # Ok(())
//! # }
//! ```

/// Change detection between two digest snapshots.
pub mod changes;

/// Codemap stub scaffolding written by `init`.
pub mod codemap;

/// Command implementations for the init/changes/update workflow.
pub mod commands;

/// Content and folder digest computation.
pub mod hasher;

/// Ignore-file loading.
pub mod ignore;

/// Glob pattern compilation.
pub mod pattern;

/// Tree traversal and selection.
pub mod selector;

/// Snapshot data model and on-disk store.
pub mod snapshot;

/// Current version of the cartograph binary, recorded in snapshot metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default state directory name under the tracked root.
pub const STATE_DIR: &str = ".slim";

/// Default state file name within the state directory.
pub const STATE_FILE: &str = "cartography.json";

/// Name of the placeholder documentation stub written per folder.
pub const CODEMAP_FILE: &str = "codemap.md";
