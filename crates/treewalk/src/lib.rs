#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `treewalk` enumerates the regular files reachable beneath a directory while
//! surviving whatever the filesystem throws at it: permission failures,
//! dangling or circular symbolic links, unreadable entries, odd names and
//! pathological nesting. A walk always returns a list of paths, possibly
//! empty; problems are reported as diagnostics through the `logging` crate
//! and never escape to the caller.
//!
//! # Design
//!
//! - [`TreeWalker`] performs a depth-first, synchronous descent. Each
//!   directory is checked for existence, canonicalized, entered in a
//!   [`VisitedSet`] and listed; each entry is then processed inside its own
//!   unwind boundary so a single bad entry cannot abort its siblings.
//! - [`WalkerFs`] lists the filesystem primitives the walker needs. [`OsFs`]
//!   implements them for the host; tests provide in-memory fakes.
//! - Failures travel as [`FsError`] values carrying an optional
//!   [`ErrorCode`]. [`classify()`] renders them as stable category strings for
//!   the diagnostics.
//! - [`WalkConfig`] holds the recursion ceiling and deserializes with the
//!   `serde` feature.
//!
//! # Invariants
//!
//! - Recursion never goes deeper than the configured maximum depth.
//! - A canonical directory is never entered twice on the same recursion
//!   stack; [`VisitGuard`] removes it again on every exit path, including
//!   unwinding.
//! - Symlinks to regular files are reported by their own path. Symlinks to
//!   directories are never followed.
//! - Results keep directory-listing order; no sorting is applied.
//!
//! # Examples
//!
//! ```
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("root");
//! fs::create_dir_all(root.join("sub"))?;
//! fs::write(root.join("a.txt"), b"a")?;
//! fs::write(root.join("sub/b.txt"), b"b")?;
//!
//! let mut files = treewalk::walk(&root);
//! files.sort();
//! assert_eq!(files, vec![root.join("a.txt"), root.join("sub/b.txt")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! Diagnostics can be observed by capturing them on the current thread:
//!
//! ```
//! use treewalk::TreeWalker;
//!
//! logging::start_capture();
//! let files = TreeWalker::new().max_depth(0).walk("/");
//! assert!(files.is_empty());
//! assert!(logging::drain_events()[0]
//!     .message()
//!     .contains("maximum recursion depth reached"));
//! ```

mod classify;
mod config;
mod entry;
mod error;
mod fs;
mod visited;
mod walker;

pub use classify::{classify, describe};
pub use config::{DEFAULT_MAX_DEPTH, WalkConfig};
pub use entry::{DirEntry, FileKind, NameProblem};
pub use error::{ErrorCode, FsError};
pub use fs::{FsResult, OsFs, WalkerFs};
pub use visited::{VisitGuard, VisitedSet};
pub use walker::TreeWalker;

use std::path::{Path, PathBuf};

/// Enumerates the files beneath `path` on the host filesystem with the
/// default depth limit.
///
/// Equivalent to `TreeWalker::new().walk(path)`.
pub fn walk(path: impl AsRef<Path>) -> Vec<PathBuf> {
    TreeWalker::new().walk(path)
}
