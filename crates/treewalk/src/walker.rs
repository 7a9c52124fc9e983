use crate::classify::classify;
use crate::config::{DEFAULT_MAX_DEPTH, WalkConfig};
use crate::entry::{DirEntry, FileKind, NameProblem};
use crate::error::FsError;
use crate::fs::{OsFs, WalkerFs};
use crate::visited::VisitedSet;
use logging::{debug_log, info_log, warn_log};
use std::any::Any;
use std::env;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::{Path, PathBuf};

/// Recursive file enumerator.
///
/// Every failure is logged and contributes no files; the walker itself never
/// fails. Results follow directory-listing order.
#[derive(Clone, Debug)]
pub struct TreeWalker<F = OsFs> {
    fs: F,
    max_depth: usize,
}

impl TreeWalker<OsFs> {
    /// Creates a walker over the host filesystem with the default depth limit.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_fs(OsFs)
    }

    /// Creates a host-filesystem walker from a [`WalkConfig`].
    #[must_use]
    pub const fn from_config(config: &WalkConfig) -> Self {
        Self::new().max_depth(config.max_depth)
    }
}

impl Default for TreeWalker<OsFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: WalkerFs> TreeWalker<F> {
    /// Creates a walker over `fs` with the default depth limit.
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self {
            fs,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the recursion ceiling.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the configured recursion ceiling.
    #[must_use]
    pub const fn depth_limit(&self) -> usize {
        self.max_depth
    }

    /// Enumerates the files beneath `path`, starting at depth 0 with a fresh
    /// visited set.
    pub fn walk(&self, path: impl AsRef<Path>) -> Vec<PathBuf> {
        let mut visited = VisitedSet::new();
        self.walk_from(path, 0, &mut visited)
    }

    /// Enumerates the files beneath `path` as if reached at `depth`, sharing
    /// `visited` with the caller.
    ///
    /// Directories already in `visited` are reported as cycles and skipped.
    /// `visited` holds the same paths on return as it did on entry.
    pub fn walk_from(
        &self,
        path: impl AsRef<Path>,
        depth: usize,
        visited: &mut VisitedSet,
    ) -> Vec<PathBuf> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            warn_log!(
                Flist,
                "invalid path argument: expected a non-empty path, got {:?}",
                path
            );
            return Vec::new();
        }
        self.walk_dir(path, depth, visited)
    }

    fn walk_dir(&self, path: &Path, depth: usize, visited: &mut VisitedSet) -> Vec<PathBuf> {
        if depth >= self.max_depth {
            warn_log!(
                Flist,
                "maximum recursion depth reached at '{}' (limit: {})",
                path.display(),
                self.max_depth
            );
            return Vec::new();
        }

        let Some(path) = absolutize(path) else {
            return Vec::new();
        };

        match self.fs.exists(&path) {
            Ok(true) => {}
            Ok(false) => {
                warn_log!(Flist, "directory does not exist: '{}'", path.display());
                return Vec::new();
            }
            Err(error) => {
                warn_log!(
                    Flist,
                    "cannot check existence of '{}': {}",
                    path.display(),
                    classify(&error)
                );
                return Vec::new();
            }
        }

        let canonical = match self.fs.canonicalize(&path) {
            Ok(canonical) => canonical,
            Err(error) => {
                warn_log!(
                    Flist,
                    "cannot resolve real path of '{}': {}",
                    path.display(),
                    classify(&error)
                );
                return Vec::new();
            }
        };

        let Some(mut guard) = visited.enter(&canonical) else {
            warn_log!(
                Symsafe,
                "circular symlink detected: '{}' -> '{}', skipping",
                path.display(),
                canonical.display()
            );
            return Vec::new();
        };

        info_log!(Flist, 2, "entering directory: '{}'", path.display());
        debug_log!(Depth, 1, "depth {} of {} at '{}'", depth, self.max_depth, path.display());

        let entries = match self.fs.read_dir(&path) {
            Ok(entries) => entries,
            Err(error) => {
                report_listing_failure(&path, &error);
                return Vec::new();
            }
        };
        debug_log!(Flist, 2, "found {} entries in '{}'", entries.len(), path.display());

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn_log!(
                        Flist,
                        "cannot read entry in '{}': {}",
                        path.display(),
                        classify(&error)
                    );
                    continue;
                }
            };

            let visited: &mut VisitedSet = &mut guard;
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                self.process_entry(&path, &entry, depth, visited)
            }));
            match outcome {
                Ok(found) => files.extend(found),
                Err(payload) => {
                    warn_log!(
                        Flist,
                        "unexpected error processing '{}': {}",
                        path.join(entry.name()).display(),
                        panic_message(&*payload)
                    );
                }
            }
        }

        debug_log!(Dup, 2, "leaving '{}'", guard.path().display());
        files
    }

    fn process_entry(
        &self,
        dir: &Path,
        entry: &DirEntry,
        depth: usize,
        visited: &mut VisitedSet,
    ) -> Vec<PathBuf> {
        if entry.is_dot() {
            return Vec::new();
        }

        match entry.name_problem() {
            Some(NameProblem::Empty) => {
                warn_log!(Skip, "skipping entry with empty name in '{}'", dir.display());
                return Vec::new();
            }
            Some(NameProblem::NulByte) => {
                warn_log!(
                    Skip,
                    "skipping entry with null character in name {:?} in '{}'",
                    entry.name(),
                    dir.display()
                );
                return Vec::new();
            }
            None => {}
        }

        let child = dir.join(entry.name());
        match entry.kind() {
            FileKind::Directory => {
                debug_log!(Depth, 2, "descending into '{}'", child.display());
                self.walk_dir(&child, depth + 1, visited)
            }
            FileKind::Symlink => self.symlinked_file(dir, child).into_iter().collect(),
            FileKind::File => self.readable_file(child).into_iter().collect(),
            FileKind::Other => {
                info_log!(Nonreg, 1, "skipping non-regular file '{}'", child.display());
                Vec::new()
            }
        }
    }

    /// Returns the link path when it resolves to a readable regular file.
    fn symlinked_file(&self, dir: &Path, link: PathBuf) -> Option<PathBuf> {
        if let Err(error) = self.fs.symlink_metadata(&link) {
            warn_log!(
                Symsafe,
                "cannot stat symlink '{}': {}",
                link.display(),
                classify(&error)
            );
            return None;
        }

        let target = match self.fs.read_link(&link) {
            Ok(target) => dir.join(target),
            Err(error) => {
                warn_log!(
                    Symsafe,
                    "cannot read symlink target of '{}': {}",
                    link.display(),
                    classify(&error)
                );
                return None;
            }
        };

        match self.fs.metadata(&target) {
            Ok(FileKind::File) => self.readable_file(link),
            Ok(FileKind::Directory) => {
                info_log!(
                    Nonreg,
                    1,
                    "skipping symlink to directory '{}' -> '{}'",
                    link.display(),
                    target.display()
                );
                None
            }
            Ok(_) => {
                info_log!(
                    Nonreg,
                    1,
                    "skipping symlink to non-regular file '{}'",
                    link.display()
                );
                None
            }
            Err(error) => {
                warn_log!(
                    Symsafe,
                    "symlink target not accessible: '{}' -> '{}': {}",
                    link.display(),
                    target.display(),
                    classify(&error)
                );
                None
            }
        }
    }

    fn readable_file(&self, path: PathBuf) -> Option<PathBuf> {
        match self.fs.check_readable(&path) {
            Ok(()) => Some(path),
            Err(error) => {
                warn_log!(
                    Skip,
                    "file not accessible: '{}': {}",
                    path.display(),
                    classify(&error)
                );
                None
            }
        }
    }
}

fn report_listing_failure(path: &Path, error: &FsError) {
    if error.is_recognized() {
        warn_log!(
            Flist,
            "cannot read directory '{}': {}",
            path.display(),
            classify(error)
        );
    } else {
        warn_log!(
            Flist,
            "error reading directory '{}': {}",
            path.display(),
            classify(error)
        );
    }
    debug_log!(Io, 1, "read_dir('{}') failed: {:?}", path.display(), error);
}

fn absolutize(path: &Path) -> Option<PathBuf> {
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }
    match env::current_dir() {
        Ok(cwd) => Some(cwd.join(path)),
        Err(error) => {
            warn_log!(
                Flist,
                "cannot resolve current directory for '{}': {}",
                path.display(),
                classify(&FsError::from(error))
            );
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}
