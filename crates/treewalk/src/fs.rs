//! crates/treewalk/src/fs.rs
//! Filesystem primitives used by the walker.
//!
//! Each operation fails independently with an [`FsError`]. [`OsFs`] talks to
//! the host; tests substitute an in-memory implementation.

use crate::entry::{DirEntry, FileKind};
use crate::error::FsError;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a single filesystem primitive.
pub type FsResult<T> = Result<T, FsError>;

/// Filesystem operations required by [`crate::TreeWalker`].
pub trait WalkerFs {
    /// Reports whether `path` exists, following symlinks.
    fn exists(&self, path: &Path) -> FsResult<bool>;

    /// Resolves `path` to its absolute, symlink-free form.
    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf>;

    /// Lists a directory. The outer error covers opening the directory, the
    /// inner ones cover individual entries.
    fn read_dir(&self, path: &Path) -> FsResult<Vec<FsResult<DirEntry>>>;

    /// Reads the target stored in a symbolic link.
    fn read_link(&self, path: &Path) -> FsResult<PathBuf>;

    /// Queries the kind of `path` without following a final symlink.
    fn symlink_metadata(&self, path: &Path) -> FsResult<FileKind>;

    /// Queries the kind of `path`, following symlinks.
    fn metadata(&self, path: &Path) -> FsResult<FileKind>;

    /// Probes whether the caller may read `path`.
    fn check_readable(&self, path: &Path) -> FsResult<()>;
}

impl<F: WalkerFs + ?Sized> WalkerFs for &F {
    fn exists(&self, path: &Path) -> FsResult<bool> {
        (**self).exists(path)
    }

    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf> {
        (**self).canonicalize(path)
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<FsResult<DirEntry>>> {
        (**self).read_dir(path)
    }

    fn read_link(&self, path: &Path) -> FsResult<PathBuf> {
        (**self).read_link(path)
    }

    fn symlink_metadata(&self, path: &Path) -> FsResult<FileKind> {
        (**self).symlink_metadata(path)
    }

    fn metadata(&self, path: &Path) -> FsResult<FileKind> {
        (**self).metadata(path)
    }

    fn check_readable(&self, path: &Path) -> FsResult<()> {
        (**self).check_readable(path)
    }
}

/// The host filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFs;

impl WalkerFs for OsFs {
    fn exists(&self, path: &Path) -> FsResult<bool> {
        Ok(path.try_exists()?)
    }

    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf> {
        Ok(fs::canonicalize(path)?)
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<FsResult<DirEntry>>> {
        let entries = fs::read_dir(path)?
            .map(|entry| -> FsResult<DirEntry> {
                let entry = entry?;
                let kind = FileKind::from(entry.file_type()?);
                Ok(DirEntry::new(entry.file_name(), kind))
            })
            .collect();
        Ok(entries)
    }

    fn read_link(&self, path: &Path) -> FsResult<PathBuf> {
        Ok(fs::read_link(path)?)
    }

    fn symlink_metadata(&self, path: &Path) -> FsResult<FileKind> {
        Ok(fs::symlink_metadata(path)?.file_type().into())
    }

    fn metadata(&self, path: &Path) -> FsResult<FileKind> {
        Ok(fs::metadata(path)?.file_type().into())
    }

    #[cfg(unix)]
    fn check_readable(&self, path: &Path) -> FsResult<()> {
        rustix::fs::access(path, rustix::fs::Access::READ_OK)
            .map_err(|errno| FsError::from(std::io::Error::from(errno)))
    }

    #[cfg(not(unix))]
    fn check_readable(&self, path: &Path) -> FsResult<()> {
        fs::File::open(path)?;
        Ok(())
    }
}
