use std::ffi::{OsStr, OsString};
use std::fs;

/// Closed classification of a directory entry, decided once at listing time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// A directory.
    Directory,
    /// A regular file.
    File,
    /// A symbolic link, not followed.
    Symlink,
    /// Device nodes, sockets, FIFOs and anything else.
    Other,
}

impl From<fs::FileType> for FileKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// Reason an entry name is rejected before it is joined onto a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameProblem {
    /// The name has no bytes.
    Empty,
    /// The name contains a NUL byte.
    NulByte,
}

/// One item of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    name: OsString,
    kind: FileKind,
}

impl DirEntry {
    /// Creates an entry from its name and kind.
    pub fn new(name: impl Into<OsString>, kind: FileKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Returns the entry name as listed.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Returns the kind captured when the directory was listed.
    #[must_use]
    pub const fn kind(&self) -> FileKind {
        self.kind
    }

    /// Reports whether the entry is `.` or `..`.
    #[must_use]
    pub fn is_dot(&self) -> bool {
        self.name == "." || self.name == ".."
    }

    /// Checks the name for content that cannot form a valid child path.
    #[must_use]
    pub fn name_problem(&self) -> Option<NameProblem> {
        let bytes = self.name.as_encoded_bytes();
        if bytes.is_empty() {
            Some(NameProblem::Empty)
        } else if bytes.contains(&0) {
            Some(NameProblem::NulByte)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_entries_are_detected() {
        assert!(DirEntry::new(".", FileKind::Directory).is_dot());
        assert!(DirEntry::new("..", FileKind::Directory).is_dot());
        assert!(!DirEntry::new("...", FileKind::File).is_dot());
        assert!(!DirEntry::new(".hidden", FileKind::File).is_dot());
    }

    #[test]
    fn name_problems() {
        assert_eq!(
            DirEntry::new("", FileKind::File).name_problem(),
            Some(NameProblem::Empty)
        );
        assert_eq!(
            DirEntry::new("bad\0name.txt", FileKind::File).name_problem(),
            Some(NameProblem::NulByte)
        );
        assert_eq!(DirEntry::new("good.txt", FileKind::File).name_problem(), None);
    }

    #[test]
    fn file_type_conversion_matches_host() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("f");
        fs::write(&file, b"x").expect("write");

        let dir_kind = FileKind::from(fs::symlink_metadata(temp.path()).expect("dir").file_type());
        let file_kind = FileKind::from(fs::symlink_metadata(&file).expect("file").file_type());
        assert_eq!(dir_kind, FileKind::Directory);
        assert_eq!(file_kind, FileKind::File);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let temp = tempfile::tempdir().expect("tempdir");
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path(), &link).expect("symlink");

        let kind = FileKind::from(fs::symlink_metadata(&link).expect("lstat").file_type());
        assert_eq!(kind, FileKind::Symlink);
    }
}
