use std::io;
use thiserror::Error;

/// Platform error code attached to a filesystem failure.
///
/// The known variants cover the failures a traversal is expected to meet;
/// anything else is kept verbatim in [`ErrorCode::Unrecognized`] so the
/// diagnostic can still show the raw code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `ENOENT`
    NotFound,
    /// `EACCES`
    PermissionDenied,
    /// `EPERM`
    OperationNotPermitted,
    /// `EMFILE`
    TooManyOpenFiles,
    /// `ENFILE`
    FileTableOverflow,
    /// `ENOTDIR`
    NotADirectory,
    /// `EISDIR`
    IsADirectory,
    /// `ELOOP`
    TooManySymlinks,
    /// `ENAMETOOLONG`
    NameTooLong,
    /// `ENOSPC`
    NoSpace,
    /// `EIO`
    Io,
    /// `EROFS`
    ReadOnlyFilesystem,
    /// `EBUSY`
    Busy,
    /// `EEXIST`
    AlreadyExists,
    /// `EXDEV`
    CrossDevice,
    /// Any other code, by name.
    Unrecognized(String),
}

impl ErrorCode {
    /// Returns the symbolic name of the code, e.g. `EACCES`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound => "ENOENT",
            Self::PermissionDenied => "EACCES",
            Self::OperationNotPermitted => "EPERM",
            Self::TooManyOpenFiles => "EMFILE",
            Self::FileTableOverflow => "ENFILE",
            Self::NotADirectory => "ENOTDIR",
            Self::IsADirectory => "EISDIR",
            Self::TooManySymlinks => "ELOOP",
            Self::NameTooLong => "ENAMETOOLONG",
            Self::NoSpace => "ENOSPC",
            Self::Io => "EIO",
            Self::ReadOnlyFilesystem => "EROFS",
            Self::Busy => "EBUSY",
            Self::AlreadyExists => "EEXIST",
            Self::CrossDevice => "EXDEV",
            Self::Unrecognized(name) => name,
        }
    }

    /// Parses a symbolic name. Unknown names become [`ErrorCode::Unrecognized`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ENOENT" => Self::NotFound,
            "EACCES" => Self::PermissionDenied,
            "EPERM" => Self::OperationNotPermitted,
            "EMFILE" => Self::TooManyOpenFiles,
            "ENFILE" => Self::FileTableOverflow,
            "ENOTDIR" => Self::NotADirectory,
            "EISDIR" => Self::IsADirectory,
            "ELOOP" => Self::TooManySymlinks,
            "ENAMETOOLONG" => Self::NameTooLong,
            "ENOSPC" => Self::NoSpace,
            "EIO" => Self::Io,
            "EROFS" => Self::ReadOnlyFilesystem,
            "EBUSY" => Self::Busy,
            "EEXIST" => Self::AlreadyExists,
            "EXDEV" => Self::CrossDevice,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    /// Maps a raw `errno` value.
    #[cfg(unix)]
    #[must_use]
    pub fn from_raw_os_error(code: i32) -> Self {
        match code {
            libc::ENOENT => Self::NotFound,
            libc::EACCES => Self::PermissionDenied,
            libc::EPERM => Self::OperationNotPermitted,
            libc::EMFILE => Self::TooManyOpenFiles,
            libc::ENFILE => Self::FileTableOverflow,
            libc::ENOTDIR => Self::NotADirectory,
            libc::EISDIR => Self::IsADirectory,
            libc::ELOOP => Self::TooManySymlinks,
            libc::ENAMETOOLONG => Self::NameTooLong,
            libc::ENOSPC => Self::NoSpace,
            libc::EIO => Self::Io,
            libc::EROFS => Self::ReadOnlyFilesystem,
            libc::EBUSY => Self::Busy,
            libc::EEXIST => Self::AlreadyExists,
            libc::EXDEV => Self::CrossDevice,
            other => Self::Unrecognized(format!("errno {other}")),
        }
    }

    /// Maps a raw OS error value.
    #[cfg(not(unix))]
    #[must_use]
    pub fn from_raw_os_error(code: i32) -> Self {
        Self::from_io_kind(io::Error::from_raw_os_error(code).kind())
            .unwrap_or_else(|| Self::Unrecognized(format!("os error {code}")))
    }

    /// Maps the portable [`io::ErrorKind`] for errors that carry no raw code.
    #[must_use]
    pub fn from_io_kind(kind: io::ErrorKind) -> Option<Self> {
        let code = match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::AlreadyExists => Self::AlreadyExists,
            io::ErrorKind::NotADirectory => Self::NotADirectory,
            io::ErrorKind::IsADirectory => Self::IsADirectory,
            io::ErrorKind::ReadOnlyFilesystem => Self::ReadOnlyFilesystem,
            io::ErrorKind::StorageFull => Self::NoSpace,
            io::ErrorKind::ResourceBusy => Self::Busy,
            io::ErrorKind::CrossesDevices => Self::CrossDevice,
            _ => return None,
        };
        Some(code)
    }

    /// Reports whether the code belongs to the fixed, described set.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

/// A failed filesystem operation: an optional [`ErrorCode`] plus the
/// platform's message.
///
/// Every primitive of [`crate::WalkerFs`] reports failures with this type;
/// [`crate::classify()`] turns it into the diagnostic text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FsError {
    code: Option<ErrorCode>,
    message: String,
}

impl FsError {
    /// Creates an error carrying `code`.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    /// Creates an error with no code at all.
    pub fn without_code(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Returns the attached code, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&ErrorCode> {
        self.code.as_ref()
    }

    /// Returns the platform message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Reports whether the code belongs to the described set.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        self.code.as_ref().is_some_and(ErrorCode::is_recognized)
    }
}

impl From<io::Error> for FsError {
    fn from(error: io::Error) -> Self {
        let code = match error.raw_os_error() {
            Some(raw) => Some(ErrorCode::from_raw_os_error(raw)),
            None => ErrorCode::from_io_kind(error.kind()),
        };
        Self {
            code,
            message: error.to_string(),
        }
    }
}
