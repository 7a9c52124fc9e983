//! crates/treewalk/src/classify.rs
//! Maps filesystem failures to stable diagnostic text.
//!
//! Callers match substrings of these strings in logs and tests, so the table
//! below must not change wording.

use crate::error::{ErrorCode, FsError};

/// Returns the fixed description for a recognized code.
///
/// [`ErrorCode::Unrecognized`] has no description and yields `None`.
#[must_use]
pub const fn describe(code: &ErrorCode) -> Option<&'static str> {
    let text = match code {
        ErrorCode::NotFound => "File or directory not found",
        ErrorCode::PermissionDenied => "Permission denied - insufficient access rights",
        ErrorCode::OperationNotPermitted => {
            "Operation not permitted - administrative privileges required"
        }
        ErrorCode::TooManyOpenFiles => "Too many open files - system limit reached",
        ErrorCode::FileTableOverflow => "File table overflow - system-wide limit exceeded",
        ErrorCode::NotADirectory => "Not a directory - path component is not a directory",
        ErrorCode::IsADirectory => "Is a directory - expected file but found directory",
        ErrorCode::TooManySymlinks => "Too many symbolic links - possible circular reference",
        ErrorCode::NameTooLong => "Filename too long - exceeds system limits",
        ErrorCode::NoSpace => "No space left on device",
        ErrorCode::Io => "Input/output error - hardware or network issue",
        ErrorCode::ReadOnlyFilesystem => "Read-only file system",
        ErrorCode::Busy => "Resource busy - file is in use",
        ErrorCode::AlreadyExists => "File already exists",
        ErrorCode::CrossDevice => "Cross-device link - operation spans different filesystems",
        ErrorCode::Unrecognized(_) => return None,
    };
    Some(text)
}

/// Renders `error` as a human-readable category string.
///
/// Total over its input: recognized codes map to their fixed description,
/// other codes render as `"<code>: <message>"` and a missing code renders as
/// `"Unknown error: <message>"`.
///
/// # Examples
///
/// ```
/// use treewalk::{ErrorCode, FsError, classify};
///
/// let denied = FsError::new(ErrorCode::PermissionDenied, "Permission denied (os error 13)");
/// assert_eq!(classify(&denied), "Permission denied - insufficient access rights");
///
/// let odd = FsError::new(ErrorCode::from_name("EFOO"), "weird");
/// assert_eq!(classify(&odd), "EFOO: weird");
/// ```
#[must_use]
pub fn classify(error: &FsError) -> String {
    match error.code() {
        Some(code) => describe(code).map_or_else(
            || format!("{}: {}", code.name(), error.message()),
            str::to_owned,
        ),
        None => format!("Unknown error: {}", error.message()),
    }
}
