//! File system errors

use std::io;
use std::path::Path;

use super::BuilderError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> BuilderError {
    BuilderError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BuilderError {
    BuilderError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> BuilderError {
    BuilderError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Map an I/O failure on `path` to the matching builder error
///
/// A missing file becomes [`BuilderError::FileNotFound`], everything else
/// keeps the OS reason in [`BuilderError::FileReadFailed`].
pub fn from_read(path: &Path, err: &io::Error) -> BuilderError {
    if err.kind() == io::ErrorKind::NotFound {
        not_found(path.display().to_string())
    } else {
        read_failed(path.display().to_string(), err.to_string())
    }
}
