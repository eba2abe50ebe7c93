//! Manifest errors

use super::BuilderError;

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> BuilderError {
    BuilderError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid manifest error for a missing or malformed list field
pub fn invalid(field: impl Into<String>) -> BuilderError {
    BuilderError::ManifestInvalid {
        field: field.into(),
    }
}
