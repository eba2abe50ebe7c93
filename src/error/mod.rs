//! Error types and handling for the component builder
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`manifest`]: Manifest (`component.json`) errors

pub mod fs;
pub mod manifest;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for builder operations
#[derive(Error, Diagnostic, Debug)]
pub enum BuilderError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(component::fs::not_found),
        help("Check that every path listed in component.json exists relative to the component directory")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(component::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(component::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Manifest errors
    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(
        code(component::manifest::parse_failed),
        help("component.json must be valid JSON")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Invalid manifest: '{field}' must be a list of file paths")]
    #[diagnostic(
        code(component::manifest::invalid),
        help("Declare both \"scripts\" and \"styles\" as arrays of relative paths")
    )]
    ManifestInvalid { field: String },
}

/// Coarse classification of a [`BuilderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading or writing a file failed
    Io,
    /// The manifest is not valid JSON
    Parse,
    /// The manifest parsed but lacks a usable `scripts`/`styles` list
    Manifest,
}

impl BuilderError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BuilderError::FileNotFound { .. }
            | BuilderError::FileReadFailed { .. }
            | BuilderError::FileWriteFailed { .. } => ErrorKind::Io,
            BuilderError::ManifestParseFailed { .. } => ErrorKind::Parse,
            BuilderError::ManifestInvalid { .. } => ErrorKind::Manifest,
        }
    }

    /// Path the error refers to, when it has one
    pub fn path(&self) -> Option<&str> {
        match self {
            BuilderError::FileNotFound { path }
            | BuilderError::FileReadFailed { path, .. }
            | BuilderError::FileWriteFailed { path, .. }
            | BuilderError::ManifestParseFailed { path, .. } => Some(path),
            BuilderError::ManifestInvalid { .. } => None,
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BuilderError>;
