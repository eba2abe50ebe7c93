//! Configuration file handling
//!
//! This module contains data structures for:
//! - `component.json` - Component manifest listing scripts and styles

pub mod manifest;

// Re-export commonly used types
pub use manifest::{MANIFEST_FILE, Manifest};
