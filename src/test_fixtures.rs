//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Helpers to create on-disk components (a temp directory holding a
//! `component.json` plus the files it lists) with a single function call.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::create_component;
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let temp = create_component(
//!         r#"{"scripts": ["index.js"], "styles": []}"#,
//!         &[("index.js", "module.exports = 1;")],
//!     );
//!     let builder = Builder::new(temp.path());
//! }
//! ```

use std::path::Path;

use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// Uses `crate::temp::temp_dir_base()` to ensure temp dirs are never
/// created under the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Write `content` to `relative` under `root`, creating parent directories.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let file_path = root.join(relative);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&file_path, content).expect("Failed to write file");
}

/// Create a component directory with the given manifest and files.
///
/// # Panics
///
/// Panics if the temp directory or any file cannot be created.
#[must_use]
pub fn create_component(manifest: &str, files: &[(&str, &str)]) -> TempDir {
    let temp = create_temp_dir();
    write_file(temp.path(), crate::config::MANIFEST_FILE, manifest);
    for (relative, content) in files {
        write_file(temp.path(), relative, content);
    }
    temp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
        assert!(temp.path().is_absolute());
    }

    #[test]
    fn test_create_component() {
        let temp = create_component(
            r#"{"scripts": ["lib/a.js"], "styles": []}"#,
            &[("lib/a.js", "a")],
        );
        assert!(temp.path().join("component.json").exists());
        assert_eq!(
            std::fs::read_to_string(temp.path().join("lib/a.js")).unwrap(),
            "a"
        );
    }
}
