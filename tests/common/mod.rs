//! Common test utilities for component-builder integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A component directory for integration tests
pub struct TestComponent {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to component root
    pub path: PathBuf,
}

impl TestComponent {
    /// Create an empty component directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a component with the given script and style files
    ///
    /// The manifest lists the files in the order given.
    pub fn with_files(scripts: &[(&str, &str)], styles: &[(&str, &str)]) -> Self {
        fn names(files: &[(&str, &str)]) -> Vec<String> {
            files.iter().map(|(name, _)| (*name).to_string()).collect()
        }

        let component = Self::new();
        let manifest = serde_json::json!({
            "scripts": names(scripts),
            "styles": names(styles),
        });
        component.write_manifest(&manifest.to_string());
        for (name, content) in scripts.iter().chain(styles) {
            component.write_file(name, content);
        }
        component
    }

    /// Write component.json
    pub fn write_manifest(&self, content: &str) {
        self.write_file("component.json", content);
    }

    /// Write a file in the component
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }
}

/// The real component-builder binary with a clean environment
#[allow(deprecated)]
pub fn builder_cmd() -> Command {
    let mut cmd = Command::cargo_bin("component-builder").expect("binary should be built");
    // Ignore developer overrides during tests
    cmd.env_remove("COMPONENT_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// The binary pointed at `dir`
pub fn builder_cmd_for(dir: &Path) -> Command {
    let mut cmd = builder_cmd();
    cmd.arg("--dir").arg(dir);
    cmd
}
