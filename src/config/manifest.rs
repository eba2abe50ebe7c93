//! Component manifest (component.json) data structures

use std::path::Path;

use serde_json::Value;

use crate::error::{self, Result};

/// File name of the manifest inside a component directory
pub const MANIFEST_FILE: &str = "component.json";

/// Parsed component manifest
///
/// Only `scripts` and `styles` are interpreted. A field that is absent or not
/// an array of strings is remembered as missing and reported when an
/// aggregator asks for it, so a manifest without `styles` still builds its
/// scripts. The whole document stays available through [`Manifest::raw`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    scripts: Option<Vec<String>>,
    styles: Option<Vec<String>>,
    raw: Value,
}

impl Manifest {
    /// Build a manifest from explicit script and style lists
    pub fn new(scripts: Vec<String>, styles: Vec<String>) -> Self {
        let raw = serde_json::json!({ "scripts": &scripts, "styles": &styles });
        Self {
            scripts: Some(scripts),
            styles: Some(styles),
            raw,
        }
    }

    /// Parse manifest JSON read from `path`
    pub fn parse(path: &Path, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| error::manifest::parse_failed(path.display().to_string(), e.to_string()))?;
        Ok(Self::from_value(value))
    }

    /// Interpret an already parsed JSON document
    pub fn from_value(raw: Value) -> Self {
        Self {
            scripts: path_list(&raw, "scripts"),
            styles: path_list(&raw, "styles"),
            raw,
        }
    }

    /// Script paths in manifest order
    pub fn scripts(&self) -> Result<&[String]> {
        self.scripts
            .as_deref()
            .ok_or_else(|| error::manifest::invalid("scripts"))
    }

    /// Style paths in manifest order
    pub fn styles(&self) -> Result<&[String]> {
        self.styles
            .as_deref()
            .ok_or_else(|| error::manifest::invalid("styles"))
    }

    /// The full parsed document
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

fn path_list(doc: &Value, field: &str) -> Option<Vec<String>> {
    doc.get(field)?
        .as_array()?
        .iter()
        .map(|entry| entry.as_str().map(str::to_owned))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BuilderError, ErrorKind};

    fn parse(json: &str) -> Result<Manifest> {
        Manifest::parse(Path::new("/c/component.json"), json)
    }

    #[test]
    fn test_manifest_parse() {
        let manifest = parse(
            r#"{
  "name": "tip",
  "scripts": ["index.js", "lib/template.js"],
  "styles": ["tip.css"]
}"#,
        )
        .unwrap();

        assert_eq!(manifest.scripts().unwrap(), ["index.js", "lib/template.js"]);
        assert_eq!(manifest.styles().unwrap(), ["tip.css"]);
        assert_eq!(manifest.raw()["name"], "tip");
    }

    #[test]
    fn test_manifest_empty_lists() {
        let manifest = parse(r#"{"scripts": [], "styles": []}"#).unwrap();
        assert!(manifest.scripts().unwrap().is_empty());
        assert!(manifest.styles().unwrap().is_empty());
    }

    #[test]
    fn test_manifest_invalid_json() {
        let err = parse("{ scripts: ").unwrap_err();
        assert!(matches!(err, BuilderError::ManifestParseFailed { .. }));
        assert_eq!(err.path(), Some("/c/component.json"));
    }

    #[test]
    fn test_manifest_missing_field_reported_on_access() {
        let manifest = parse(r#"{"scripts": ["a.js"]}"#).unwrap();

        assert!(manifest.scripts().is_ok());
        let err = manifest.styles().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Manifest);
        assert!(err.to_string().contains("'styles'"));
    }

    #[test]
    fn test_manifest_wrong_shapes_are_missing() {
        let manifest = parse(r#"{"scripts": "index.js", "styles": ["a.css", 3]}"#).unwrap();
        assert!(manifest.scripts().is_err());
        assert!(manifest.styles().is_err());
    }

    #[test]
    fn test_manifest_non_object_document() {
        let manifest = parse("[1, 2, 3]").unwrap();
        assert_eq!(manifest.scripts().unwrap_err().kind(), ErrorKind::Manifest);
    }

    #[test]
    fn test_manifest_new() {
        let manifest = Manifest::new(vec!["a.js".into()], vec![]);
        assert_eq!(manifest.scripts().unwrap(), ["a.js"]);
        assert_eq!(manifest.raw()["scripts"][0], "a.js");
    }
}
