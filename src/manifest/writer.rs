//! Writing a reconciled summary back into package.json
//!
//! This module provides:
//! - `engines.node`, `engines.npm` and `packageManager` updates
//! - Key order preservation for everything else in the manifest
//! - A boolean wrapper that reports failures instead of returning them

use crate::domain::Summary;
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Set the engine fields of a parsed manifest from a summary.
///
/// Creates `engines` when it is missing or not an object. Fields the summary
/// has no value for are left untouched.
pub fn apply_summary(manifest: &mut Map<String, Value>, summary: &Summary) {
    let engines = manifest
        .entry("engines")
        .or_insert_with(|| Value::Object(Map::new()));
    if !engines.is_object() {
        *engines = Value::Object(Map::new());
    }

    if let Value::Object(engines) = engines {
        if let Some(node) = summary.node_range() {
            engines.insert("node".to_string(), Value::String(node));
        }
        if let Some(npm) = summary.npm_range() {
            engines.insert("npm".to_string(), Value::String(npm));
        }
    }

    if let Some(package_manager) = summary.package_manager() {
        manifest.insert("packageManager".to_string(), Value::String(package_manager));
    }
}

/// Rewrite the manifest at `path` with the summary's engine fields.
///
/// The file is written back as 2-space indented JSON with a trailing newline.
pub fn write_engines(path: &Path, summary: &Summary) -> Result<(), ManifestError> {
    let content = read_manifest(path)?;
    let mut json: Value = serde_json::from_str(&content)
        .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;
    let manifest = json
        .as_object_mut()
        .ok_or_else(|| ManifestError::not_an_object(path))?;

    apply_summary(manifest, summary);

    let mut output = serde_json::to_string_pretty(&json)
        .map_err(|e| ManifestError::serialize_error(path, e.to_string()))?;
    output.push('\n');

    write_manifest(path, &output)
}

/// Update the manifest at `path`, returning whether it succeeded.
///
/// Failures are logged, never returned.
pub fn update_manifest(path: &Path, summary: &Summary) -> bool {
    match write_engines(path, summary) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "updated engine constraints");
            true
        }
        Err(e) => {
            tracing::error!("Error updating package.json: {}", e);
            false
        }
    }
}

/// Read a manifest file content safely
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::not_found(path)
        } else {
            ManifestError::read_error(path, e)
        }
    })
}

/// Write content to a manifest file
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Ceiling, Floor, NodeCeiling, NpmCeiling, SummarySource};
    use semver::Version;
    use tempfile::TempDir;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn bounded_summary() -> Summary {
        Summary {
            lowest: Floor {
                node: Some(v("16.0.0")),
                npm: Some(v("8.0.0")),
            },
            highest: Ceiling {
                node: Some(NodeCeiling::Version(v("18.0.0"))),
                npm: Some(NpmCeiling::Version(v("9.0.0"))),
            },
            source: SummarySource::Engines,
        }
    }

    fn open_summary() -> Summary {
        Summary {
            lowest: Floor {
                node: Some(v("18.0.0")),
                npm: Some(v("8.6.0")),
            },
            highest: Ceiling {
                node: Some(NodeCeiling::Unlimited),
                npm: Some(NpmCeiling::LatestCompatible),
            },
            source: SummarySource::Dependencies,
        }
    }

    fn create_temp_package_json(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("package.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_write_engines_with_ceilings() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_package_json(
            &temp_dir,
            r#"{"name": "app", "version": "1.0.0", "dependencies": {"react": "^18.0.0"}}"#,
        );

        write_engines(&path, &bounded_summary()).unwrap();

        let updated: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(updated["engines"]["node"], ">=16.0.0,<=18.0.0");
        assert_eq!(updated["engines"]["npm"], ">=8.0.0,<=9.0.0");
        assert_eq!(updated["packageManager"], "npm@8.0.0");
        assert_eq!(updated["name"], "app");
        assert_eq!(updated["version"], "1.0.0");
        assert_eq!(updated["dependencies"]["react"], "^18.0.0");
    }

    #[test]
    fn test_write_engines_with_sentinels() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_package_json(&temp_dir, r#"{"name": "app"}"#);

        write_engines(&path, &open_summary()).unwrap();

        let updated: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(updated["engines"]["node"], ">=18.0.0");
        assert_eq!(updated["engines"]["npm"], ">=8.6.0");
        assert_eq!(updated["packageManager"], "npm@8.6.0");
    }

    #[test]
    fn test_write_engines_formatting() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_package_json(&temp_dir, r#"{"name":"app"}"#);

        write_engines(&path, &open_summary()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let expected = r#"{
  "name": "app",
  "engines": {
    "node": ">=18.0.0",
    "npm": ">=8.6.0"
  },
  "packageManager": "npm@8.6.0"
}
"#;
        assert_eq!(content, expected);
    }

    #[test]
    fn test_write_engines_preserves_key_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_package_json(
            &temp_dir,
            r#"{
  "name": "test-package",
  "engines": { "node": ">=12", "yarn": ">=1.22.0" },
  "zeta": 1,
  "alpha": 2
}"#,
        );

        write_engines(&path, &bounded_summary()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let name_pos = content.find("\"name\"").unwrap();
        let engines_pos = content.find("\"engines\"").unwrap();
        let zeta_pos = content.find("\"zeta\"").unwrap();
        let alpha_pos = content.find("\"alpha\"").unwrap();
        assert!(name_pos < engines_pos);
        assert!(engines_pos < zeta_pos);
        assert!(zeta_pos < alpha_pos, "zeta should stay before alpha");
        assert!(content.contains("\"yarn\": \">=1.22.0\""));
        assert!(content.ends_with("}\n"));
        assert!(!content.ends_with("\n\n"));
    }

    #[test]
    fn test_apply_summary_replaces_non_object_engines() {
        let mut manifest = Map::new();
        manifest.insert("engines".to_string(), Value::String("node 14".to_string()));

        apply_summary(&mut manifest, &bounded_summary());

        assert_eq!(manifest["engines"]["node"], ">=16.0.0,<=18.0.0");
    }

    #[test]
    fn test_apply_empty_summary_only_creates_engines() {
        let mut manifest = Map::new();
        manifest.insert("name".to_string(), Value::String("app".to_string()));

        apply_summary(&mut manifest, &Summary::empty());

        assert_eq!(manifest["engines"], Value::Object(Map::new()));
        assert!(!manifest.contains_key("packageManager"));
    }

    #[test]
    fn test_update_manifest_returns_false_on_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_package_json(&temp_dir, "{ invalid json }");

        assert!(!update_manifest(&path, &bounded_summary()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ invalid json }");
    }

    #[test]
    fn test_update_manifest_returns_false_on_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");

        assert!(!update_manifest(&path, &bounded_summary()));
        assert!(!path.exists());
    }

    #[test]
    fn test_update_manifest_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_package_json(&temp_dir, r#"{"name": "app"}"#);

        assert!(update_manifest(&path, &bounded_summary()));
    }

    #[test]
    fn test_read_manifest_not_found() {
        let result = read_manifest(Path::new("/nonexistent/path/file.json"));
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }

    #[test]
    fn test_write_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let content = r#"{"name": "test"}"#;

        write_manifest(&path, content).unwrap();

        let result = fs::read_to_string(&path).unwrap();
        assert_eq!(result, content);
    }
}
