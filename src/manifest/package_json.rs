//! package.json reader for version analysis
//!
//! Extracts:
//! - name
//! - engines.node / engines.npm
//! - packageManager
//! - dependencies
//! - devDependencies

use crate::error::ManifestError;
use regex::Regex;
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::LazyLock;

static PACKAGE_MANAGER_NPM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^npm@([0-9]+\.[0-9]+\.[0-9]+)").unwrap());

/// Name used when the manifest does not declare one
pub const UNKNOWN_NAME: &str = "unknown";

/// The parts of a package.json that constrain Node.js and npm versions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageJson {
    /// Package name
    pub name: String,
    /// `engines.node`
    pub node_engine: Option<String>,
    /// `engines.npm`
    pub npm_engine: Option<String>,
    /// `packageManager`, e.g. `npm@9.8.1`
    pub package_manager: Option<String>,
    /// `dependencies` in declaration order
    pub dependencies: Vec<(String, String)>,
    /// `devDependencies` in declaration order
    pub dev_dependencies: Vec<(String, String)>,
}

impl PackageJson {
    /// Parse package.json content
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;
        let root = json
            .as_object()
            .ok_or_else(|| ManifestError::not_an_object(path))?;

        let engines = root.get("engines").and_then(Value::as_object);

        Ok(Self {
            name: non_empty_str(root.get("name"))
                .unwrap_or(UNKNOWN_NAME)
                .to_string(),
            node_engine: engines
                .and_then(|e| non_empty_str(e.get("node")))
                .map(str::to_string),
            npm_engine: engines
                .and_then(|e| non_empty_str(e.get("npm")))
                .map(str::to_string),
            package_manager: non_empty_str(root.get("packageManager")).map(str::to_string),
            dependencies: dependency_entries(root, "dependencies"),
            dev_dependencies: dependency_entries(root, "devDependencies"),
        })
    }

    /// Read and parse a package.json file
    pub fn read(path: &Path) -> Result<Self, ManifestError> {
        let content = super::read_manifest(path)?;
        Self::parse(&content, path)
    }

    /// The npm requirement of this project.
    ///
    /// `engines.npm` when present, otherwise `>=X.Y.Z` taken from an
    /// `npm@X.Y.Z` packageManager value.
    pub fn npm_requirement(&self) -> Option<String> {
        if let Some(npm) = &self.npm_engine {
            return Some(npm.clone());
        }
        let package_manager = self.package_manager.as_deref()?;
        PACKAGE_MANAGER_NPM_RE
            .captures(package_manager)
            .and_then(|caps| caps.get(1))
            .map(|version| format!(">={}", version.as_str()))
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn dependency_entries(root: &Map<String, Value>, key: &str) -> Vec<(String, String)> {
    let Some(deps) = root.get(key).and_then(Value::as_object) else {
        return Vec::new();
    };

    deps.iter()
        .filter_map(|(name, version)| {
            version
                .as_str()
                .map(|version| (name.clone(), version.to_string()))
        })
        .collect()
}
