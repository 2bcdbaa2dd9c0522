//! package-lock.json reader
//!
//! Supports both layouts npm has written:
//! - `packages` keyed by install path (lockfileVersion 2 and 3)
//! - `dependencies` keyed by package name (lockfileVersion 1)

use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

/// Which layout a lockfile uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockfileFormat {
    /// `packages` map keyed by path, npm v7+
    Packages,
    /// `dependencies` map keyed by name, npm v6 and below
    Dependencies,
}

impl fmt::Display for LockfileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockfileFormat::Packages => f.write_str("packages"),
            LockfileFormat::Dependencies => f.write_str("dependencies"),
        }
    }
}

/// A package pinned by the lockfile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedPackage {
    pub name: String,
    pub version: String,
}

/// The package entries of a lockfile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lockfile {
    /// Layout found, if any
    pub format: Option<LockfileFormat>,
    /// Entries with a version, in file order
    pub packages: Vec<LockedPackage>,
}

impl Lockfile {
    /// Parse package-lock.json content
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

        if let Some(packages) = json.get("packages").and_then(Value::as_object) {
            return Ok(Self {
                format: Some(LockfileFormat::Packages),
                packages: locked_packages(packages, package_name_from_path),
            });
        }

        if let Some(dependencies) = json.get("dependencies").and_then(Value::as_object) {
            return Ok(Self {
                format: Some(LockfileFormat::Dependencies),
                packages: locked_packages(dependencies, |name| Some(name)),
            });
        }

        Ok(Self::default())
    }

    /// Read and parse a package-lock.json file
    pub fn read(path: &Path) -> Result<Self, ManifestError> {
        let content = super::read_manifest(path)?;
        Self::parse(&content, path)
    }
}

/// Last segment of an install path; the root entry (`""`) has no name
fn package_name_from_path(path: &str) -> Option<&str> {
    if path.is_empty() {
        return None;
    }
    path.rsplit('/').next()
}

fn locked_packages<'a>(
    entries: &'a Map<String, Value>,
    name_of: impl Fn(&'a str) -> Option<&'a str>,
) -> Vec<LockedPackage> {
    entries
        .iter()
        .filter_map(|(key, info)| {
            let name = name_of(key.as_str())?;
            let version = info.get("version").and_then(Value::as_str)?;
            if version.is_empty() {
                return None;
            }
            Some(LockedPackage {
                name: name.to_string(),
                version: version.to_string(),
            })
        })
        .collect()
}
