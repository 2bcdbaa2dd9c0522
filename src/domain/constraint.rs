//! Raw constraints gathered from a project's manifest and lockfile

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a constraint was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintSource {
    /// The manifest's `engines` field
    Engines,
    /// A manifest `dependencies` entry
    Dependency,
    /// A manifest `devDependencies` entry
    DevDependency,
    /// An entry of `package-lock.json`
    Lockfile,
}

impl ConstraintSource {
    /// Returns true for the `engines` field
    pub fn is_engines(&self) -> bool {
        matches!(self, ConstraintSource::Engines)
    }

    /// Returns the display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConstraintSource::Engines => "engines",
            ConstraintSource::Dependency => "dependency",
            ConstraintSource::DevDependency => "devDependency",
            ConstraintSource::Lockfile => "lockfile",
        }
    }
}

impl fmt::Display for ConstraintSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single Node.js/npm requirement and its origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConstraint {
    /// Project name for `engines`, package name otherwise
    pub name: String,
    /// Node.js version range
    pub node_version: Option<String>,
    /// npm version range
    pub npm_version: Option<String>,
    /// Where the constraint came from
    pub source: ConstraintSource,
}

impl RawConstraint {
    /// Creates the constraint declared by a manifest's `engines` field
    pub fn engines(
        name: impl Into<String>,
        node_version: impl Into<String>,
        npm_version: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            node_version: Some(node_version.into()),
            npm_version,
            source: ConstraintSource::Engines,
        }
    }

    /// Creates a Node.js requirement implied by a package
    pub fn package(
        name: impl Into<String>,
        node_version: impl Into<String>,
        source: ConstraintSource,
    ) -> Self {
        Self {
            name: name.into(),
            node_version: Some(node_version.into()),
            npm_version: None,
            source,
        }
    }
}
