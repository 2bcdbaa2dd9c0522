//! Table overrides loaded from a TOML file
//!
//! ```toml
//! [node_npm]
//! "24.0.0" = "11.3.0"
//!
//! [packages.react]
//! "19.0.0" = "18.0.0"
//! ```
//!
//! Entries are merged over the built-in tables.

use crate::domain::normalize_version;
use crate::error::ConfigError;
use crate::tables::Tables;
use semver::Version;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Contents of a tables file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TablesConfig {
    /// Node.js version → bundled npm version
    #[serde(default)]
    pub node_npm: BTreeMap<String, String>,
    /// Package name → (package version → minimum Node.js version)
    #[serde(default)]
    pub packages: BTreeMap<String, BTreeMap<String, String>>,
}

impl TablesConfig {
    /// Parse a tables file
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::toml_parse_error(path, e.to_string()))
    }

    /// Read and parse a tables file
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
        Self::parse(&content, path)
    }

    /// Merge these entries over `base`
    pub fn apply(&self, mut base: Tables) -> Result<Tables, ConfigError> {
        let node_npm = self
            .node_npm
            .iter()
            .map(|(node, npm)| {
                Ok((
                    parse_version("node_npm", node)?,
                    parse_version("node_npm", npm)?,
                ))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        base.node_npm = base.node_npm.merged(node_npm)?;

        for (package, thresholds) in &self.packages {
            let table = format!("packages.{}", package);
            for (threshold, node) in thresholds {
                base.requirements.insert(
                    package.clone(),
                    parse_version(&table, threshold)?,
                    parse_version(&table, node)?,
                );
            }
        }

        Ok(base)
    }
}

/// Built-in tables, extended by the file at `path` when one is given
pub fn load_tables(path: Option<&Path>) -> Result<Tables, ConfigError> {
    match path {
        Some(path) => TablesConfig::read(path)?.apply(Tables::builtin()),
        None => Ok(Tables::builtin()),
    }
}

fn parse_version(table: &str, value: &str) -> Result<Version, ConfigError> {
    normalize_version(value).ok_or_else(|| ConfigError::invalid_version(table, value))
}
