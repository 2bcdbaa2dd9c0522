//! Node.js to npm correspondence
//!
//! Maps the first release of a Node.js line to the npm version bundled with it.
//! Source: https://nodejs.org/en/download/releases/

use crate::error::ConfigError;
use semver::Version;

const BUILTIN: &[((u64, u64, u64), (u64, u64, u64))] = &[
    ((4, 0, 0), (2, 14, 2)),
    ((6, 0, 0), (3, 8, 6)),
    ((8, 0, 0), (5, 0, 0)),
    ((10, 0, 0), (6, 0, 0)),
    ((12, 0, 0), (6, 9, 0)),
    ((14, 0, 0), (6, 14, 4)),
    ((16, 0, 0), (7, 10, 0)),
    ((18, 0, 0), (8, 6, 0)),
    ((20, 0, 0), (9, 6, 4)),
    ((21, 0, 0), (10, 2, 0)),
    ((22, 0, 0), (10, 4, 0)),
];

/// Ordered Node.js → npm table, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeNpmTable {
    /// Sorted by Node.js version, no duplicate keys
    entries: Vec<(Version, Version)>,
}

impl NodeNpmTable {
    /// Build a table from arbitrary entries.
    ///
    /// Later entries replace earlier ones with the same Node.js version.
    pub fn new(entries: impl IntoIterator<Item = (Version, Version)>) -> Result<Self, ConfigError> {
        let mut table: Vec<(Version, Version)> = Vec::new();
        for (node, npm) in entries {
            match table.iter_mut().find(|(existing, _)| *existing == node) {
                Some(entry) => entry.1 = npm,
                None => table.push((node, npm)),
            }
        }

        if table.is_empty() {
            return Err(ConfigError::EmptyCorrespondence);
        }
        table.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(Self { entries: table })
    }

    /// The table shipped with verlimit
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|&((a, b, c), (x, y, z))| (Version::new(a, b, c), Version::new(x, y, z)))
            .collect();
        Self { entries }
    }

    /// npm version for a Node.js version.
    ///
    /// Picks the first Node.js key at or above `node`; versions past the end
    /// of the table get the npm version of the newest key.
    pub fn npm_for(&self, node: &Version) -> &Version {
        match self.entries.iter().find(|(key, _)| node <= key) {
            Some((_, npm)) => npm,
            // Non-empty by construction
            None => &self.entries[self.entries.len() - 1].1,
        }
    }

    /// Entries in ascending Node.js order
    pub fn entries(&self) -> &[(Version, Version)] {
        &self.entries
    }

    /// A new table with `entries` added over this one's
    pub fn merged(
        &self,
        entries: impl IntoIterator<Item = (Version, Version)>,
    ) -> Result<Self, ConfigError> {
        Self::new(self.entries.iter().cloned().chain(entries))
    }
}

impl Default for NodeNpmTable {
    fn default() -> Self {
        Self::builtin()
    }
}
