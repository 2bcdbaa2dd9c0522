//! Minimum Node.js versions of well-known packages
//!
//! A best-effort list: each package maps release thresholds to the Node.js
//! version that release line needs. A package version past the newest
//! threshold is assumed to need at least what that threshold needs.

use crate::domain::normalize_version;
use semver::Version;
use std::collections::BTreeMap;

type Thresholds = &'static [(u64, (u64, u64, u64))];

const BUILTIN: &[(&str, Thresholds)] = &[
    ("react", &[(16, (8, 0, 0)), (17, (12, 0, 0)), (18, (14, 0, 0))]),
    (
        "next",
        &[
            (10, (10, 13, 0)),
            (11, (12, 0, 0)),
            (12, (12, 22, 0)),
            (13, (16, 14, 0)),
            (14, (18, 17, 0)),
        ],
    ),
    ("express", &[(4, (0, 10, 0)), (5, (12, 0, 0))]),
    (
        "commander",
        &[
            (10, (14, 0, 0)),
            (11, (16, 0, 0)),
            (12, (16, 0, 0)),
            (13, (16, 0, 0)),
            (14, (18, 0, 0)),
        ],
    ),
    ("typescript", &[(4, (10, 0, 0)), (5, (14, 17, 0))]),
    ("eslint", &[(8, (12, 22, 0)), (9, (18, 18, 0))]),
    ("webpack", &[(5, (10, 13, 0))]),
    ("node-fetch", &[(3, (14, 0, 0))]),
    ("axios", &[(1, (14, 0, 0))]),
];

/// Package name → (package version threshold → Node.js minimum)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementTable {
    packages: BTreeMap<String, BTreeMap<Version, Version>>,
}

impl RequirementTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with verlimit
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (name, thresholds) in BUILTIN {
            for &(major, (a, b, c)) in thresholds.iter() {
                table.insert(*name, Version::new(major, 0, 0), Version::new(a, b, c));
            }
        }
        table
    }

    /// Add or replace one rule
    pub fn insert(&mut self, package: impl Into<String>, threshold: Version, node: Version) {
        self.packages
            .entry(package.into())
            .or_default()
            .insert(threshold, node);
    }

    /// Returns true if the package has any rule
    pub fn knows(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    /// Minimum Node.js version for a package at the given version or range.
    ///
    /// Uses the rule with the highest threshold at or below the package
    /// version. Unknown packages, versions without digits and versions below
    /// every threshold yield `None`.
    pub fn node_requirement_for(&self, package: &str, package_version: &str) -> Option<&Version> {
        let thresholds = self.packages.get(package)?;
        let version = normalize_version(package_version)?;
        thresholds
            .range(..=version)
            .next_back()
            .map(|(_, node)| node)
    }
}
