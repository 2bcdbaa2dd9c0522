//! Reconciled version summary
//!
//! The single result of an analysis run: the supported Node.js/npm floor, the
//! ceiling (or a sentinel when there is none) and which kind of constraint
//! decided the floor.

use semver::Version;
use serde::{Serialize, Serializer};
use std::fmt;

/// Which kind of constraint decided the Node.js floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    Engines,
    Dependencies,
    None,
}

impl SummarySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummarySource::Engines => "engines",
            SummarySource::Dependencies => "dependencies",
            SummarySource::None => "none",
        }
    }
}

impl fmt::Display for SummarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest Node.js version, or `"unlimited"` when nothing caps it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeCeiling {
    Version(Version),
    Unlimited,
}

impl NodeCeiling {
    pub const UNLIMITED: &'static str = "unlimited";

    /// The concrete version, if there is one
    pub fn version(&self) -> Option<&Version> {
        match self {
            NodeCeiling::Version(v) => Some(v),
            NodeCeiling::Unlimited => None,
        }
    }
}

impl fmt::Display for NodeCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeCeiling::Version(v) => write!(f, "{}", v),
            NodeCeiling::Unlimited => f.write_str(Self::UNLIMITED),
        }
    }
}

impl Serialize for NodeCeiling {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Highest npm version, or `"latest compatible"` when nothing caps it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NpmCeiling {
    Version(Version),
    LatestCompatible,
}

impl NpmCeiling {
    pub const LATEST_COMPATIBLE: &'static str = "latest compatible";

    /// The concrete version, if there is one
    pub fn version(&self) -> Option<&Version> {
        match self {
            NpmCeiling::Version(v) => Some(v),
            NpmCeiling::LatestCompatible => None,
        }
    }
}

impl fmt::Display for NpmCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NpmCeiling::Version(v) => write!(f, "{}", v),
            NpmCeiling::LatestCompatible => f.write_str(Self::LATEST_COMPATIBLE),
        }
    }
}

impl Serialize for NpmCeiling {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Lowest supported versions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Floor {
    pub node: Option<Version>,
    pub npm: Option<Version>,
}

/// Highest compatible versions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ceiling {
    pub node: Option<NodeCeiling>,
    pub npm: Option<NpmCeiling>,
}

/// Result of reconciling every constraint of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub lowest: Floor,
    pub highest: Ceiling,
    pub source: SummarySource,
}

impl Summary {
    /// The summary of a project without any usable constraint
    pub fn empty() -> Self {
        Self {
            lowest: Floor::default(),
            highest: Ceiling::default(),
            source: SummarySource::None,
        }
    }

    /// Returns true if no Node.js floor was found
    pub fn is_empty(&self) -> bool {
        self.lowest.node.is_none()
    }

    /// `engines.node` value for this summary, e.g. `>=16.0.0,<=18.0.0`
    pub fn node_range(&self) -> Option<String> {
        let lowest = self.lowest.node.as_ref()?;
        let highest = self.highest.node.as_ref().and_then(NodeCeiling::version);
        Some(format_range(lowest, highest))
    }

    /// `engines.npm` value for this summary, e.g. `>=8.0.0,<=9.0.0`
    pub fn npm_range(&self) -> Option<String> {
        let lowest = self.lowest.npm.as_ref()?;
        let highest = self.highest.npm.as_ref().and_then(NpmCeiling::version);
        Some(format_range(lowest, highest))
    }

    /// `packageManager` value for this summary, e.g. `npm@8.0.0`
    pub fn package_manager(&self) -> Option<String> {
        self.lowest.npm.as_ref().map(|npm| format!("npm@{}", npm))
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::empty()
    }
}

fn format_range(lowest: &Version, highest: Option<&Version>) -> String {
    match highest {
        Some(highest) => format!(">={},<={}", lowest, highest),
        None => format!(">={}", lowest),
    }
}
