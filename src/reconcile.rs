//! Reconciling raw constraints into one summary
//!
//! Every minimum must hold, so the highest floor wins; every maximum must
//! hold, so the lowest ceiling wins. Dependency-derived constraints are folded
//! first and `engines` last, so among constraints that tie for the highest
//! floor the `engines` field is credited.

use crate::domain::{
    lower_bound, upper_bound, Ceiling, ConstraintSource, Floor, NodeCeiling, NpmCeiling,
    RawConstraint, Summary, SummarySource,
};
use crate::tables::NodeNpmTable;
use semver::Version;
use std::cmp::Ordering;

/// Running state of the fold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub lowest_node: Option<Version>,
    pub highest_node: Option<Version>,
    pub lowest_npm: Option<Version>,
    pub highest_npm: Option<Version>,
    pub source: SummarySource,
}

impl Default for Reconciliation {
    fn default() -> Self {
        Self {
            lowest_node: None,
            highest_node: None,
            lowest_npm: None,
            highest_npm: None,
            source: SummarySource::None,
        }
    }
}

impl Reconciliation {
    /// Fold one constraint into the state
    pub fn step(mut self, constraint: &RawConstraint) -> Self {
        if let Some(node) = non_empty(&constraint.node_version) {
            if let Some(floor) = lower_bound(node) {
                let ordering = self
                    .lowest_node
                    .as_ref()
                    .map_or(Ordering::Greater, |current| floor.cmp(current));
                // Equal floors move the credit to the later constraint
                if ordering != Ordering::Less {
                    self.source = summary_source(constraint.source);
                }
                if ordering == Ordering::Greater {
                    self.lowest_node = Some(floor);
                }
            }
            self.highest_node = min_ceiling(self.highest_node, upper_bound(node));
        }

        if constraint.source.is_engines() {
            if let Some(npm) = non_empty(&constraint.npm_version) {
                self.lowest_npm = max_floor(self.lowest_npm, lower_bound(npm));
                self.highest_npm = min_ceiling(self.highest_npm, upper_bound(npm));
            }
        }

        self
    }

    /// Turn the final state into a summary, filling gaps from the npm table
    pub fn finish(self, node_npm: &NodeNpmTable) -> Summary {
        let Some(lowest_node) = self.lowest_node else {
            return Summary::empty();
        };

        let lowest_npm = self
            .lowest_npm
            .unwrap_or_else(|| node_npm.npm_for(&lowest_node).clone());

        let highest_npm = match (self.highest_npm, &self.highest_node) {
            (Some(npm), _) => NpmCeiling::Version(npm),
            (None, Some(node)) => NpmCeiling::Version(node_npm.npm_for(node).clone()),
            (None, None) => NpmCeiling::LatestCompatible,
        };

        let highest_node = match self.highest_node {
            Some(node) => NodeCeiling::Version(node),
            None => NodeCeiling::Unlimited,
        };

        Summary {
            lowest: Floor {
                node: Some(lowest_node),
                npm: Some(lowest_npm),
            },
            highest: Ceiling {
                node: Some(highest_node),
                npm: Some(highest_npm),
            },
            source: self.source,
        }
    }
}

/// Reconcile all constraints of a project into a summary
pub fn reconcile(constraints: &[RawConstraint], node_npm: &NodeNpmTable) -> Summary {
    let (engines, dependencies): (Vec<&RawConstraint>, Vec<&RawConstraint>) =
        constraints.iter().partition(|c| c.source.is_engines());

    dependencies
        .into_iter()
        .chain(engines)
        .fold(Reconciliation::default(), Reconciliation::step)
        .finish(node_npm)
}

fn summary_source(source: ConstraintSource) -> SummarySource {
    if source.is_engines() {
        SummarySource::Engines
    } else {
        SummarySource::Dependencies
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn max_floor(current: Option<Version>, candidate: Option<Version>) -> Option<Version> {
    match (current, candidate) {
        (Some(current), Some(candidate)) => Some(current.max(candidate)),
        (current, candidate) => current.or(candidate),
    }
}

fn min_ceiling(current: Option<Version>, candidate: Option<Version>) -> Option<Version> {
    match (current, candidate) {
        (Some(current), Some(candidate)) => Some(current.min(candidate)),
        (current, candidate) => current.or(candidate),
    }
}
