//! Version range expressions
//!
//! Handles the range syntax found in `engines` and dependency declarations:
//! - Bare: `14`, `16.14`, `1.2.3`
//! - Caret / tilde: `^14.0.0`, `~1.2.3`
//! - Comparison: `>=16.0.0`, `>1.0.0`, `=1.0.0`, `<=18.0.0`, `<19.0.0`
//! - Compound: `>=16.0.0,<=18.0.0`, `>=1.0.0 <2.0.0`
//!
//! Anything else is scanned for its numeric literals, so `v18` or
//! `node@20.1` still produce a bound.

use super::version::{pad_version, previous_version};
use regex::Regex;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// An optional operator directly in front of a numeric literal
static CLAUSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(>=|<=|<|>|\^|~|=)?\s*([0-9]+(?:\.[0-9]+){0,2})").unwrap());

/// Operator of a single comparator clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// No operator (`1.2.3`)
    None,
    /// `^1.2.3`
    Caret,
    /// `~1.2.3`
    Tilde,
    /// `>=1.2.3`
    GreaterOrEqual,
    /// `>1.2.3`
    Greater,
    /// `=1.2.3`
    Equal,
    /// `<=1.2.3`
    LessOrEqual,
    /// `<1.2.3`
    Less,
}

impl Operator {
    fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("^") => Operator::Caret,
            Some("~") => Operator::Tilde,
            Some(">=") => Operator::GreaterOrEqual,
            Some(">") => Operator::Greater,
            Some("=") => Operator::Equal,
            Some("<=") => Operator::LessOrEqual,
            Some("<") => Operator::Less,
            _ => Operator::None,
        }
    }
}

/// The shape of a whole range expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeKind {
    Bare,
    Caret,
    Tilde,
    Gte,
    Gt,
    Eq,
    Lte,
    Lt,
    /// More than one clause
    Compound,
}

impl RangeKind {
    /// Returns false for shapes that can never carry an upper bound
    pub fn may_have_ceiling(&self) -> bool {
        matches!(self, RangeKind::Lte | RangeKind::Lt | RangeKind::Compound)
    }
}

impl From<Operator> for RangeKind {
    fn from(op: Operator) -> Self {
        match op {
            Operator::None => RangeKind::Bare,
            Operator::Caret => RangeKind::Caret,
            Operator::Tilde => RangeKind::Tilde,
            Operator::GreaterOrEqual => RangeKind::Gte,
            Operator::Greater => RangeKind::Gt,
            Operator::Equal => RangeKind::Eq,
            Operator::LessOrEqual => RangeKind::Lte,
            Operator::Less => RangeKind::Lt,
        }
    }
}

/// One `operator version` pair of a range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub op: Operator,
    pub version: Version,
}

/// A parsed range expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    /// The shape of the expression
    pub kind: RangeKind,
    /// The expression as written
    pub raw: String,
    /// Clauses in the order they appear, never empty
    pub clauses: Vec<Clause>,
}

impl VersionRange {
    /// Parse a range expression.
    ///
    /// Returns `None` when the text contains no numeric literal, which callers
    /// treat as "no bound" rather than as an error.
    pub fn parse(raw: &str) -> Option<Self> {
        let clauses: Vec<Clause> = CLAUSE_RE
            .captures_iter(raw)
            .filter_map(|caps| {
                let literal = caps.get(2)?.as_str();
                Some(Clause {
                    op: Operator::from_token(caps.get(1).map(|m| m.as_str())),
                    version: pad_version(literal),
                })
            })
            .collect();

        let kind = match clauses.as_slice() {
            [] => return None,
            [single] => RangeKind::from(single.op),
            _ => RangeKind::Compound,
        };

        Some(Self {
            kind,
            raw: raw.to_string(),
            clauses,
        })
    }

    /// The representative minimum version: the first version mentioned.
    ///
    /// For a pure ceiling such as `<19.0.0` this is the ceiling literal itself.
    pub fn lower_bound(&self) -> Version {
        // parse() never builds a range without clauses
        self.clauses
            .first()
            .map(|clause| clause.version.clone())
            .unwrap_or_else(|| Version::new(0, 0, 0))
    }

    /// The explicit maximum version, if the range has one.
    ///
    /// An inclusive `<=` clause wins over an exclusive `<` clause, which is
    /// turned into the closest version below it.
    pub fn upper_bound(&self) -> Option<Version> {
        if !self.kind.may_have_ceiling() {
            return None;
        }
        let first_with = |op: Operator| self.clauses.iter().find(|clause| clause.op == op);

        if let Some(inclusive) = first_with(Operator::LessOrEqual) {
            return Some(inclusive.version.clone());
        }
        first_with(Operator::Less).map(|exclusive| previous_version(&exclusive.version))
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Minimum version implied by a range expression
pub fn lower_bound(raw: &str) -> Option<Version> {
    VersionRange::parse(raw).map(|range| range.lower_bound())
}

/// Maximum version implied by a range expression
pub fn upper_bound(raw: &str) -> Option<Version> {
    VersionRange::parse(raw).and_then(|range| range.upper_bound())
}
