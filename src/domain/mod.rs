//! Core domain models for verlimit
//!
//! This module contains the fundamental types used throughout the application:
//! - Dotted numeric versions and their comparison
//! - Version range expressions and their bounds
//! - Raw constraints tagged by origin
//! - The reconciled summary

mod constraint;
mod summary;
mod version;
mod version_range;

pub use constraint::{ConstraintSource, RawConstraint};
pub use summary::{Ceiling, Floor, NodeCeiling, NpmCeiling, Summary, SummarySource};
pub use version::{compare_versions, normalize_version, pad_version, previous_version};
pub use version_range::{lower_bound, upper_bound, Clause, Operator, RangeKind, VersionRange};
