//! Dotted numeric versions
//!
//! Versions are always three numeric components. Anything shorter is padded
//! with zeros, pre-release and build suffixes are dropped.

use regex::Regex;
use semver::Version;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// First numeric literal with up to three dotted components
static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+){0,2}").unwrap());

/// Patch/minor value used when borrowing across components
const BORROW_FILL: u64 = 99;

/// Compare two dotted version strings component by component.
///
/// Only the first three components take part; missing ones count as zero,
/// and so do components that are not numbers.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    loose_version(a).cmp(&loose_version(b))
}

/// Build a version from a dotted string without validating it
fn loose_version(s: &str) -> Version {
    let mut parts = s.split('.').map(parse_component);
    let major = parts.next().unwrap_or(0);
    let minor = parts.next().unwrap_or(0);
    let patch = parts.next().unwrap_or(0);
    Version::new(major, minor, patch)
}

fn parse_component(part: &str) -> u64 {
    let part = part.trim();
    if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
        // Digits only, so the one possible failure is overflow
        part.parse().unwrap_or(u64::MAX)
    } else {
        0
    }
}

/// Build a version from a numeric literal such as `14`, `16.14` or `01.2.3`
pub fn pad_version(literal: &str) -> Version {
    loose_version(literal)
}

/// Extract the first numeric literal in `text` and pad it to three components.
///
/// Returns `None` when `text` contains no digits at all.
pub fn normalize_version(text: &str) -> Option<Version> {
    NUMERIC_RE.find(text).map(|m| pad_version(m.as_str()))
}

/// The greatest version strictly below `version`, one patch unit down.
///
/// Borrowing fills the lower components with 99, and `0.0.0` stays put.
pub fn previous_version(version: &Version) -> Version {
    let (major, minor, patch) = (version.major, version.minor, version.patch);
    if patch > 0 {
        Version::new(major, minor, patch - 1)
    } else if minor > 0 {
        Version::new(major, minor - 1, BORROW_FILL)
    } else if major > 0 {
        Version::new(major - 1, BORROW_FILL, BORROW_FILL)
    } else {
        Version::new(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_compare_missing_components_are_zero() {
        assert_eq!(compare_versions("1", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.0", "1.1.0"), Ordering::Less);
    }

    #[test]
    fn test_compare_is_numeric_not_lexical() {
        assert_eq!(compare_versions("10.0.0", "9.0.0"), Ordering::Greater);
        assert_eq!(compare_versions("1.10.0", "1.9.9"), Ordering::Greater);
        assert_eq!(compare_versions("1.0.10", "1.0.2"), Ordering::Greater);
    }

    #[test]
    fn test_compare_antisymmetric_and_reflexive() {
        let samples = ["0", "1", "1.2", "1.2.3", "14.17.0", "22.0.0", "3.0.1"];
        for a in samples {
            assert_eq!(compare_versions(a, a), Ordering::Equal);
            for b in samples {
                assert_eq!(compare_versions(a, b), compare_versions(b, a).reverse());
            }
        }
    }

    #[test]
    fn test_compare_transitive() {
        assert_eq!(compare_versions("1.0.0", "1.2.0"), Ordering::Less);
        assert_eq!(compare_versions("1.2.0", "2.0.0"), Ordering::Less);
        assert_eq!(compare_versions("1.0.0", "2.0.0"), Ordering::Less);
    }

    #[test]
    fn test_compare_ignores_fourth_component() {
        assert_eq!(compare_versions("1.2.3.4", "1.2.3"), Ordering::Equal);
    }

    #[test]
    fn test_compare_non_numeric_component_is_zero() {
        assert_eq!(compare_versions("1.x", "1.0.0"), Ordering::Equal);
    }

    #[test]
    fn test_pad_version() {
        assert_eq!(pad_version("14"), v("14.0.0"));
        assert_eq!(pad_version("16.14"), v("16.14.0"));
        assert_eq!(pad_version("01.0"), v("1.0.0"));
    }

    #[test]
    fn test_pad_version_saturates_huge_components() {
        assert_eq!(pad_version("99999999999999999999999").major, u64::MAX);
    }

    #[test]
    fn test_normalize_embedded_literal() {
        assert_eq!(normalize_version("^14.0.0"), Some(v("14.0.0")));
        assert_eq!(normalize_version(">= 16"), Some(v("16.0.0")));
        assert_eq!(normalize_version("v18.2"), Some(v("18.2.0")));
        assert_eq!(normalize_version("1.2.3-beta.1"), Some(v("1.2.3")));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_version("18.17.1").unwrap();
        let twice = normalize_version(&once.to_string()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_without_digits() {
        for input in ["invalid", "", "@@#$%", "abc.def.ghi", "v.x.x"] {
            assert_eq!(normalize_version(input), None, "input: {input:?}");
        }
    }

    #[test]
    fn test_normalize_ignores_non_ascii_digits() {
        assert_eq!(normalize_version("\u{661}\u{668}"), None);
        assert_eq!(normalize_version("\u{ff11}\u{ff18}.0"), None);
        assert_eq!(normalize_version("\u{661}\u{668} or 16"), Some(v("16.0.0")));
    }

    #[test]
    fn test_previous_version_borrow() {
        assert_eq!(previous_version(&v("19.5.3")), v("19.5.2"));
        assert_eq!(previous_version(&v("14.1.0")), v("14.0.99"));
        assert_eq!(previous_version(&v("19.0.0")), v("18.99.99"));
        assert_eq!(previous_version(&v("1.0.0")), v("0.99.99"));
    }

    #[test]
    fn test_previous_version_floor() {
        let floor = v("0.0.0");
        assert_eq!(previous_version(&floor), floor);
        assert_eq!(previous_version(&previous_version(&floor)), floor);
    }
}
