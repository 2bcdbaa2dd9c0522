//! JSON output formatter for machine processing

use crate::domain::Summary;
use crate::output::OutputFormatter;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &Summary, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(summary).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Ceiling, Floor, NodeCeiling, NpmCeiling, SummarySource};
    use semver::Version;
    use serde_json::Value;

    fn render(summary: &Summary) -> Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(summary, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_json_open_summary() {
        let summary = Summary {
            lowest: Floor {
                node: Some(Version::new(18, 0, 0)),
                npm: Some(Version::new(8, 6, 0)),
            },
            highest: Ceiling {
                node: Some(NodeCeiling::Unlimited),
                npm: Some(NpmCeiling::LatestCompatible),
            },
            source: SummarySource::Dependencies,
        };

        let json = render(&summary);
        assert_eq!(json["lowest"]["node"], "18.0.0");
        assert_eq!(json["lowest"]["npm"], "8.6.0");
        assert_eq!(json["highest"]["node"], "unlimited");
        assert_eq!(json["highest"]["npm"], "latest compatible");
        assert_eq!(json["source"], "dependencies");
    }

    #[test]
    fn test_json_empty_summary() {
        let json = render(&Summary::empty());
        assert_eq!(json["lowest"]["node"], Value::Null);
        assert_eq!(json["highest"]["npm"], Value::Null);
        assert_eq!(json["source"], "none");
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let mut output = Vec::new();
        JsonFormatter::new()
            .format(&Summary::empty(), &mut output)
            .unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("{\n  \"lowest\""));
        assert!(text.ends_with("}\n"));
    }
}
