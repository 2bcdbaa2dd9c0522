//! Text output formatter for human-readable display
//!
//! This module provides:
//! - The version constraints summary with colors
//! - A preview of the package.json fields an update would write

use crate::domain::{NodeCeiling, Summary};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn version(&self, text: String) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text
        }
    }

    fn dimmed(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_lowest(&self, summary: &Summary, writer: &mut dyn Write) -> std::io::Result<()> {
        let Some(node) = &summary.lowest.node else {
            return writeln!(
                writer,
                "\n{}",
                self.dimmed("No Node.js version constraints found.")
            );
        };

        let npm = summary
            .lowest
            .npm
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        writeln!(
            writer,
            "\nLowest supported Node.js version: {}",
            self.version(format!("v{}", node))
        )?;
        writeln!(
            writer,
            "Associated npm version: {}",
            self.version(format!("v{}", npm))
        )?;
        writeln!(writer, "Source: {}", summary.source)
    }

    fn format_highest(&self, summary: &Summary, writer: &mut dyn Write) -> std::io::Result<()> {
        let Some(node) = &summary.highest.node else {
            return writeln!(
                writer,
                "\n{}",
                self.dimmed("No upper bound found for Node.js version.")
            );
        };

        let node = match node {
            NodeCeiling::Unlimited => NodeCeiling::UNLIMITED.to_string(),
            NodeCeiling::Version(version) => format!("v{}", version),
        };
        let npm = summary
            .highest
            .npm
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        writeln!(
            writer,
            "\nHighest compatible Node.js version: {}",
            self.version(node)
        )?;
        writeln!(writer, "Associated npm version: {}", self.version(npm))
    }

    /// Write the fields an update of package.json would set.
    ///
    /// Writes nothing when the summary has no Node.js or npm floor.
    pub fn format_update_preview(
        &self,
        summary: &Summary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let (Some(node), Some(npm), Some(package_manager)) = (
            summary.node_range(),
            summary.npm_range(),
            summary.package_manager(),
        ) else {
            return Ok(());
        };

        writeln!(writer, "\n{}", self.heading("=== Update package.json ==="))?;
        writeln!(
            writer,
            "Would you like to update your package.json with these version constraints?"
        )?;
        writeln!(writer, "This will add/update the following:")?;
        writeln!(writer, "  \"engines\": {{")?;
        writeln!(writer, "    \"node\": \"{}\",", node)?;
        writeln!(writer, "    \"npm\": \"{}\"", npm)?;
        writeln!(writer, "  }},")?;
        writeln!(writer, "  \"packageManager\": \"{}\"", package_manager)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &Summary, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "\n{}",
            self.heading("=== Version Constraints Summary ===")
        )?;

        self.format_lowest(summary, writer)?;
        self.format_highest(summary, writer)?;

        writeln!(
            writer,
            "\n{}",
            self.dimmed("Note: This is a best-effort analysis and may not capture all constraints.")
        )?;
        writeln!(
            writer,
            "{}",
            self.dimmed("For precise requirements, review each dependency's documentation.")
        )
    }
}
