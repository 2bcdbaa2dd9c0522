//! Quiet output: bare version pairs for shell scripts

use crate::domain::{NodeCeiling, Summary};
use crate::output::OutputFormatter;
use std::io::Write;

/// Formatter printing `node:<v>|npm:<v>` lines
#[derive(Debug, Clone, Copy, Default)]
pub struct QuietFormatter;

impl QuietFormatter {
    /// Create a new quiet formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for QuietFormatter {
    fn format(&self, summary: &Summary, writer: &mut dyn Write) -> std::io::Result<()> {
        if let Some(node) = &summary.lowest.node {
            let npm = summary
                .lowest
                .npm
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            writeln!(writer, "node:{}|npm:{}", node, npm)?;
        }

        if let Some(node) = &summary.highest.node {
            let node = match node {
                NodeCeiling::Unlimited => "latest".to_string(),
                NodeCeiling::Version(version) => version.to_string(),
            };
            let npm = summary
                .highest
                .npm
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            writeln!(writer, "node:{}|npm:{}", node, npm)?;
        }

        Ok(())
    }
}
