//! Output formatting for reconciled summaries
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing
//! - Quiet output with one `node:<v>|npm:<v>` line per bound

mod json;
mod quiet;
mod text;

pub use json::JsonFormatter;
pub use quiet::QuietFormatter;
pub use text::TextFormatter;

use crate::domain::Summary;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
    /// Bare version pairs for scripts
    Quiet,
}

impl OutputFormat {
    /// Returns true if this format may be followed by the manifest update prompt
    pub fn is_interactive(&self) -> bool {
        *self == OutputFormat::Text
    }
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json, quiet)
    pub format: OutputFormat,
    /// Whether to use colors (when supported)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: true,
        }
    }

    /// Create configuration from CLI arguments. `--json` takes precedence over `--quiet`.
    pub fn from_cli(json: bool, quiet: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else if quiet {
            OutputFormat::Quiet
        } else {
            OutputFormat::Text
        };

        Self::new(format)
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write a reconciled summary
    fn format(&self, summary: &Summary, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Quiet => Box::new(QuietFormatter::new()),
    }
}
