//! CLI argument parsing module for verlimit

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Infer the Node.js and npm version range a project supports
#[derive(Parser, Debug, Clone)]
#[command(
    name = "verlimit",
    version,
    about = "Analyze Node.js and npm version constraints of a project"
)]
pub struct CliArgs {
    /// Path to the project to analyze
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    // Output options
    /// Output results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Only print the version numbers without explanations
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose diagnostics
    #[arg(long)]
    pub verbose: bool,

    // Update options
    /// Update package.json without asking
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// TOML file with additional version tables
    #[arg(long, value_name = "FILE")]
    pub tables: Option<PathBuf>,
}

impl CliArgs {
    /// Returns true if progress messages should be suppressed
    pub fn is_quiet(&self) -> bool {
        self.json || self.quiet
    }

    /// Check that the project path can be analyzed
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.exists() && !self.path.is_dir() {
            return Err(ConfigError::invalid_path(&self.path, "not a directory"));
        }
        Ok(())
    }
}
