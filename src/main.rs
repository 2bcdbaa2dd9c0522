//! verlimit - Node.js and npm version constraint analyzer
//!
//! Reads package.json and package-lock.json, infers the range of Node.js and
//! npm versions the project supports and optionally records it in the
//! manifest's `engines` and `packageManager` fields.

use clap::Parser;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::debug;
use verlimit::cli::CliArgs;
use verlimit::collector::Collector;
use verlimit::config::load_tables;
use verlimit::domain::Summary;
use verlimit::logging;
use verlimit::manifest::{project_files, update_manifest};
use verlimit::output::{create_formatter, OutputConfig, TextFormatter};
use verlimit::prompt::ask_confirmation;
use verlimit::reconcile::reconcile;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.verbose, args.is_quiet());

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    args.validate()?;
    debug!(path = %args.path.display(), tables = ?args.tables, "starting analysis");

    let tables = load_tables(args.tables.as_deref())?;
    let collection = Collector::new(&tables.requirements, args.is_quiet()).collect(&args.path)?;
    let summary = reconcile(&collection.constraints, &tables.node_npm);
    debug!(
        constraints = collection.constraints.len(),
        warnings = collection.warnings.len(),
        source = %summary.source,
        "reconciled constraints"
    );

    let mut output_config = OutputConfig::from_cli(args.json, args.quiet);
    output_config.color = io::stdout().is_terminal();
    let interactive = output_config.format.is_interactive();
    let color = output_config.color;
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&summary, &mut stdout)?;

    if interactive {
        offer_update(&args, &summary, color, &mut stdout)?;
    }
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}

/// Preview the engine fields, confirm and write them to package.json
fn offer_update(
    args: &CliArgs,
    summary: &Summary,
    color: bool,
    stdout: &mut impl Write,
) -> anyhow::Result<()> {
    let files = project_files(&args.path);
    if summary.lowest.node.is_none() || summary.lowest.npm.is_none() || !files.has_manifest() {
        return Ok(());
    }

    TextFormatter::with_color(color).format_update_preview(summary, stdout)?;

    let proceed = if args.yes {
        true
    } else {
        ask_confirmation(&mut io::stdin().lock(), stdout, "\nProceed? (y/N): ")?
    };

    if !proceed {
        writeln!(stdout, "\nNo changes made to package.json.")?;
    } else if update_manifest(&files.manifest, summary) {
        let message = "Successfully updated package.json!";
        if color {
            writeln!(stdout, "\n{}", message.green())?;
        } else {
            writeln!(stdout, "\n{}", message)?;
        }
    } else {
        let message = "Failed to update package.json. Please check the file permissions.";
        if color {
            writeln!(stdout, "\n{}", message.red())?;
        } else {
            writeln!(stdout, "\n{}", message)?;
        }
    }

    Ok(())
}
