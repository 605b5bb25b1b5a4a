//! CLI for linting a folder of Jupyter notebooks.
//!
//! # Usage
//!
//! ```bash
//! nb-lint notebooks/
//! nb-lint notebooks/ --format json
//! nb-lint notebooks/ -vv
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use nbl_cli::{
    exit_status, lint_folder, render_report, DiscoveryConfig, LintError, OutputFormat, EXIT_FAULT,
};
use tracing::Level;

/// A linter for Jupyter notebooks.
#[derive(Debug, Parser)]
#[command(name = "nb-lint", version, about)]
struct Args {
    /// The folder containing Jupyter notebooks
    folder: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn log_level(args: &Args) -> Level {
    if args.quiet {
        return Level::ERROR;
    }
    match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(&args))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let report = match lint_folder(&args.folder, &DiscoveryConfig::default()) {
        Ok(report) => report,
        Err(e @ LintError::FolderNotFound(_)) => {
            println!("{}", e);
            return ExitCode::from(EXIT_FAULT);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_FAULT);
        }
    };

    match render_report(&report, args.format) {
        Ok(rendered) => print!("{}", rendered),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_FAULT);
        }
    }

    ExitCode::from(exit_status(&report))
}
