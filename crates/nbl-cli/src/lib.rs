//! # nbl-cli
//!
//! Driver for the notebook style checker: finds notebooks under a folder,
//! checks each one and renders the aggregated report.
//!
//! # Usage
//!
//! ```bash
//! # Lint every notebook under ./notebooks
//! cargo run -p nbl-cli --bin nb-lint -- notebooks
//!
//! # Machine-readable output
//! cargo run -p nbl-cli --bin nb-lint -- notebooks --format json
//! ```
//!
//! Exit status: `0` when clean, `2` when any diagnostic was reported, `1` when
//! the folder is missing or a notebook could not be checked.

pub mod config;
pub mod discovery;
pub mod lint;

pub use config::{DiscoveryConfig, OutputFormat};
pub use discovery::discover_notebooks;
pub use lint::{exit_status, lint_folder, load_notebook, render_report};

use std::path::PathBuf;

/// Nothing to report.
pub const EXIT_CLEAN: u8 = 0;
/// Missing folder, or a notebook that could not be loaded or checked.
pub const EXIT_FAULT: u8 = 1;
/// At least one style diagnostic.
pub const EXIT_DIAGNOSTICS: u8 = 2;

/// Driver errors.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("{} does not exist!", .0.display())]
    FolderNotFound(PathBuf),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Notebook error: {0}")]
    Notebook(#[from] nbl_core::NotebookError),

    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}
