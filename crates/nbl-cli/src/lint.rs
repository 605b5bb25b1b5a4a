//! Load, check and report.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use nbl_core::{Notebook, NotebookError};
use nbl_quality::{CheckReport, NotebookChecker};
use tracing::{debug, info, warn};

use crate::config::{DiscoveryConfig, OutputFormat};
use crate::discovery::discover_notebooks;
use crate::{LintError, EXIT_CLEAN, EXIT_DIAGNOSTICS, EXIT_FAULT};

/// Read and parse one notebook file.
pub fn load_notebook(path: &Path) -> Result<Notebook, NotebookError> {
    let file = File::open(path)?;
    Notebook::from_reader(BufReader::new(file))
}

/// Check every notebook under `root`.
///
/// A notebook that fails to load or check is recorded as a fault and the
/// remaining notebooks are still checked.
pub fn lint_folder(root: &Path, config: &DiscoveryConfig) -> Result<CheckReport, LintError> {
    let notebooks = discover_notebooks(root, config)?;
    info!("Found {} notebooks", notebooks.len());

    let checker = NotebookChecker::new();
    let mut report = CheckReport::new();

    for path in &notebooks {
        let filename = path.display().to_string();
        let notebook = match load_notebook(path) {
            Ok(notebook) => notebook,
            Err(e) => {
                warn!(file = %filename, error = %e, "failed to load notebook");
                report.record_fault(filename, &e);
                continue;
            }
        };

        let result = checker.check(&notebook, &filename);
        match &result {
            Ok(diagnostics) => debug!(file = %filename, count = diagnostics.len(), "checked"),
            Err(e) => warn!(file = %filename, error = %e, "malformed notebook"),
        }
        report.record(filename, result);
    }

    Ok(report)
}

/// Render the report in the requested format.
pub fn render_report(report: &CheckReport, format: OutputFormat) -> Result<String, LintError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Found {} notebooks\n{}",
            report.documents_count(),
            report.format_report()
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
    }
}

/// Process exit status for a finished run. Faults win over diagnostics.
pub fn exit_status(report: &CheckReport) -> u8 {
    if report.faults_count() > 0 {
        EXIT_FAULT
    } else if report.diagnostics_count() > 0 {
        EXIT_DIAGNOSTICS
    } else {
        EXIT_CLEAN
    }
}
