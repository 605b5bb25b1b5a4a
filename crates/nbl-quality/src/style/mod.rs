//! Notebook style checker.
//!
//! Runs the fixed rule battery over one notebook at a time.

mod cells;
mod environment;

use std::fmt;

use nbl_core::{CheckResult, Diagnostic, Notebook};
use serde::Serialize;

pub use cells::CellsChecker;
pub use environment::EnvironmentChecker;

/// Complete notebook checker.
pub struct NotebookChecker {
    cells: CellsChecker,
    environment: EnvironmentChecker,
}

impl NotebookChecker {
    /// Create a new checker.
    pub fn new() -> Self {
        Self {
            cells: CellsChecker::new(),
            environment: EnvironmentChecker::new(),
        }
    }

    /// Check a notebook against every rule.
    ///
    /// Rules run in a fixed order; each rule reports in cell order. A
    /// structural fault aborts the whole document.
    pub fn check(&self, notebook: &Notebook, filename: &str) -> CheckResult<Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();

        diagnostics.extend(self.cells.check_imports_in_first_code_cell(notebook, filename));
        diagnostics.extend(self.cells.check_at_least_one_cell(notebook, filename));
        diagnostics.extend(self.cells.check_first_cell_contains_author(notebook, filename));
        diagnostics.extend(self.environment.check_python3_kernel(notebook, filename)?);
        diagnostics.extend(self.environment.check_no_spaces_in_filename(filename));
        diagnostics.extend(self.cells.check_clean_execution(notebook, filename));

        Ok(diagnostics)
    }
}

impl Default for NotebookChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a notebook with the default rule set.
pub fn run_checks(notebook: &Notebook, filename: &str) -> CheckResult<Vec<Diagnostic>> {
    NotebookChecker::new().check(notebook, filename)
}

/// Outcome of checking one document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    pub filename: String,
    pub diagnostics: Vec<Diagnostic>,
    /// Set when the document could not be checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

/// Aggregated results over many documents.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub documents: Vec<DocumentOutcome>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of [`NotebookChecker::check`] for one document.
    pub fn record(&mut self, filename: impl Into<String>, result: CheckResult<Vec<Diagnostic>>) {
        match result {
            Ok(diagnostics) => self.documents.push(DocumentOutcome {
                filename: filename.into(),
                diagnostics,
                fault: None,
            }),
            Err(err) => self.record_fault(filename, &err),
        }
    }

    /// Record a document that could not be loaded or checked.
    pub fn record_fault(&mut self, filename: impl Into<String>, fault: &dyn fmt::Display) {
        self.documents.push(DocumentOutcome {
            filename: filename.into(),
            diagnostics: Vec::new(),
            fault: Some(fault.to_string()),
        });
    }

    pub fn documents_count(&self) -> usize {
        self.documents.len()
    }

    pub fn diagnostics_count(&self) -> usize {
        self.documents.iter().map(|d| d.diagnostics.len()).sum()
    }

    pub fn faults_count(&self) -> usize {
        self.documents.iter().filter(|d| d.fault.is_some()).count()
    }

    /// No diagnostics and no faults.
    pub fn is_clean(&self) -> bool {
        self.diagnostics_count() == 0 && self.faults_count() == 0
    }

    /// Format as report.
    pub fn format_report(&self) -> String {
        let mut report = String::new();

        report.push_str("Notebook Style Check Results\n");
        report.push_str("============================\n\n");

        for document in &self.documents {
            for diagnostic in &document.diagnostics {
                report.push_str(&diagnostic.to_string());
                report.push('\n');
            }
            if let Some(ref fault) = document.fault {
                report.push_str(&format!("[FAULT] {}: {}\n", document.filename, fault));
            }
        }

        report.push_str(&format!(
            "\nSummary: {} notebooks, {} diagnostics, {} faults\n",
            self.documents_count(),
            self.diagnostics_count(),
            self.faults_count()
        ));

        if self.is_clean() {
            report.push_str("All good!\n");
        }

        report
    }
}
