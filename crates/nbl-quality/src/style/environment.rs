//! Rules over the notebook's surroundings: its kernel and its file name.

use std::path::Path;

use nbl_core::{CheckResult, Diagnostic, Notebook, PYTHON3_KERNEL};
use serde_json::Value;

/// Environment rule checker.
pub struct EnvironmentChecker;

impl EnvironmentChecker {
    /// Create a new checker.
    pub fn new() -> Self {
        Self
    }

    /// Check that the notebook uses the Python 3 kernel.
    ///
    /// A document without `metadata.kernelspec` is malformed, not merely
    /// unstyled: that is returned as an error instead of a diagnostic.
    pub fn check_python3_kernel(
        &self,
        notebook: &Notebook,
        filename: &str,
    ) -> CheckResult<Vec<Diagnostic>> {
        let kernel = notebook.kernelspec()?.name.as_ref();
        if kernel.and_then(Value::as_str) == Some(PYTHON3_KERNEL) {
            return Ok(Vec::new());
        }
        Ok(vec![Diagnostic::new(
            filename,
            format!(
                "The notebook {} is using kernel {} instead of {}",
                filename,
                kernel_label(kernel),
                PYTHON3_KERNEL
            ),
        )])
    }

    /// Check that the file name uses underscores rather than spaces.
    ///
    /// Only the last path segment is inspected.
    pub fn check_no_spaces_in_filename(&self, filename: &str) -> Vec<Diagnostic> {
        let base_name = Path::new(filename)
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        if base_name.contains(' ') {
            return vec![Diagnostic::new(
                filename,
                format!("Use underscore in filename {}", filename),
            )];
        }
        Vec::new()
    }
}

/// Kernel name as shown in diagnostics: strings verbatim, other values as JSON.
fn kernel_label(kernel: Option<&Value>) -> String {
    match kernel {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Null) | None => "None".to_string(),
        Some(other) => other.to_string(),
    }
}

impl Default for EnvironmentChecker {
    fn default() -> Self {
        Self::new()
    }
}
