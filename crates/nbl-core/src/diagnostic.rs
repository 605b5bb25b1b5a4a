//! Reported style violations.

use std::fmt;

use serde::Serialize;

/// A single style violation found in a notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// File the violation was found in
    pub filename: Option<String>,
    /// Description of the violation
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic attributed to `filename`.
    pub fn new(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filename {
            Some(filename) => write!(f, "{}: {}", filename, self.message),
            None => f.write_str(&self.message),
        }
    }
}
