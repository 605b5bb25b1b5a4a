//! Error types for loading and checking notebooks.

/// Failure to turn serialized bytes into a [`crate::Notebook`].
#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural fault raised while checking a document.
///
/// Style violations are never errors; they are returned as diagnostics.
/// A `CheckError` means the document lacks a field a check cannot run without.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("document is missing required field `{field}`")]
    MissingField { field: &'static str },
}

pub type CheckResult<T> = Result<T, CheckError>;
