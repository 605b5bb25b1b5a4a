//! # nbl-core
//!
//! Document model and diagnostics shared by the nb-lint crates.
//!
//! ## Document model
//!
//! A [`Notebook`] is an ordered list of [`Cell`]s plus metadata, deserialized
//! from the nbformat JSON layout. Missing fields are resolved at this boundary:
//! - missing `cells` or `source` become empty lists
//! - missing `execution_count` means the cell was never run
//! - missing `metadata` / `metadata.kernelspec` stay `None` and are reported
//!   as a [`CheckError`] by the checks that need them
//!
//! ## Diagnostics
//!
//! A [`Diagnostic`] is one reported style violation: the originating filename
//! and a human-readable message. Nothing else.

pub mod diagnostic;
pub mod error;
pub mod notebook;

pub use diagnostic::Diagnostic;
pub use error::{CheckError, CheckResult, NotebookError};
pub use notebook::{Cell, CellType, KernelSpec, Notebook, NotebookMetadata};

/// Kernel name every notebook is expected to declare.
pub const PYTHON3_KERNEL: &str = "python3";
