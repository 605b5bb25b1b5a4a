//! # nbl-quality
//!
//! Style checks for Jupyter notebooks.
//!
//! Every rule is a pure function of `(notebook, filename)` returning the
//! diagnostics it found. The runner applies all of them in a fixed order and
//! concatenates their output, so reports are reproducible.
//!
//! ### Cell rules
//! - Imports only in the first code cell
//! - At least one cell
//! - First cell is markdown naming the author (`Author: ` / `Authors: `)
//! - Code cells executed once, in order, none empty
//!
//! ### Environment rules
//! - Kernel is `python3`
//! - No spaces in the file name
//!
//! ```
//! use nbl_core::{Cell, Notebook};
//! use nbl_quality::run_checks;
//!
//! let notebook = Notebook::new(vec![Cell::code(["import os"]).with_execution_count(1)])
//!     .with_kernel("python3");
//! let diagnostics = run_checks(&notebook, "analysis.ipynb").unwrap();
//! // Only the author rule fires: the first cell is not markdown.
//! assert_eq!(diagnostics.len(), 1);
//! ```

pub mod style;

pub use style::{
    run_checks, CellsChecker, CheckReport, DocumentOutcome, EnvironmentChecker, NotebookChecker,
};
