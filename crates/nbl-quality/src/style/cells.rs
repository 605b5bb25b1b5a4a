//! Rules over the cell sequence.

use std::sync::LazyLock;

use nbl_core::{Diagnostic, Notebook};
use regex::Regex;

/// Line-prefix import matcher. Continuation lines are not special-cased.
static IMPORT_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:import |from .* import )").unwrap());

const AUTHOR_PREFIXES: [&str; 2] = ["Author: ", "Authors: "];

/// Cell rule checker.
pub struct CellsChecker;

impl CellsChecker {
    /// Create a new checker.
    pub fn new() -> Self {
        Self
    }

    /// Check that imports only appear in the first code cell.
    ///
    /// One diagnostic per offending line. Cells are numbered among the
    /// subsequent code cells: the second code cell is cell 1.
    pub fn check_imports_in_first_code_cell(
        &self,
        notebook: &Notebook,
        filename: &str,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, cell) in notebook.code_cells().skip(1).enumerate() {
            for line in &cell.source {
                if IMPORT_LINE_RE.is_match(line) {
                    diagnostics.push(Diagnostic::new(
                        filename,
                        format!(
                            "Imports should be only in first coding cell, but in file \"{}\", coding cell {}",
                            filename,
                            index + 1
                        ),
                    ));
                }
            }
        }

        diagnostics
    }

    /// Check that the notebook contains at least one cell.
    pub fn check_at_least_one_cell(&self, notebook: &Notebook, filename: &str) -> Vec<Diagnostic> {
        if notebook.cells.is_empty() {
            return vec![Diagnostic::new(
                filename,
                format!("{} has no cells", filename),
            )];
        }
        Vec::new()
    }

    /// Check that the first cell is a markdown cell naming the author.
    ///
    /// An empty notebook is left to [`Self::check_at_least_one_cell`].
    pub fn check_first_cell_contains_author(
        &self,
        notebook: &Notebook,
        filename: &str,
    ) -> Vec<Diagnostic> {
        let Some(first_cell) = notebook.cells.first() else {
            return Vec::new();
        };

        // Literal prefix: no trimming, case-sensitive.
        let author_found = first_cell.is_markdown()
            && first_cell
                .source
                .iter()
                .any(|line| AUTHOR_PREFIXES.iter().any(|p| line.starts_with(p)));

        if author_found {
            return Vec::new();
        }
        vec![Diagnostic::new(
            filename,
            format!(
                "First cell of {} should be a markdown cell containing the original author's name",
                filename
            ),
        )]
    }

    /// Check that every code cell was executed once, in order, and is not empty.
    ///
    /// Stops at the first out-of-order cell, so at most one ordering
    /// diagnostic is emitted. Empty cells after that point are not reported.
    pub fn check_clean_execution(&self, notebook: &Notebook, filename: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, cell) in notebook.code_cells().enumerate() {
            if cell.source.is_empty() {
                diagnostics.push(Diagnostic::new(
                    filename,
                    format!("There is an empty code cell in notebook {}", filename),
                ));
            }
            let expected = i64::try_from(index + 1).ok();
            if cell.execution_count != expected {
                diagnostics.push(Diagnostic::new(
                    filename,
                    format!(
                        "The code cells in notebook {} have not been executed in the right order. \
                         Run \"Kernel > Restart & run all\" then save the notebook.",
                        filename
                    ),
                ));
                break;
            }
        }

        diagnostics
    }
}

impl Default for CellsChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use nbl_core::{Cell, CellType};

    use super::*;

    const FILE: &str = "file_name.ipynb";

    fn notebook(cells: Vec<Cell>) -> Notebook {
        Notebook::new(cells)
    }

    #[test]
    fn test_import_only_in_first_cell() {
        let checker = CellsChecker::new();

        let nb = notebook(vec![Cell::code(["import bla from blub"])]);
        assert!(checker.check_imports_in_first_code_cell(&nb, FILE).is_empty());

        let nb = notebook(vec![
            Cell::code(["import bla from blub"]),
            Cell::code(["print(\"stuff\")"]),
        ]);
        assert!(checker.check_imports_in_first_code_cell(&nb, FILE).is_empty());
    }

    #[test]
    fn test_import_in_other_than_first_cell() {
        let checker = CellsChecker::new();
        let nb = notebook(vec![
            Cell::code(["print(\"stuff\")"]),
            Cell::code(["import bla from blub"]),
        ]);

        let diagnostics = checker.check_imports_in_first_code_cell(&nb, FILE);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Imports should be only in first coding cell, but in file \"file_name.ipynb\", coding cell 1"
        );
    }

    #[test]
    fn test_import_index_counts_code_cells_only() {
        let checker = CellsChecker::new();
        let nb = notebook(vec![
            Cell::markdown(["import not_code"]),
            Cell::code(["x = 1\n"]),
            Cell::markdown(["notes"]),
            Cell::code(["y = 2\n"]),
            Cell::code(["from os import path\n", "import sys\n", "  import indented\n"]),
        ]);

        let diagnostics = checker.check_imports_in_first_code_cell(&nb, FILE);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.message.ends_with("coding cell 2")));
    }

    #[test]
    fn test_import_in_string_source() {
        let checker = CellsChecker::new();
        let as_text = Notebook::from_json_str(
            r#"{"cells": [
                {"cell_type": "code", "source": "x = 1\nimport os\n"},
                {"cell_type": "code", "source": "y = 2\nfrom os import path\nimport sys"}
            ]}"#,
        )
        .unwrap();
        let as_lines = notebook(vec![
            Cell::code(["x = 1\n", "import os\n"]),
            Cell::code(["y = 2\n", "from os import path\n", "import sys"]),
        ]);

        let diagnostics = checker.check_imports_in_first_code_cell(&as_text, FILE);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.message.ends_with("coding cell 1")));
        assert_eq!(
            diagnostics,
            checker.check_imports_in_first_code_cell(&as_lines, FILE)
        );
    }

    #[test]
    fn test_from_without_import_is_not_an_import() {
        let checker = CellsChecker::new();
        let nb = notebook(vec![
            Cell::code(["x = 1"]),
            Cell::code(["from_value = 3\n", "important = True\n"]),
        ]);
        assert!(checker.check_imports_in_first_code_cell(&nb, FILE).is_empty());
    }

    #[test]
    fn test_empty_notebook() {
        let checker = CellsChecker::new();

        let diagnostics = checker.check_at_least_one_cell(&notebook(vec![]), FILE);
        assert_eq!(diagnostics, vec![Diagnostic::new(FILE, "file_name.ipynb has no cells")]);

        let diagnostics = checker.check_at_least_one_cell(&notebook(vec![Cell::code(["x"])]), FILE);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_author_does_not_fail_with_empty_notebook() {
        let checker = CellsChecker::new();
        assert!(checker
            .check_first_cell_contains_author(&notebook(vec![]), FILE)
            .is_empty());
    }

    #[test]
    fn test_first_cell_not_markdown() {
        let checker = CellsChecker::new();
        let nb = notebook(vec![Cell::code(["Author: Stephan"])]);
        assert_eq!(checker.check_first_cell_contains_author(&nb, FILE).len(), 1);

        let mut raw = Cell::markdown(["Author: Stephan"]);
        raw.cell_type = CellType::Raw;
        assert_eq!(
            checker
                .check_first_cell_contains_author(&notebook(vec![raw]), FILE)
                .len(),
            1
        );
    }

    #[test]
    fn test_first_cell_author_lines() {
        let checker = CellsChecker::new();

        let nb = notebook(vec![Cell::markdown(["Bla bla bla"])]);
        let diagnostics = checker.check_first_cell_contains_author(&nb, FILE);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "First cell of file_name.ipynb should be a markdown cell containing the original author's name"
        );

        let nb = notebook(vec![Cell::markdown(["# Title\n", "Author: Stephan"])]);
        assert!(checker.check_first_cell_contains_author(&nb, FILE).is_empty());

        let nb = notebook(vec![Cell::markdown(["Authors: Ada, Grace"])]);
        assert!(checker.check_first_cell_contains_author(&nb, FILE).is_empty());

        // Prefix match is literal.
        for line in [" Author: Stephan", "author: Stephan", "Author:Stephan"] {
            let nb = notebook(vec![Cell::markdown([line])]);
            assert_eq!(checker.check_first_cell_contains_author(&nb, FILE).len(), 1);
        }
    }

    #[test]
    fn test_author_only_checks_first_cell() {
        let checker = CellsChecker::new();
        let nb = notebook(vec![
            Cell::markdown(["# Title"]),
            Cell::markdown(["Author: Stephan"]),
        ]);
        assert_eq!(checker.check_first_cell_contains_author(&nb, FILE).len(), 1);
    }

    #[test]
    fn test_no_empty_code_cells() {
        let checker = CellsChecker::new();
        let nb = notebook(vec![Cell::code(Vec::<String>::new()).with_execution_count(1)]);

        let diagnostics = checker.check_clean_execution(&nb, FILE);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("empty code cell"));
    }

    #[test]
    fn test_cells_not_executed_in_order() {
        let checker = CellsChecker::new();
        let nb = notebook(vec![Cell::code(["stuff"]).with_execution_count(2)]);

        let diagnostics = checker.check_clean_execution(&nb, FILE);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("not been executed in the right order"));
    }

    #[test]
    fn test_cells_executed_in_order() {
        let checker = CellsChecker::new();
        let nb = notebook(vec![
            Cell::markdown(["Author: Stephan"]),
            Cell::code(["stuff"]).with_execution_count(1),
            Cell::code(["other stuff"]).with_execution_count(2),
        ]);
        assert!(checker.check_clean_execution(&nb, FILE).is_empty());
    }

    #[test]
    fn test_never_run_cell_is_out_of_order() {
        let checker = CellsChecker::new();
        let nb = notebook(vec![Cell::code(["stuff"])]);
        assert_eq!(checker.check_clean_execution(&nb, FILE).len(), 1);
    }

    #[test]
    fn test_ordering_stops_at_first_mismatch() {
        let checker = CellsChecker::new();
        let nb = notebook(vec![
            Cell::code(["a"]).with_execution_count(1),
            Cell::code(["b"]).with_execution_count(3),
            Cell::code(Vec::<String>::new()).with_execution_count(7),
            Cell::code(["d"]).with_execution_count(9),
        ]);

        let diagnostics = checker.check_clean_execution(&nb, FILE);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("right order"));
    }

    #[test]
    fn test_empty_cell_reported_before_ordering_break() {
        let checker = CellsChecker::new();
        let nb = notebook(vec![
            Cell::code(Vec::<String>::new()).with_execution_count(1),
            Cell::code(Vec::<String>::new()).with_execution_count(5),
        ]);

        let diagnostics = checker.check_clean_execution(&nb, FILE);
        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics[0].message.contains("empty code cell"));
        assert!(diagnostics[1].message.contains("empty code cell"));
        assert!(diagnostics[2].message.contains("right order"));
    }
}
