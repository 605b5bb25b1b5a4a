//! Typed notebook schema.
//!
//! Mirrors the subset of nbformat v4 the style checks read. Unknown keys
//! (cell `metadata`, `outputs`, `nbformat`, ...) are ignored.

use std::io::Read;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{CheckError, CheckResult, NotebookError};

/// A parsed notebook document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Notebook {
    /// Cells in execution and presentation order
    #[serde(default)]
    pub cells: Vec<Cell>,
    /// Top-level metadata, `None` when the key is absent
    #[serde(default)]
    pub metadata: Option<NotebookMetadata>,
}

/// Top-level notebook metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NotebookMetadata {
    #[serde(default)]
    pub kernelspec: Option<KernelSpec>,
}

/// Kernel the notebook was authored against.
///
/// `name` is kept untyped: an off-type name is a style diagnostic, not a
/// load failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct KernelSpec {
    #[serde(default)]
    pub name: Option<Value>,
}

/// One unit of a notebook.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub cell_type: CellType,
    /// Source lines, each usually keeping its trailing newline
    #[serde(default, deserialize_with = "deserialize_source")]
    pub source: Vec<String>,
    /// Position in the last interactive run, `None` if never run
    #[serde(default)]
    pub execution_count: Option<i64>,
}

/// Cell kind. Open set: anything unrecognized is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CellType {
    Code,
    Markdown,
    Raw,
    Other(String),
}

impl Default for CellType {
    fn default() -> Self {
        CellType::Other(String::new())
    }
}

impl From<String> for CellType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "code" => CellType::Code,
            "markdown" => CellType::Markdown,
            "raw" => CellType::Raw,
            _ => CellType::Other(value),
        }
    }
}

/// nbformat allows `source` as a list of lines or as one string.
fn deserialize_source<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Source {
        Lines(Vec<String>),
        Text(String),
    }

    Ok(match Option::<Source>::deserialize(deserializer)? {
        Some(Source::Lines(lines)) => lines,
        Some(Source::Text(text)) => text.split_inclusive('\n').map(str::to_owned).collect(),
        None => Vec::new(),
    })
}

impl Notebook {
    /// Create a notebook with the given cells and no metadata.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            metadata: None,
        }
    }

    /// Set `metadata.kernelspec.name`.
    #[must_use]
    pub fn with_kernel(mut self, name: impl Into<String>) -> Self {
        let metadata = self.metadata.get_or_insert_with(NotebookMetadata::default);
        let kernelspec = metadata.kernelspec.get_or_insert_with(KernelSpec::default);
        kernelspec.name = Some(Value::String(name.into()));
        self
    }

    /// Parse a notebook from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, NotebookError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a notebook from a reader yielding JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self, NotebookError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Code cells in cell order.
    pub fn code_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_code())
    }

    /// The declared kernelspec.
    ///
    /// Fails when `metadata` or `metadata.kernelspec` is absent.
    pub fn kernelspec(&self) -> CheckResult<&KernelSpec> {
        let metadata = self
            .metadata
            .as_ref()
            .ok_or(CheckError::MissingField { field: "metadata" })?;
        metadata.kernelspec.as_ref().ok_or(CheckError::MissingField {
            field: "metadata.kernelspec",
        })
    }
}

impl Cell {
    fn with_type<I, S>(cell_type: CellType, source: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cell_type,
            source: source.into_iter().map(Into::into).collect(),
            execution_count: None,
        }
    }

    /// A code cell that has never been run.
    pub fn code<I, S>(source: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_type(CellType::Code, source)
    }

    /// A markdown cell.
    pub fn markdown<I, S>(source: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_type(CellType::Markdown, source)
    }

    #[must_use]
    pub fn with_execution_count(mut self, count: i64) -> Self {
        self.execution_count = Some(count);
        self
    }

    pub fn is_code(&self) -> bool {
        self.cell_type == CellType::Code
    }

    pub fn is_markdown(&self) -> bool {
        self.cell_type == CellType::Markdown
    }
}
