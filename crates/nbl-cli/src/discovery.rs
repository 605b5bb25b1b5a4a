//! Notebook discovery.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::DiscoveryConfig;
use crate::LintError;

fn is_skipped_dir(entry: &DirEntry, config: &DiscoveryConfig) -> bool {
    entry.file_type().is_dir() && entry.file_name() == OsStr::new(&config.skip_dir)
}

/// Symlinked files count; directory links are never followed.
fn is_notebook(entry: &DirEntry, config: &DiscoveryConfig) -> bool {
    let is_file =
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
    is_file && entry.path().extension() == Some(OsStr::new(&config.extension))
}

/// Recursively collect notebook files under `root`, sorted by path.
///
/// Anything below a `config.skip_dir` directory is ignored.
pub fn discover_notebooks(root: &Path, config: &DiscoveryConfig) -> Result<Vec<PathBuf>, LintError> {
    if !root.exists() {
        return Err(LintError::FolderNotFound(root.to_path_buf()));
    }

    let mut notebooks = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry, config));
    for entry in walker {
        let entry = entry?;
        if is_notebook(&entry, config) {
            debug!(path = %entry.path().display(), "found notebook");
            notebooks.push(entry.into_path());
        }
    }

    notebooks.sort();
    Ok(notebooks)
}
