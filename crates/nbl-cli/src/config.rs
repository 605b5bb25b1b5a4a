//! Driver configuration.

use clap::ValueEnum;

/// Which files count as notebooks.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// File extension, without the dot
    pub extension: String,
    /// Directory name whose contents are never linted
    pub skip_dir: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extension: "ipynb".to_string(),
            skip_dir: ".ipynb_checkpoints".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable report (default)
    #[default]
    Text,
    /// JSON report
    Json,
}
