//! Optional TOML configuration for the terminal adapter.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Presentation-layer settings loaded from `warehouse.toml`.
///
/// Every field has a default, and the file itself is optional; only a file
/// that exists but cannot be read or parsed is an error.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Path of the JSON file holding user-created levels.
    pub(crate) levels_path: PathBuf,
    /// Maximum number of session snapshots retained for undo.
    pub(crate) undo_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            levels_path: PathBuf::from("custom_levels.json"),
            undo_depth: 100,
        }
    }
}

impl Config {
    /// Loads configuration from the provided path, falling back to defaults
    /// when the file does not exist.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&contents).context("failed to parse config file toml contents")
    }
}
