//! Persistence of the user-created level collection.

use std::{fs, io, path::PathBuf};

use thiserror::Error;
use warehouse_core::Level;

/// Stores user-created levels as an ordered JSON array on disk.
///
/// The built-in catalog never touches the store; only levels saved from the
/// editor or imported from transfer strings are persisted here.
#[derive(Clone, Debug)]
pub(crate) struct LevelStore {
    path: PathBuf,
}

/// Errors raised while loading or saving the custom level collection.
#[derive(Debug, Error)]
pub(crate) enum LevelStoreError {
    /// The backing file could not be read or written.
    #[error("could not access the level store: {0}")]
    Io(#[from] io::Error),
    /// The backing file does not contain a valid level collection.
    #[error("the level store is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl LevelStore {
    /// Creates a store backed by the provided file path.
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the ordered custom level collection.
    ///
    /// A missing file is an empty collection, not an error.
    pub(crate) fn load(&self) -> Result<Vec<Level>, LevelStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Appends one level and rewrites the backing file.
    pub(crate) fn append(&self, level: Level) -> Result<(), LevelStoreError> {
        let mut levels = self.load()?;
        levels.push(level);
        let json = serde_json::to_string_pretty(&levels)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
