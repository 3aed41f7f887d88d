//! JSON snapshot storage.
//!
//! The session and the bracket are each saved whole, one file apiece, and
//! loaded back verbatim.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load a snapshot from a JSON file
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a snapshot, or the default value when the file does not exist yet
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, StoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "no snapshot yet, starting fresh");
        return Ok(T::default());
    }
    load(path)
}

/// Save a snapshot to a JSON file, replacing what was there
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "snapshot saved");
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
