//! `tournament.toml` settings for the command-line runner.
//!
//! ```toml
//! state_path = "kdk_state.json"
//! bracket_path = "bracket_state.json"
//! log_level = "info"
//!
//! [defaults]
//! courts = 2
//! rounds = 4
//! mixed_doubles = false
//! strict_gender = false
//! ```

use kdk_core::TournamentConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "tournament.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the KDK session snapshot lives
    pub state_path: PathBuf,
    /// Where the bracket snapshot lives
    pub bracket_path: PathBuf,
    /// Fallback log filter when RUST_LOG is unset
    pub log_level: String,
    /// Configuration for a fresh session
    pub defaults: TournamentConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from("kdk_state.json"),
            bracket_path: PathBuf::from("bracket_state.json"),
            log_level: "info".to_string(),
            defaults: TournamentConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(path: &Path, contents: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            defaults: settings.defaults.normalized(),
            ..settings
        })
    }

    /// Load settings; a missing file means defaults
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &contents)
    }
}
