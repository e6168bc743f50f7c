//! Configuration loading and management
//!
//! Handles parsing of taskbook's `config.toml`, normally found in the
//! platform config directory. Every field has a default, so a missing file
//! is a valid configuration.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backing-file configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backing-file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the backing file. Defaults to `tasks.txt` in the platform
    /// data directory when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// What to do with a malformed record when loading
    #[serde(default)]
    pub on_decode_error: DecodePolicy,
}

/// Policy for malformed records encountered at load time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Drop the bad line with a warning and keep loading
    #[default]
    Skip,
    /// Fail the load on the first bad line
    Abort,
}

impl Config {
    /// Load configuration from the given file. A missing file yields the
    /// default configuration.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from the default platform location, if one exists.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// The backing-file path: configured value, or the platform default.
    pub fn data_file(&self) -> Result<PathBuf> {
        if let Some(file) = &self.storage.file {
            return Ok(file.clone());
        }
        default_data_file()
    }
}

/// `config.toml` in the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "taskbook")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// `tasks.txt` in the platform data directory.
pub fn default_data_file() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "taskbook").ok_or(Error::NoDataDir)?;
    Ok(dirs.data_dir().join("tasks.txt"))
}
