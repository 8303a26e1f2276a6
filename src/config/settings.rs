//! User defaults loaded from a JSON settings file.
//!
//! The default file lives in the platform config directory
//! (`~/.config/portsweep/settings.json` on Linux). A missing default file is
//! not an error; a missing file named explicitly on the command line is.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Defaults applied when a flag is not given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default first port of the range.
    pub start_port: u32,
    /// Default last port of the range.
    pub end_port: u32,
    /// Default connection timeout, humantime syntax.
    pub timeout: String,
    /// Default worker count.
    pub workers: usize,
    /// Default output format (text, json, csv).
    pub format: String,
    /// Read a banner from open ports.
    pub grab_banners: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_port: 1,
            end_port: 1024,
            timeout: "1s".to_string(),
            workers: 100,
            format: "text".to_string(),
            grab_banners: true,
        }
    }
}

impl Settings {
    /// Path of the settings file in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "portsweep", "portsweep")
            .map(|project| project.config_dir().join("settings.json"))
    }

    /// Load settings from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }
}
