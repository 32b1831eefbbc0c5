//! User configuration
//!
//! A small JSON file under the platform config directory:
//! - Linux: ~/.config/school-killer/config.json
//! - macOS: ~/Library/Application Support/school-killer/config.json
//! - Windows: %APPDATA%\school-killer\config.json
//!
//! Every field is optional in the file; missing ones take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AppError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Two-letter language tag ("en" or "ru"). None = detect from the environment.
    pub locale: Option<String>,
    /// Edge length of gallery tiles in logical pixels
    pub thumbnail_size: f32,
    /// Edge length of the zoomed view in logical pixels (clamped to the window)
    pub zoom_size: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: None,
            thumbnail_size: 200.0,
            zoom_size: 640.0,
        }
    }
}

impl AppConfig {
    /// Where the config file lives, if the platform has a config directory
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("school-killer");
        path.push("config.json");
        Some(path)
    }

    /// Load from the default location. A missing file means defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
