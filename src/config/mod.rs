//! Configuration management for belgianlake.
//!
//! Handles:
//! - Location of the record store
//! - Undo history capacity
//! - Display options
//! - Theme settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LakeError, Result};
use crate::util::atomic_write;

/// Store file used when neither the config nor the command line names one.
pub const DEFAULT_STORE_FILE: &str = "data.jsonl";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Record store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Editing session settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Display options.
    #[serde(default)]
    pub display: DisplayConfig,
    /// TUI theme.
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let config_path = default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LakeError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        toml::from_str(&content).map_err(|e| LakeError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Save configuration to a specific path.
    ///
    /// The file is written through a temporary sibling and renamed into place.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        atomic_write(path, content.as_bytes())?;
        Ok(())
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LakeError::InvalidConfig {
            message: format!("Failed to serialize config: {e}"),
        })
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON lines file, relative to the working directory.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Editing session configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum undo snapshots kept (0 = unbounded).
    #[serde(default)]
    pub undo_limit: usize,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Width of the File column.
    #[serde(default = "default_path_width")]
    pub path_width: u16,
    /// Show the key help footer.
    #[serde(default = "default_true")]
    pub show_help: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            path_width: default_path_width(),
            show_help: true,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme name.
    #[serde(default = "default_theme")]
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme(),
        }
    }
}

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

fn default_path_width() -> u16 {
    80
}

fn default_theme() -> String {
    "dark".to_string()
}

/// Get the default configuration path.
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| LakeError::ConfigError {
        message: "could not determine the user configuration directory".to_string(),
    })?;

    Ok(config_dir.join("belgianlake").join("config.toml"))
}
