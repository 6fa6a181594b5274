//! Application configuration loaded from TOML.
//!
//! ```toml
//! [search]
//! page_size = 20
//! api_key = "..."
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::{Path, PathBuf};

use bookshelf_search::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::error::{BookshelfError, Result};

/// Environment variable overriding `search.api_key`.
pub const API_KEY_ENV: &str = "BOOKSHELF_BOOKS_API_KEY";

/// Top-level configuration for the reading tracker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookshelfConfig {
    /// Catalog search settings.
    pub search: SearchConfig,
}

impl BookshelfConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BookshelfError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| BookshelfError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path` if given, else from [`Self::default_config_path`] if
    /// that file exists, else defaults. Applies environment overrides and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit or existing file cannot be loaded, or
    /// if the resulting search configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_api_key(std::env::var(API_KEY_ENV).ok());
        config.search.validate()?;
        Ok(config)
    }

    /// Replace the API key when `key` is non-empty.
    pub fn apply_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.search.api_key = Some(key);
        }
    }

    /// Returns the default config file path: `~/.config/bookshelf/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("bookshelf").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("bookshelf")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/bookshelf-config/config.toml")
        }
    }
}
