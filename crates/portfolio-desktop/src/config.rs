//! # Configuration Persistence
//!
//! Save and load settings to/from disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use portfolio_core::client::DEFAULT_TIMEOUT;
use portfolio_core::{Theme, DEFAULT_API_BASE_URL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The platform has no config directory.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// Reading or writing the file failed.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Colour scheme chosen by the user.
    #[serde(default)]
    pub theme: Theme,

    /// Base URL of the repository API.
    ///
    /// The default talks to GitHub directly, so requests go to
    /// `/users/{handle}/repos` without the `/api` proxy prefix. Point it at a
    /// proxy origin's `/api` prefix to route requests through
    /// `/api/users/{handle}/repos`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout for the repository API, in seconds. `0` means the
    /// default.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Returns the config file path.
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("portfolio").join("config.json"))
    }

    /// Request timeout as a [`Duration`].
    ///
    /// A zero timeout would fail every request, so it falls back to
    /// [`DEFAULT_TIMEOUT`].
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        if self.request_timeout_secs == 0 {
            tracing::warn!("request_timeout_secs is 0, using the default timeout");
            return DEFAULT_TIMEOUT;
        }
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Loads configuration from disk, or returns default if not found.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not determine config directory");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// is missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(?path, "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Saves configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if there is no config directory or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Saves configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if serialization or any write fails.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        tracing::info!(?path, "Saved configuration");
        Ok(())
    }
}
