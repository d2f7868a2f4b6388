use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/sendcam/config.toml` on Unix/macOS, or the
    /// equivalent from `dirs::config_dir()` elsewhere. Falls back to the
    /// current directory if no config directory is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("sendcam").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The classification timeout is non-zero
    /// - The intake channel has capacity
    /// - Notifications are visible for some time
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.classify_timeout_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "scan.classify_timeout_ms must be greater than zero".to_string(),
            });
        }

        if self.scan.intake_buffer == 0 {
            return Err(ConfigError::ValidationError {
                message: "scan.intake_buffer must be greater than zero".to_string(),
            });
        }

        if self.notifications.duration_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "notifications.duration_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
