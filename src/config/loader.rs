use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::selector::MAX_REEL_LEN;

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
    /// Uses `~/.config/ygo-shuffle/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("ygo-shuffle").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
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
    /// - The spin lasts a non-zero time
    /// - Scroll speed and row height are positive and finite
    /// - The scroll margin is finite
    /// - Extra rows fit in a reel
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spin.duration_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "spin.duration_ms must be greater than 0".to_string(),
            });
        }

        if !(self.spin.pixels_per_second > 0.0 && self.spin.pixels_per_second.is_finite()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "spin.pixels_per_second must be positive and finite, got {}",
                    self.spin.pixels_per_second
                ),
            });
        }

        if !(self.spin.row_height > 0.0 && self.spin.row_height.is_finite()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "spin.row_height must be positive and finite, got {}",
                    self.spin.row_height
                ),
            });
        }

        if !self.spin.scroll_margin.is_finite() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "spin.scroll_margin must be finite, got {}",
                    self.spin.scroll_margin
                ),
            });
        }

        if self.spin.extra_rows > MAX_REEL_LEN {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "spin.extra_rows must be at most {MAX_REEL_LEN}, got {}",
                    self.spin.extra_rows
                ),
            });
        }

        Ok(())
    }
}
