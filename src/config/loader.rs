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
    /// Uses `~/.config/explaincode/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("explaincode").join("config.toml")
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
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `service.base_url` is an http(s) URL
    /// - `service.explain_path` is absolute
    /// - timeouts and tick rate are non-zero
    /// - `ui.tab_width` is within 1..=16
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.service.base_url;
        match reqwest::Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Service base_url '{}' must use http or https, not '{}'",
                        base_url,
                        url.scheme()
                    ),
                });
            }
            Err(err) => {
                return Err(ConfigError::ValidationError {
                    message: format!("Service base_url '{}' is not a valid URL: {}", base_url, err),
                });
            }
        }

        if !self.service.explain_path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Service explain_path '{}' must start with '/'",
                    self.service.explain_path
                ),
            });
        }

        if self.service.timeout_seconds == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "Service timeout_seconds must be greater than 0 (omit it to disable)"
                    .to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "UI tick_rate_ms must be greater than 0".to_string(),
            });
        }

        if !(1..=16).contains(&self.ui.tab_width) {
            return Err(ConfigError::ValidationError {
                message: format!("UI tab_width {} must be between 1 and 16", self.ui.tab_width),
            });
        }

        Ok(())
    }
}
