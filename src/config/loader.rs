use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use crate::config::types::{ApiConfig, Config};

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
    /// Uses `~/.config/cocktails/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cocktails").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`. Validation is left to
    /// the caller so command-line overrides can be applied first.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `api.base_url` is an absolute http(s) URL
    /// - timeouts and the tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.parsed_base_url()?;

        if self.api.timeout_seconds == 0 {
            return Err(validation("api.timeout_seconds must be greater than 0"));
        }
        if self.api.connect_timeout_seconds == 0 {
            return Err(validation(
                "api.connect_timeout_seconds must be greater than 0",
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(validation("ui.tick_rate_ms must be greater than 0"));
        }
        Ok(())
    }
}

impl ApiConfig {
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("api.base_url '{}' is not a valid URL: {}", self.base_url, e),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::ValidationError {
                message: format!(
                    "api.base_url '{}' must use http or https, not '{}'",
                    self.base_url, other
                ),
            }),
        }
    }
}

fn validation(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}
