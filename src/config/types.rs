use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::{TimeoutConfig, DEFAULT_BASE_URL};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Catalog endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint root; `search.php` is resolved against it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw / spinner interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for interactive sessions. Defaults to the user cache dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Values given on the command line, applied over the loaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u32>,
    pub log_level: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl From<&ApiConfig> for TimeoutConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            request: Duration::from_secs(u64::from(api.timeout_seconds)),
            connect: Duration::from_secs(u64::from(api.connect_timeout_seconds)),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl LoggingConfig {
    /// Configured log file, or `<cache dir>/cocktails/cocktails.log`.
    pub fn file_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("cocktails")
                .join("cocktails.log"),
        }
    }
}

impl Config {
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(base_url) = &overrides.base_url {
            self.api.base_url = base_url.clone();
        }
        if let Some(timeout) = overrides.timeout_seconds {
            self.api.timeout_seconds = timeout;
        }
        if let Some(level) = &overrides.log_level {
            self.logging.level = level.clone();
        }
    }
}
