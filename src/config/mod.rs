//! Configuration: TOML file, defaults and command-line overrides.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, ConfigOverrides, LoggingConfig, UiConfig};
