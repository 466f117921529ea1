//! Tracing subscriber setup.
//!
//! The interactive screens own stdout, so they log to a file; one-shot
//! commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open log file '{path}': {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid log filter '{directive}': {source}")]
    Filter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

/// `RUST_LOG` wins over the configured level when it is set and non-empty.
pub fn resolve_directive<'a>(env_value: Option<&'a str>, configured: &'a str) -> &'a str {
    match env_value.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => configured,
    }
}

pub fn init(config: &LoggingConfig, sink: LogSink) -> Result<(), LoggingError> {
    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = resolve_directive(env_value.as_deref(), &config.level);
    let filter = EnvFilter::try_new(directive).map_err(|source| LoggingError::Filter {
        directive: directive.to_string(),
        source,
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    let installed = match sink {
        LogSink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogSink::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| LoggingError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| LoggingError::OpenFile { path, source })?;
            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    installed.map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_overrides_configured_level() {
        assert_eq!(resolve_directive(Some("debug"), "info"), "debug");
    }

    #[test]
    fn blank_env_value_falls_back() {
        assert_eq!(resolve_directive(Some("  "), "warn"), "warn");
        assert_eq!(resolve_directive(None, "warn"), "warn");
    }
}
