#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging setup for Methodbook.
//!
//! Library crates log through `tracing`; binaries and tests call [`init`] or
//! [`init_from_config`] once to install a formatting subscriber. `RUST_LOG`
//! overrides the configured level when set.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use config::LoggingConfig;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level is not one of trace, debug, info, warn, error
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),
    /// The log file could not be opened
    #[error("failed to open log file {path}: {source}")]
    File {
        /// Log file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// A global subscriber is already installed
    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Parse a configured level name (case-insensitive)
pub fn parse_level(level: &str) -> Result<Level, LoggingError> {
    level.trim().parse::<Level>().map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

/// Filter for `level`, overridden by `RUST_LOG` when it is set
pub fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy()
}

/// Install a global subscriber writing to `file`, or to stderr when `None`
pub fn init(level: &str, file: Option<&Path>) -> Result<(), LoggingError> {
    let filter = build_filter(parse_level(level)?);
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match file {
        Some(path) => {
            let file = open_log_file(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    result.map_err(|e| LoggingError::Install(e.to_string()))
}

/// Install a global subscriber from the `[logging]` configuration table
pub fn init_from_config(config: &LoggingConfig) -> Result<(), LoggingError> {
    init(&config.level, config.file.as_deref())
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::File { path: path.to_path_buf(), source })
}
