//! Tracing/logging initialization.
//!
//! Log lines always go to stderr, leaving stdout to the program itself. When a
//! log file is configured they are also appended to that file.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("unknown log format: {0} (expected `json` or `text`)")]
    UnknownFormat(String),

    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Output format of log lines.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable single-line text.
    Text,
}

impl FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" => Ok(LogFormat::Text),
            other => Err(ObservabilityError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Append log lines to this file as well as stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl ObservabilityConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }
}

fn make_writer(config: &ObservabilityConfig) -> Result<BoxMakeWriter, ObservabilityError> {
    let Some(path) = &config.file else {
        return Ok(BoxMakeWriter::new(std::io::stderr));
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ObservabilityError::OpenLogFile {
            path: path.clone(),
            source,
        })?;

    Ok(BoxMakeWriter::new(std::io::stderr.and(Arc::new(file))))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times: once a global subscriber is installed,
/// subsequent calls return immediately without touching the log file. Fails
/// only if the configured log file cannot be opened.
pub fn init(config: &ObservabilityConfig) -> Result<(), ObservabilityError> {
    if ::tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let writer = make_writer(config)?;

    // Timestamps on both formats, level/target configurable via RUST_LOG.
    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .with_writer(writer)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .with_ansi(config.file.is_none())
            .with_writer(writer)
            .try_init(),
    };

    if installed.is_ok() {
        ::tracing::debug!(format = ?config.format, file = ?config.file, "logging initialised");
    }

    Ok(())
}
