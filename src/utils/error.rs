//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the trace reducer itself
#[derive(Error, Debug)]
pub enum ReduceError {
    #[error("Invalid reducer configuration: {0}")]
    InvalidConfiguration(String),

    /// Recoverable: only the offending line is lost
    #[error("Malformed trace line {line_number}: no time/memory pair in {line:?}")]
    MalformedTraceLine { line_number: usize, line: String },
}

/// Errors detected while validating command input, before any line is read
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("{} is not a valid file or no permissions to read the file", .0.display())]
    UnreadableFile(PathBuf),

    #[error("Stack frame depth is not a valid numeric value: {0:?}")]
    InvalidDepth(String),

    #[error("Failed to open {} for reading: {source}", .path.display())]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read trace: {0}")]
    ReadFailed(#[from] std::io::Error),
}

/// Errors that can occur while loading reducer configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Errors that can occur during output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
