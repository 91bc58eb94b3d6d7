//! Core error types for deadliner-core.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for deadliner-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Target-parsing errors
    #[error("Target error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Textual target timestamps that match no accepted format.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unrecognized target timestamp '{input}' (expected RFC 3339, 'YYYY-MM-DD HH:MM[:SS]', or 'YYYY-MM-DD')")]
    UnrecognizedTarget { input: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
