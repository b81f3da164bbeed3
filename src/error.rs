//! Error types for hyperpage
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Requesting a page past the end of a dataset is not an error: it yields an
//! empty page. Errors are reserved for bad requests and unreadable sources.

use thiserror::Error;

/// The main error type for hyperpage
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Errors
    // ============================================================================
    /// A page number or page size was not a positive integer
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Configuration could not be read or used
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A configuration value is out of range
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    /// Configuration file is not valid YAML for this schema
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// A page could not be rendered as JSON
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // Dataset Errors
    // ============================================================================
    /// Dataset source could not be decoded
    #[error("Malformed dataset at line {line}: {message}")]
    Format { line: usize, message: String },

    /// Dataset source does not exist
    #[error("Dataset file not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Dataset source could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a format error for the given 1-based source line
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller's request rather than
    /// by the dataset or the environment
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. } | Error::InvalidConfigValue { .. }
        )
    }
}

/// Result type alias for hyperpage
pub type Result<T> = std::result::Result<T, Error>;
