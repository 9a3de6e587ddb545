//! Error types for departures.
//!
//! Board operations themselves never fail: missing times and terminals are
//! ordinary data. Errors come from the edges (configuration, board files,
//! and writing output).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for departures operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// No currency preset exists for a locale.
    #[error("unknown locale '{locale}' (known: en-US, en-GB, de-DE, fr-FR, ja-JP)")]
    UnknownLocale {
        /// The locale as given.
        locale: String,
    },

    // === Board File Errors ===
    /// Failed to read a board file.
    #[error("failed to read board file {path}: {source}")]
    BoardRead {
        /// Path to the board file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A board file is not valid board JSON.
    #[error("invalid board file {path}: {source}")]
    BoardParse {
        /// Path to the board file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    // === I/O Errors ===
    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for departures operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error came from configuration loading or validation.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigLoad(_) | Self::ConfigValidation { .. } | Self::UnknownLocale { .. }
        )
    }
}
