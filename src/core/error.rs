//! Error types for core module
//!
//! Provides custom error types for configuration loading and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error at {}: {source}", .path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// A setting holds a value the application cannot use
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
