//! Error types for specscout-core

use thiserror::Error;

/// Result type alias for specscout-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for specscout-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// JSON deserialization failed
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The embedded configuration script could not be located
    #[error("No spec configuration script found in document")]
    ConfigNotFound,

    /// The embedded configuration literal could not be parsed
    #[error("Malformed configuration literal: {0}")]
    MalformedConfig(String),

    /// Unsupported repository host
    #[error("Unsupported repository host: {0} (only GitHub is supported)")]
    UnsupportedRepositoryHost(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
