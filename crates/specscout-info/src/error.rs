//! Error types for specscout-info

use thiserror::Error;

/// Result type alias for specscout-info operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for specscout-info operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status code
    #[error("HTTP request failed with status {status}: {url}")]
    Status { status: u16, url: String },

    /// JSON deserialization failed
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// Core logic error (config extraction, manifest parsing)
    #[error(transparent)]
    Core(#[from] specscout_core::Error),

    /// The landing page could not be fetched and the input is not a repository
    #[error("Could not fetch {url}: {reason}")]
    SiteUnreachable { url: String, reason: String },

    /// No manifest candidate could be fetched; carries the last attempt's error
    #[error("No manifest found for {repo}: {last_error}")]
    ManifestUnavailable { repo: String, last_error: String },

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
