//! Error types for release lookups.

use thiserror::Error;

/// Result type alias for release operations.
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Errors that can occur while querying the release API.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("No GA release found for version {version} ({image_type}, {os_family})")]
    NoRelease {
        version: u32,
        image_type: String,
        os_family: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
