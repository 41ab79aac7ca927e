//! Seed import error types.

use crate::index::IndexError;

/// Errors that can occur while loading a seed document.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Reading the seed file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Seed server returned an error status
    #[error("seed server error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the seed document
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A record was rejected by the index
    #[error("invalid seed record: {0}")]
    Record(#[from] IndexError),
}
