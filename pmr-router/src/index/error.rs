//! Station index error types.

use crate::domain::DomainError;

/// The backing store could not be reached.
///
/// Transient; the engine never retries on its own.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("station store unavailable: {message}")]
    Unavailable { message: String },
}

/// Errors from index writes and lookups.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IndexError {
    /// Input rejected by validation
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// Backing store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}
