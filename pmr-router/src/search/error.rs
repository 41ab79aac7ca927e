//! Search error types.

use crate::domain::DomainError;
use crate::index::StoreError;

/// Errors from geospatial and name searches.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Query rejected before searching (bad coordinate or radius)
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// Backing store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}
