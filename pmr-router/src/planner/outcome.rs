//! Route search results and errors.

use crate::domain::DomainError;
use crate::index::StoreError;

/// Normal outcomes of a route query.
///
/// Unknown stations and unreachable destinations are answers, not
/// failures; callers may relax constraints and ask again.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome<T> {
    /// A path satisfying the constraints was found
    Found(T),

    /// The given station id is not in the index
    StationNotFound(String),

    /// No path exists within the transfer bound and accessibility constraint
    NoRouteFound,
}

impl<T> RouteOutcome<T> {
    /// Transform the found value, keeping the other outcomes.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RouteOutcome<U> {
        match self {
            RouteOutcome::Found(value) => RouteOutcome::Found(f(value)),
            RouteOutcome::StationNotFound(id) => RouteOutcome::StationNotFound(id),
            RouteOutcome::NoRouteFound => RouteOutcome::NoRouteFound,
        }
    }

    /// Returns the found value, if any.
    pub fn found(self) -> Option<T> {
        match self {
            RouteOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

/// Failures of a route query.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RouteError {
    /// Request rejected before searching
    #[error("invalid route request: {0}")]
    InvalidRequest(String),

    /// Cancelled by the caller or the deadline passed
    #[error("route search cancelled")]
    Cancelled,

    /// Backing store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Solved path could not be assembled into an itinerary
    #[error(transparent)]
    Assembly(#[from] DomainError),
}
