//! Domain error types.
//!
//! These errors represent malformed input rejected at construction time.
//! They are never retried; callers surface them as-is.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Station record failed validation
    #[error("invalid station {id:?}: {reason}")]
    InvalidStation { id: String, reason: &'static str },

    /// Latitude/longitude outside WGS84 range
    #[error("invalid coordinate ({lat}, {lon}): {reason}")]
    InvalidCoordinate {
        lat: f64,
        lon: f64,
        reason: &'static str,
    },

    /// Search radius is negative or not a number
    #[error("invalid radius {0}: must be a finite, non-negative number of meters")]
    InvalidRadius(f64),

    /// Zone number is zero
    #[error("zone must be at least 1")]
    InvalidZone,

    /// Connection record failed validation
    #[error("invalid connection {from} -> {to}: {reason}")]
    InvalidConnection {
        from: String,
        to: String,
        reason: &'static str,
    },

    /// Itinerary parts don't line up
    #[error("invalid itinerary: {0}")]
    InvalidItinerary(&'static str),
}

impl DomainError {
    /// Short machine-independent reason, where the variant carries one.
    pub fn reason(&self) -> &'static str {
        match self {
            DomainError::InvalidStation { reason, .. }
            | DomainError::InvalidCoordinate { reason, .. }
            | DomainError::InvalidConnection { reason, .. } => reason,
            DomainError::InvalidRadius(_) => "invalid radius",
            DomainError::InvalidZone => "zone must be at least 1",
            DomainError::InvalidItinerary(reason) => reason,
        }
    }
}
