//! Search configuration and per-request route options.

use std::time::Duration;

use serde::Deserialize;

/// Engine-wide limits for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Transfer bound used when a request doesn't give one.
    pub default_max_transfers: usize,

    /// Largest transfer bound a request may ask for.
    /// Search cost grows as branching-factor^max_transfers.
    pub max_transfers_ceiling: usize,

    /// Wall-clock budget for one route search (milliseconds).
    pub deadline_ms: u64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(default_max_transfers: usize, max_transfers_ceiling: usize, deadline_ms: u64) -> Self {
        Self {
            default_max_transfers,
            max_transfers_ceiling,
            deadline_ms,
        }
    }

    /// Returns the search deadline as a Duration.
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    /// Route options using this config's default transfer bound.
    pub fn default_options(&self) -> RouteOptions {
        RouteOptions {
            max_transfers: self.default_max_transfers,
            require_accessibility: true,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_transfers: 3,
            max_transfers_ceiling: 5,
            deadline_ms: 2000,
        }
    }
}

/// Constraints for a single route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Maximum number of connections (hops) in the returned path.
    pub max_transfers: usize,

    /// Prune every path touching an inaccessible station or connection.
    pub require_accessibility: bool,
}

impl RouteOptions {
    pub fn new(max_transfers: usize, require_accessibility: bool) -> Self {
        Self {
            max_transfers,
            require_accessibility,
        }
    }
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            max_transfers: 3,
            require_accessibility: true,
        }
    }
}
