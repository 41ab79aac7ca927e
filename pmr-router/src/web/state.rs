//! Application state for the web layer.

use std::sync::Arc;

use crate::index::{StationIndex, StationStore};
use crate::planner::SearchConfig;

/// The station index as shared by request handlers.
pub type SharedIndex = StationIndex<Arc<dyn StationStore>>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station index over the configured store
    pub index: Arc<SharedIndex>,

    /// Route search limits
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(index: SharedIndex, config: SearchConfig) -> Self {
        Self {
            index: Arc::new(index),
            config: Arc::new(config),
        }
    }
}
