//! Backing stores for the station index.
//!
//! A store owns the current [`StationGraph`] snapshot. The index receives
//! its store at construction time; there is no process-wide client.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use super::error::{IndexError, StoreError};
use super::graph::{GraphUpdate, StationGraph};

/// Storage for the station graph.
///
/// Implementations must make each `apply` call atomic: concurrent readers
/// see either the snapshot before the batch or the one after it.
pub trait StationStore: Send + Sync {
    /// Returns the current snapshot.
    fn snapshot(&self) -> Result<Arc<StationGraph>, StoreError>;

    /// Apply a batch of updates as one unit.
    ///
    /// If any update is rejected, none of the batch is applied.
    fn apply(&self, updates: Vec<GraphUpdate>) -> Result<(), IndexError>;
}

/// In-memory store with copy-on-write snapshots.
///
/// The write lock is held only while the next snapshot is built and
/// swapped in. Searches run against their own `Arc` and never block
/// writers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    current: RwLock<Arc<StationGraph>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a graph.
    pub fn with_graph(graph: StationGraph) -> Self {
        Self {
            current: RwLock::new(Arc::new(graph)),
        }
    }
}

impl StationStore for MemoryStore {
    fn snapshot(&self) -> Result<Arc<StationGraph>, StoreError> {
        Ok(Arc::clone(&self.current.read()))
    }

    fn apply(&self, updates: Vec<GraphUpdate>) -> Result<(), IndexError> {
        let mut guard = self.current.write();
        let mut next = StationGraph::clone(&guard);
        let count = updates.len();

        for update in updates {
            next.apply(update)?;
        }

        *guard = Arc::new(next);
        trace!(updates = count, "applied graph updates");
        Ok(())
    }
}

impl<S: StationStore + ?Sized> StationStore for Arc<S> {
    fn snapshot(&self) -> Result<Arc<StationGraph>, StoreError> {
        (**self).snapshot()
    }

    fn apply(&self, updates: Vec<GraphUpdate>) -> Result<(), IndexError> {
        (**self).apply(updates)
    }
}
