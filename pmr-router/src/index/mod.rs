//! Station index: the station/connection graph and its backing store.
//!
//! The index validates incoming records, forwards them to its store as
//! atomic batches, and hands out immutable snapshots for searching.

mod error;
mod graph;
mod store;

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Connection, ConnectionInput, Station, StationInput};

pub use error::{IndexError, StoreError};
pub use graph::{GraphUpdate, StationGraph};
pub use store::{MemoryStore, StationStore};

/// Counts from a bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub stations: usize,
    pub connections: usize,
}

/// Station index over an injected store.
#[derive(Debug, Default)]
pub struct StationIndex<S = MemoryStore> {
    store: S,
}

impl<S: StationStore> StationIndex<S> {
    /// Create an index over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Insert or replace a station, keyed by id.
    pub fn upsert_station(&self, input: StationInput) -> Result<(), IndexError> {
        let station = Station::try_from(input)?;
        debug!(station = %station.id, "upserting station");
        self.store.apply(vec![GraphUpdate::Station(station)])
    }

    /// Insert or replace a connection, keyed by station pair and line.
    ///
    /// Both endpoints must already be present.
    pub fn upsert_connection(&self, input: ConnectionInput) -> Result<(), IndexError> {
        let connection = Connection::try_from(input)?;
        debug!(
            from = %connection.from,
            to = %connection.to,
            line = %connection.line,
            "upserting connection"
        );
        self.store.apply(vec![GraphUpdate::Connection(connection)])
    }

    /// Import stations then connections as a single atomic batch.
    ///
    /// The first invalid record aborts the whole import.
    pub fn import(
        &self,
        stations: Vec<StationInput>,
        connections: Vec<ConnectionInput>,
    ) -> Result<ImportSummary, IndexError> {
        let summary = ImportSummary {
            stations: stations.len(),
            connections: connections.len(),
        };

        let mut updates = Vec::with_capacity(summary.stations + summary.connections);
        for input in stations {
            updates.push(GraphUpdate::Station(Station::try_from(input)?));
        }
        for input in connections {
            updates.push(GraphUpdate::Connection(Connection::try_from(input)?));
        }

        self.store.apply(updates)?;
        info!(
            stations = summary.stations,
            connections = summary.connections,
            "imported station graph"
        );
        Ok(summary)
    }

    /// Look up a station by id.
    ///
    /// An unknown id is `Ok(None)`, not an error.
    pub fn get_station_by_id(&self, id: &str) -> Result<Option<Station>, IndexError> {
        let snapshot = self.store.snapshot()?;
        Ok(snapshot.station(id).cloned())
    }

    /// Returns the current graph snapshot.
    pub fn snapshot(&self) -> Result<Arc<StationGraph>, StoreError> {
        self.store.snapshot()
    }
}
