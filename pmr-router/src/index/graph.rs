//! Immutable station graph snapshot.
//!
//! A `StationGraph` owns the station set, the connection set, and the
//! adjacency lists derived from them. Stores hand out snapshots wrapped in
//! `Arc` so readers never hold a lock while searching.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{Connection, ConnectionKey, DomainError, Station, StationId};

/// A single change to the graph.
#[derive(Debug, Clone)]
pub enum GraphUpdate {
    Station(Station),
    Connection(Connection),
}

/// Stations, connections and adjacency at one point in time.
#[derive(Debug, Clone, Default)]
pub struct StationGraph {
    stations: HashMap<StationId, Station>,
    connections: BTreeMap<ConnectionKey, Connection>,
    /// Connections touching each station, sorted by (other end, line).
    adjacency: HashMap<StationId, Vec<Connection>>,
}

impl StationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a station by id.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Returns true if the station exists.
    pub fn contains(&self, id: &str) -> bool {
        self.stations.contains_key(id)
    }

    /// Iterate over all stations in unspecified order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Iterate over all connections, ordered by key.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Connections that can be walked from `id`, in either direction.
    pub fn connections_from(&self, id: &str) -> &[Connection] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Apply one update, validating it against the current contents.
    ///
    /// On error the graph is left unchanged.
    pub fn apply(&mut self, update: GraphUpdate) -> Result<(), DomainError> {
        match update {
            GraphUpdate::Station(station) => {
                self.upsert_station(station);
                Ok(())
            }
            GraphUpdate::Connection(connection) => self.upsert_connection(connection),
        }
    }

    /// Insert or replace a station. Existing connections are kept.
    pub fn upsert_station(&mut self, station: Station) {
        self.stations.insert(station.id.clone(), station);
    }

    /// Insert or replace a connection keyed by station pair and line.
    pub fn upsert_connection(&mut self, connection: Connection) -> Result<(), DomainError> {
        for endpoint in [&connection.from, &connection.to] {
            if !self.stations.contains_key(endpoint) {
                return Err(DomainError::InvalidConnection {
                    from: connection.from.to_string(),
                    to: connection.to.to_string(),
                    reason: "both endpoints must reference existing stations",
                });
            }
        }

        let key = connection.key();
        for endpoint in [connection.from.clone(), connection.to.clone()] {
            let list = self.adjacency.entry(endpoint.clone()).or_default();
            list.retain(|c| c.key() != key);
            list.push(connection.clone());
            list.sort_by(|a, b| {
                let a_end = a.other_end(&endpoint);
                let b_end = b.other_end(&endpoint);
                a_end.cmp(&b_end).then_with(|| a.line.cmp(&b.line))
            });
        }
        self.connections.insert(key, connection);

        Ok(())
    }
}
