//! Connections between stations.
//!
//! A `Connection` is an undirected edge of the station graph. It can be
//! walked in either direction; `from`/`to` only record how it was imported.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::station::StationId;

/// A validated, undirected connection between two distinct stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    #[serde(rename = "from_id")]
    pub from: StationId,
    #[serde(rename = "to_id")]
    pub to: StationId,
    pub line: String,
    pub duration_seconds: u32,
    pub distance_meters: u32,
    /// Whether the connection itself (lifts, ramps, level boarding) is PMR usable.
    pub accessible: bool,
}

/// Identity of a connection for upsert purposes.
///
/// The station pair is stored in sorted order, so A-B and B-A on the same
/// line are the same connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionKey {
    low: StationId,
    high: StationId,
    line: String,
}

impl Connection {
    /// Returns the upsert identity of this connection.
    pub fn key(&self) -> ConnectionKey {
        let (low, high) = if self.from <= self.to {
            (self.from.clone(), self.to.clone())
        } else {
            (self.to.clone(), self.from.clone())
        };
        ConnectionKey {
            low,
            high,
            line: self.line.clone(),
        }
    }

    /// Returns the station at the other end when traversing from `station`.
    ///
    /// Returns `None` if `station` is not an endpoint.
    pub fn other_end(&self, station: &StationId) -> Option<&StationId> {
        if &self.from == station {
            Some(&self.to)
        } else if &self.to == station {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Returns true if this connection joins `a` and `b` in either direction.
    pub fn joins(&self, a: &StationId, b: &StationId) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }
}

/// Unvalidated connection data from an import or an API call.
///
/// Negative durations and distances are unrepresentable and fail at
/// deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionInput {
    pub from_id: String,
    pub to_id: String,
    pub line: String,
    pub duration_seconds: u32,
    pub distance_meters: u32,
    pub accessible: bool,
}

impl TryFrom<ConnectionInput> for Connection {
    type Error = DomainError;

    /// Validates identifiers and rejects self-loops.
    ///
    /// Whether both endpoints exist is checked by the index, which owns the
    /// station set.
    fn try_from(input: ConnectionInput) -> Result<Self, Self::Error> {
        let invalid = |reason| DomainError::InvalidConnection {
            from: input.from_id.clone(),
            to: input.to_id.clone(),
            reason,
        };

        let from = StationId::parse(&input.from_id).map_err(|_| invalid("from_id must not be empty"))?;
        let to = StationId::parse(&input.to_id).map_err(|_| invalid("to_id must not be empty"))?;

        if from == to {
            return Err(invalid("a connection cannot join a station to itself"));
        }

        Ok(Connection {
            from,
            to,
            line: input.line,
            duration_seconds: input.duration_seconds,
            distance_meters: input.distance_meters,
            accessible: input.accessible,
        })
    }
}
