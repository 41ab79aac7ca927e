//! Itinerary type.
//!
//! An `Itinerary` is the assembled answer to a route query: the ordered
//! stations walked, the connections taken between them, and the totals
//! the booking flow needs.

use std::collections::BTreeSet;

use serde::Serialize;

use super::{Connection, DomainError, Fare, Station, Zone};

/// A complete route between two stations.
///
/// # Invariants
///
/// - At least two stations
/// - Exactly one connection between each consecutive pair of stations
/// - Totals equal the sums over the connections
#[derive(Debug, Clone, Serialize)]
pub struct Itinerary {
    stations: Vec<Station>,
    connections: Vec<Connection>,
    total_duration: u64,
    total_distance: u64,
    estimated_price: Fare,
}

impl Itinerary {
    /// Assemble an itinerary from a station path and its connections.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - Fewer than two stations are given
    /// - The connection count isn't one less than the station count
    /// - A connection doesn't join its neighbouring stations
    pub fn new(
        stations: Vec<Station>,
        connections: Vec<Connection>,
        estimated_price: Fare,
    ) -> Result<Self, DomainError> {
        if stations.len() < 2 {
            return Err(DomainError::InvalidItinerary(
                "an itinerary needs at least two stations",
            ));
        }
        if connections.len() + 1 != stations.len() {
            return Err(DomainError::InvalidItinerary(
                "connection count must be one less than station count",
            ));
        }
        for (pair, connection) in stations.windows(2).zip(&connections) {
            if !connection.joins(&pair[0].id, &pair[1].id) {
                return Err(DomainError::InvalidItinerary(
                    "connection does not join consecutive stations",
                ));
            }
        }

        let total_duration = connections
            .iter()
            .map(|c| u64::from(c.duration_seconds))
            .sum();
        let total_distance = connections
            .iter()
            .map(|c| u64::from(c.distance_meters))
            .sum();

        Ok(Self {
            stations,
            connections,
            total_duration,
            total_distance,
            estimated_price,
        })
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn origin(&self) -> &Station {
        &self.stations[0]
    }

    pub fn destination(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// Total travel time in seconds.
    pub fn total_duration(&self) -> u64 {
        self.total_duration
    }

    /// Total distance in meters.
    pub fn total_distance(&self) -> u64 {
        self.total_distance
    }

    pub fn estimated_price(&self) -> Fare {
        self.estimated_price
    }

    /// Number of connections traversed.
    pub fn transfers(&self) -> usize {
        self.connections.len()
    }

    /// Distinct fare zones touched, ascending.
    pub fn zones(&self) -> Vec<Zone> {
        self.stations
            .iter()
            .map(|s| s.zone)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Station ids along the path.
    pub fn station_ids(&self) -> Vec<&str> {
        self.stations.iter().map(|s| s.id.as_str()).collect()
    }
}
