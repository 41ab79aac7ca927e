//! Nearby-station search by great-circle distance.
//!
//! A linear scan over the snapshot: every station is measured with the
//! haversine formula and kept if it falls inside the radius. Transit-scale
//! station sets are small enough that no spatial index is needed.

use serde::Serialize;
use tracing::debug;

use crate::domain::{Coordinates, DomainError, Station};
use crate::index::{StationGraph, StationIndex, StationStore};

use super::error::SearchError;

/// Default search radius in meters.
pub const DEFAULT_RADIUS_METERS: f64 = 1000.0;

/// Default maximum number of nearby results.
pub const DEFAULT_NEARBY_LIMIT: usize = 10;

/// Fixed result cap for accessible-nearby searches.
pub const ACCESSIBLE_NEARBY_CAP: usize = 10;

/// A station together with its distance from the query point.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyStation {
    #[serde(flatten)]
    pub station: Station,
    pub distance_meters: f64,
}

/// Geospatial queries over a station index.
pub struct GeoSearch<'a, S: StationStore> {
    index: &'a StationIndex<S>,
}

impl<'a, S: StationStore> GeoSearch<'a, S> {
    pub fn new(index: &'a StationIndex<S>) -> Self {
        Self { index }
    }

    /// Stations within `radius_meters` of `(lat, lon)`, nearest first.
    ///
    /// Equal distances are ordered by station id. At most `limit` results.
    pub fn find_nearby(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: f64,
        limit: usize,
    ) -> Result<Vec<NearbyStation>, SearchError> {
        let origin = validate(lat, lon, radius_meters)?;
        let graph = self.index.snapshot()?;
        Ok(nearby_in(&graph, origin, radius_meters, limit, false))
    }

    /// Accessible stations within `radius_meters`, nearest first.
    ///
    /// Always capped at [`ACCESSIBLE_NEARBY_CAP`] results.
    pub fn find_accessible_nearby(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: f64,
    ) -> Result<Vec<NearbyStation>, SearchError> {
        let origin = validate(lat, lon, radius_meters)?;
        let graph = self.index.snapshot()?;
        Ok(nearby_in(
            &graph,
            origin,
            radius_meters,
            ACCESSIBLE_NEARBY_CAP,
            true,
        ))
    }
}

fn validate(lat: f64, lon: f64, radius_meters: f64) -> Result<Coordinates, DomainError> {
    let origin = Coordinates::new(lat, lon)?;
    if !radius_meters.is_finite() || radius_meters < 0.0 {
        return Err(DomainError::InvalidRadius(radius_meters));
    }
    Ok(origin)
}

/// Scan `graph` for stations within the radius.
pub fn nearby_in(
    graph: &StationGraph,
    origin: Coordinates,
    radius_meters: f64,
    limit: usize,
    accessible_only: bool,
) -> Vec<NearbyStation> {
    let mut found: Vec<NearbyStation> = graph
        .stations()
        .filter(|s| !accessible_only || s.accessible)
        .filter_map(|s| {
            let distance = origin.distance_meters(&s.location);
            (distance <= radius_meters).then(|| NearbyStation {
                station: s.clone(),
                distance_meters: distance,
            })
        })
        .collect();

    found.sort_by(|a, b| {
        a.distance_meters
            .total_cmp(&b.distance_meters)
            .then_with(|| a.station.id.cmp(&b.station.id))
    });
    found.truncate(limit);

    debug!(
        lat = origin.lat(),
        lon = origin.lon(),
        radius_meters,
        accessible_only,
        results = found.len(),
        "nearby search"
    );

    found
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{StationInput, StationKind};
    use crate::index::MemoryStore;
    use proptest::prelude::*;

    proptest! {
        /// Results are sorted by distance and all lie within the radius
        #[test]
        fn sorted_and_within_radius(
            points in prop::collection::vec((-0.05f64..0.05, -0.05f64..0.05), 1..40),
            radius in 0.0f64..8000.0,
            limit in 0usize..50,
        ) {
            let index = StationIndex::new(MemoryStore::new());
            let stations = points
                .iter()
                .enumerate()
                .map(|(i, (dlat, dlon))| StationInput {
                    id: format!("S{i}"),
                    name: format!("S{i}"),
                    lat: 43.6 + dlat,
                    lon: 1.44 + dlon,
                    accessible: i % 2 == 0,
                    zone: None,
                    kind: StationKind::Bus,
                })
                .collect();
            index.import(stations, vec![]).unwrap();

            let geo = GeoSearch::new(&index);
            let results = geo.find_nearby(43.6, 1.44, radius, limit).unwrap();

            prop_assert!(results.len() <= limit);
            for r in &results {
                prop_assert!(r.distance_meters <= radius);
            }
            for pair in results.windows(2) {
                prop_assert!(pair[0].distance_meters <= pair[1].distance_meters);
            }
        }
    }
}
