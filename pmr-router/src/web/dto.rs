//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Connection, Fare, Itinerary, Station, Zone};
use crate::search::NearbyStation;

/// Query for name search.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query (matches name or id)
    pub q: String,

    /// Maximum results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// Stations matching a name search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<Station>,
}

/// Query for nearby searches.
#[derive(Debug, Deserialize)]
pub struct NearbyRequest {
    pub lat: f64,
    pub lon: f64,

    /// Search radius in meters (default 1000)
    pub radius: Option<f64>,

    /// Maximum results (default 10, capped at 50). Ignored by the
    /// accessible-only endpoint, which has a fixed cap.
    pub limit: Option<usize>,
}

/// Stations near a point, nearest first.
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    pub stations: Vec<NearbyStation>,
}

/// Query for a route search.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station id
    pub from: String,

    /// Destination station id
    pub to: String,

    /// Maximum connections in the path (defaults to the server setting)
    pub max_transfers: Option<usize>,

    /// Only use accessible stations and connections (default true)
    pub require_accessibility: Option<bool>,
}

/// Result of a route search.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteResponse {
    Found { itinerary: ItineraryResult },
    NoRoute,
}

/// An itinerary as returned to clients.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    pub stations: Vec<Station>,
    pub connections: Vec<Connection>,

    /// Seconds
    pub total_duration: u64,

    /// Meters
    pub total_distance: u64,

    /// Euros
    pub estimated_price: Fare,

    /// Number of connections taken
    pub transfers: usize,

    /// Distinct fare zones touched, ascending
    pub zones: Vec<Zone>,
}

impl ItineraryResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            stations: itinerary.stations().to_vec(),
            connections: itinerary.connections().to_vec(),
            total_duration: itinerary.total_duration(),
            total_distance: itinerary.total_distance(),
            estimated_price: itinerary.estimated_price(),
            transfers: itinerary.transfers(),
            zones: itinerary.zones(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionInput, StationInput, StationKind};

    fn station(id: &str, zone: u32) -> Station {
        Station::try_from(StationInput {
            id: id.to_string(),
            name: format!("Station {id}"),
            lat: 48.85,
            lon: 2.35,
            accessible: true,
            zone: Some(zone),
            kind: StationKind::Metro,
        })
        .unwrap()
    }

    fn connection(from: &str, to: &str) -> Connection {
        Connection::try_from(ConnectionInput {
            from_id: from.to_string(),
            to_id: to.to_string(),
            line: "M1".to_string(),
            duration_seconds: 90,
            distance_meters: 700,
            accessible: true,
        })
        .unwrap()
    }

    #[test]
    fn no_route_serializes_as_status_only() {
        let json = serde_json::to_value(RouteResponse::NoRoute).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "no_route" }));
    }

    #[test]
    fn found_route_carries_itinerary() {
        let itinerary = Itinerary::new(
            vec![station("A", 1), station("B", 2)],
            vec![connection("A", "B")],
            Fare::from_cents(420),
        )
        .unwrap();

        let response = RouteResponse::Found {
            itinerary: ItineraryResult::from_itinerary(&itinerary),
        };
        let json = serde_json::to_value(response).unwrap();

        assert_eq!(json["status"], "found");
        assert_eq!(json["itinerary"]["total_duration"], 90);
        assert_eq!(json["itinerary"]["total_distance"], 700);
        assert_eq!(json["itinerary"]["estimated_price"], 4.2);
        assert_eq!(json["itinerary"]["transfers"], 1);
        assert_eq!(json["itinerary"]["zones"], serde_json::json!([1, 2]));
        assert_eq!(json["itinerary"]["stations"][0]["id"], "A");
        assert_eq!(json["itinerary"]["connections"][0]["from_id"], "A");
    }
}
