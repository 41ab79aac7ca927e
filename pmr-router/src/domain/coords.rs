//! WGS84 coordinates and great-circle distance.

use serde::Serialize;

use super::error::DomainError;

/// Earth mean radius in meters, used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A validated latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(DomainError::InvalidCoordinate {
                lat,
                lon,
                reason: "coordinates must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinate {
                lat,
                lon,
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvalidCoordinate {
                lat,
                lon,
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance in meters using the haversine formula.
    ///
    /// Treats the Earth as a sphere of radius [`EARTH_RADIUS_METERS`], so
    /// results deviate from the ellipsoidal geodesic by up to about 0.5%.
    pub fn distance_meters(&self, other: &Coordinates) -> f64 {
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();
        let a = (dlat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_METERS * c
    }
}
