//! Station identifiers and records.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::coords::Coordinates;
use super::error::DomainError;

/// A non-empty station identifier.
///
/// Identifiers are opaque strings supplied by the import step. The only
/// constraint is that they contain at least one non-whitespace character.
///
/// # Examples
///
/// ```
/// use pmr_router::domain::StationId;
///
/// let id = StationId::parse("gare-du-nord").unwrap();
/// assert_eq!(id.as_str(), "gare-du-nord");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.trim().is_empty() {
            return Err(DomainError::InvalidStation {
                id: s.to_string(),
                reason: "id must not be empty",
            });
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fare zone. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Zone(u32);

impl Zone {
    /// Parse a zone number. Zero is rejected.
    pub fn new(zone: u32) -> Result<Self, DomainError> {
        if zone == 0 {
            return Err(DomainError::InvalidZone);
        }
        Ok(Self(zone))
    }

    /// Returns the zone number.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u32> for Zone {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Zone> for u32 {
    fn from(zone: Zone) -> Self {
        zone.0
    }
}

/// Transport mode served at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationKind {
    Metro,
    Train,
    Bus,
    Tram,
}

/// A validated transit station.
///
/// Construct from raw import data with `Station::try_from(StationInput)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    #[serde(flatten)]
    pub location: Coordinates,
    /// Whether the station is usable by PMR travellers.
    pub accessible: bool,
    pub zone: Zone,
    #[serde(rename = "type")]
    pub kind: StationKind,
}

/// Unvalidated station data as it arrives from an import or an API call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationInput {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub accessible: bool,
    /// Defaults to zone 1 when absent.
    #[serde(default)]
    pub zone: Option<u32>,
    #[serde(rename = "type")]
    pub kind: StationKind,
}

impl TryFrom<StationInput> for Station {
    type Error = DomainError;

    fn try_from(input: StationInput) -> Result<Self, Self::Error> {
        let id = StationId::parse(&input.id)?;

        let location =
            Coordinates::new(input.lat, input.lon).map_err(|e| DomainError::InvalidStation {
                id: input.id.clone(),
                reason: e.reason(),
            })?;

        let zone = match input.zone {
            Some(z) => Zone::new(z).map_err(|_| DomainError::InvalidStation {
                id: input.id.clone(),
                reason: "zone must be at least 1",
            })?,
            None => Zone::default(),
        };

        Ok(Station {
            id,
            name: input.name,
            location,
            accessible: input.accessible,
            zone,
            kind: input.kind,
        })
    }
}

impl From<&Station> for StationInput {
    fn from(station: &Station) -> Self {
        StationInput {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
            lat: station.location.lat(),
            lon: station.location.lon(),
            accessible: station.accessible,
            zone: Some(station.zone.get()),
            kind: station.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: &str, lat: f64, lon: f64, zone: Option<u32>) -> StationInput {
        StationInput {
            id: id.to_string(),
            name: "Test".to_string(),
            lat,
            lon,
            accessible: true,
            zone,
            kind: StationKind::Metro,
        }
    }

    #[test]
    fn station_id_rejects_blank() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse(" \t").is_err());
        assert!(StationId::parse("A").is_ok());
    }

    #[test]
    fn station_id_display_and_debug() {
        let id = StationId::parse("CHT").unwrap();
        assert_eq!(format!("{}", id), "CHT");
        assert_eq!(format!("{:?}", id), "StationId(CHT)");
    }

    #[test]
    fn zone_defaults_to_one() {
        let station = Station::try_from(input("A", 48.0, 2.0, None)).unwrap();
        assert_eq!(station.zone.get(), 1);
    }

    #[test]
    fn zone_zero_rejected() {
        let err = Station::try_from(input("A", 48.0, 2.0, Some(0))).unwrap_err();
        assert!(matches!(err, DomainError::InvalidStation { .. }));
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        assert!(Station::try_from(input("A", 90.5, 2.0, None)).is_err());
        assert!(Station::try_from(input("A", -90.5, 2.0, None)).is_err());
        assert!(Station::try_from(input("A", 10.0, 180.5, None)).is_err());
        assert!(Station::try_from(input("A", 10.0, -180.5, None)).is_err());
        assert!(Station::try_from(input("A", f64::NAN, 0.0, None)).is_err());
    }

    #[test]
    fn boundary_coordinates_accepted() {
        assert!(Station::try_from(input("A", 90.0, 180.0, None)).is_ok());
        assert!(Station::try_from(input("A", -90.0, -180.0, None)).is_ok());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&StationKind::Tram).unwrap();
        assert_eq!(json, "\"tram\"");
    }

    #[test]
    fn input_deserializes_without_zone() {
        let json = r#"{"id":"A","name":"Alpha","lat":1.0,"lon":2.0,"accessible":false,"type":"bus"}"#;
        let parsed: StationInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.zone, None);
        assert_eq!(parsed.kind, StationKind::Bus);
    }

    #[test]
    fn station_serializes_flat() {
        let station = Station::try_from(input("A", 48.5, 2.25, Some(3))).unwrap();
        let value = serde_json::to_value(&station).unwrap();
        assert_eq!(value["id"], "A");
        assert_eq!(value["lat"], 48.5);
        assert_eq!(value["lon"], 2.25);
        assert_eq!(value["zone"], 3);
        assert_eq!(value["type"], "metro");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range coordinate pair produces a station
        #[test]
        fn valid_coordinates_accepted(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let input = StationInput {
                id: "S".to_string(),
                name: "S".to_string(),
                lat,
                lon,
                accessible: true,
                zone: None,
                kind: StationKind::Train,
            };
            prop_assert!(Station::try_from(input).is_ok());
        }

        /// Latitudes beyond the poles are always rejected
        #[test]
        fn out_of_range_latitude_rejected(lat in 90.0001f64..1000.0, sign in prop::bool::ANY) {
            let lat = if sign { lat } else { -lat };
            let input = StationInput {
                id: "S".to_string(),
                name: "S".to_string(),
                lat,
                lon: 0.0,
                accessible: true,
                zone: None,
                kind: StationKind::Train,
            };
            prop_assert!(Station::try_from(input).is_err());
        }

        /// Converting back to input and re-validating is lossless
        #[test]
        fn input_roundtrip(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0, zone in 1u32..20, accessible in prop::bool::ANY) {
            let station = Station::try_from(StationInput {
                id: "S".to_string(),
                name: "Somewhere".to_string(),
                lat,
                lon,
                accessible,
                zone: Some(zone),
                kind: StationKind::Tram,
            }).unwrap();
            let again = Station::try_from(StationInput::from(&station)).unwrap();
            prop_assert_eq!(again, station);
        }
    }
}
