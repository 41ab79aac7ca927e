//! Domain types for the station routing engine.
//!
//! This module contains the validated model of the station graph and the
//! itineraries derived from it. All types enforce their invariants at
//! construction time, so code that receives these types can trust them.

mod connection;
mod coords;
mod error;
mod fare;
mod itinerary;
mod station;

pub use connection::{Connection, ConnectionInput, ConnectionKey};
pub use coords::{Coordinates, EARTH_RADIUS_METERS};
pub use error::DomainError;
pub use fare::Fare;
pub use itinerary::Itinerary;
pub use station::{Station, StationId, StationInput, StationKind, Zone};
