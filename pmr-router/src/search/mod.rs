//! Station lookup: nearby-by-distance and name search.
//!
//! Both searches read an immutable snapshot of the station index and
//! return owned results; they never touch the store's lock during the scan.

mod error;
mod geo;
mod name;

pub use error::SearchError;
pub use geo::{
    ACCESSIBLE_NEARBY_CAP, DEFAULT_NEARBY_LIMIT, DEFAULT_RADIUS_METERS, GeoSearch, NearbyStation,
    nearby_in,
};
pub use name::{DEFAULT_NAME_LIMIT, NameSearch, search_in};
