//! Zone-based fare calculation.
//!
//! The price depends only on how many distinct fare zones the path
//! touches. There is no time-of-day or fare-class modelling.

use std::collections::BTreeSet;

use crate::domain::{Fare, Station};

/// Price by distinct zone count: 1, 2, 3, 4 or more.
/// Zero zones (an empty path) is priced as one.
const FARE_TABLE: [Fare; 4] = [
    Fare::from_cents(210),
    Fare::from_cents(420),
    Fare::from_cents(630),
    Fare::from_cents(840),
];

/// Number of distinct zones among `stations`.
pub fn distinct_zones(stations: &[Station]) -> usize {
    stations
        .iter()
        .map(|s| s.zone)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Fare for travelling through `stations`.
pub fn calculate_price(stations: &[Station]) -> Fare {
    price_for_zones(distinct_zones(stations))
}

/// Fare for a given number of distinct zones.
pub fn price_for_zones(zones: usize) -> Fare {
    let tier = zones.clamp(1, FARE_TABLE.len()) - 1;
    FARE_TABLE[tier]
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// More distinct zones never costs less
        #[test]
        fn monotonic_in_zone_count(a in 0usize..20, b in 0usize..20) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(price_for_zones(lo) <= price_for_zones(hi));
        }

        /// Every price is one of the four table entries
        #[test]
        fn always_a_table_price(zones in 0usize..100) {
            prop_assert!([210, 420, 630, 840].contains(&price_for_zones(zones).cents()));
        }
    }
}
