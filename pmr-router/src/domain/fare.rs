//! Fare amounts.

use std::fmt;

use serde::{Serialize, Serializer};

/// A fare in euro cents.
///
/// Amounts are kept in integer cents so the price table is reproduced
/// exactly. Serializes as a decimal number of euros (e.g. `4.2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fare {
    cents: u32,
}

impl Fare {
    pub const fn from_cents(cents: u32) -> Self {
        Self { cents }
    }

    pub fn cents(self) -> u32 {
        self.cents
    }

    /// Returns the amount in euros.
    pub fn as_euros(self) -> f64 {
        f64::from(self.cents) / 100.0
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Fare {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_euros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_cents() {
        assert_eq!(Fare::from_cents(210).to_string(), "2.10");
        assert_eq!(Fare::from_cents(840).to_string(), "8.40");
        assert_eq!(Fare::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn serializes_as_euros() {
        let json = serde_json::to_string(&Fare::from_cents(420)).unwrap();
        assert_eq!(json, "4.2");
    }
}
