//! Trip model definition.

use jiff::civil;
use serde::{Deserialize, Serialize};

use super::ChillLevel;

/// A bounded travel plan.
///
/// Trips are created as a side effect of a successful generation run and are
/// immutable afterwards except by full replacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: u64,

    /// Free-text destination
    pub destination: String,

    /// First calendar day of the trip, no time component
    pub start_date: civil::Date,

    /// Trip length in days, always positive
    pub days: u16,

    /// Pacing preference; influences generation only
    pub chill_level: ChillLevel,
}

/// A trip awaiting insertion; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDraft {
    pub destination: String,
    pub start_date: civil::Date,
    pub days: u16,
    pub chill_level: ChillLevel,
}

impl TripDraft {
    /// Materializes the draft into a trip with the given identifier.
    pub(crate) fn into_trip(self, id: u64) -> Trip {
        Trip {
            id,
            destination: self.destination,
            start_date: self.start_date,
            days: self.days,
            chill_level: self.chill_level,
        }
    }
}
