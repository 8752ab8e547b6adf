//! Spot model definition and the draft form used for insertion.

use jiff::civil;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Coordinates, PhotoRef, SpotType};

/// A single named place with a location and a classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Spot {
    /// Unique identifier, immutable once created
    pub id: u64,

    /// Owning trip, if any; standalone "saved" places have none
    pub trip_id: Option<u64>,

    /// Display name of the place
    pub name: String,

    /// Free-text description
    pub description: Option<String>,

    /// Classification of the spot
    pub spot_type: SpotType,

    /// Geographic location
    pub coordinates: Coordinates,

    /// Scheduled instant; doubles as accommodation check-in time.
    /// Absence sorts before any present value.
    pub itinerary_time: Option<Timestamp>,

    /// Calendar date the place was visited
    pub visited_date: Option<civil::Date>,

    /// Official website URL
    pub website: Option<String>,

    /// Attached photos, insertion order = display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<PhotoRef>,

    /// First night at this lodging; meaningful only for accommodations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_check_in: Option<bool>,
}

/// A spot awaiting insertion; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotDraft {
    pub trip_id: Option<u64>,
    pub name: String,
    pub description: Option<String>,
    pub spot_type: SpotType,
    pub coordinates: Coordinates,
    pub itinerary_time: Option<Timestamp>,
    pub visited_date: Option<civil::Date>,
    pub website: Option<String>,
    pub photos: Vec<PhotoRef>,
    pub is_check_in: Option<bool>,
}

impl SpotDraft {
    /// Materializes the draft into a spot with the given identifier.
    pub(crate) fn into_spot(self, id: u64) -> Spot {
        Spot {
            id,
            trip_id: self.trip_id,
            name: self.name,
            description: self.description,
            spot_type: self.spot_type,
            coordinates: self.coordinates,
            itinerary_time: self.itinerary_time,
            visited_date: self.visited_date,
            website: self.website,
            photos: self.photos,
            is_check_in: self.is_check_in,
        }
    }
}
