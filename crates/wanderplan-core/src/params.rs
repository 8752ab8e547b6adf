//! Parameter structures for itinerary operations.
//!
//! Interface-agnostic parameter structs passed into the store and the
//! generation pipeline. Validation happens here, before any store mutation
//! or network call: a form with an unresolved location (no coordinates)
//! never reaches the provider layer.

use jiff::civil;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WanderError};
use crate::models::{ChillLevel, Coordinates, PhotoRef, SpotType};

/// Parameters for saving a standalone place from the search box.
///
/// Produces a spot with no trip affiliation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveSpot {
    /// Display name, usually the selected suggestion's full name
    pub name: String,
    /// Resolved location; `None` until a suggestion has been picked
    pub coordinates: Option<Coordinates>,
    /// Optional website URL
    pub website: Option<String>,
}

impl SaveSpot {
    /// Validate the parameters and return the resolved coordinates.
    ///
    /// # Errors
    ///
    /// * `WanderError::InvalidInput` - when the name is empty or the
    ///   location is unresolved or out of range
    pub fn validate(&self) -> Result<Coordinates> {
        if self.name.trim().is_empty() {
            return Err(WanderError::invalid_input("name", "A place name is required"));
        }
        require_coordinates(self.coordinates)
    }
}

/// Parameters for adding an event to an existing trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEvent {
    /// Trip the event belongs to
    pub trip_id: u64,
    /// Display name of the event
    pub name: String,
    /// Resolved location; `None` until a suggestion has been picked
    pub coordinates: Option<Coordinates>,
    /// Itinerary stop or accommodation; other spot types are rejected
    pub event_type: SpotType,
    /// Calendar day of the event
    pub date: Option<civil::Date>,
    /// Time of day; defaults to 09:00 when a date is given without one
    pub time: Option<civil::Time>,
}

impl AddEvent {
    /// Validate the parameters and return the resolved coordinates.
    ///
    /// # Errors
    ///
    /// * `WanderError::InvalidInput` - when the name is empty, the location
    ///   is unresolved or out of range, or the event type is neither an
    ///   itinerary stop nor an accommodation
    pub fn validate(&self) -> Result<Coordinates> {
        if self.name.trim().is_empty() {
            return Err(WanderError::invalid_input("name", "An event name is required"));
        }
        if !matches!(
            self.event_type,
            SpotType::Itinerary | SpotType::Accommodation
        ) {
            return Err(WanderError::invalid_input(
                "event_type",
                format!(
                    "Events must be 'itinerary' or 'accommodation', got '{}'",
                    self.event_type.as_str()
                ),
            ));
        }
        require_coordinates(self.coordinates)
    }
}

/// Partial update applied to an existing spot.
///
/// `Some` fields replace the stored value; `None` fields are left untouched,
/// so editing a description never clears the scheduled time and vice versa.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSpot {
    /// Updated free-text description
    pub description: Option<String>,
    /// Updated scheduled instant
    pub itinerary_time: Option<Timestamp>,
    /// Updated visited date
    pub visited_date: Option<civil::Date>,
    /// Updated website URL
    pub website: Option<String>,
    /// Replacement photo sequence (append/remove go through dedicated ops)
    pub photos: Option<Vec<PhotoRef>>,
}

/// Request driving one itinerary generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Free-text destination
    pub destination: String,
    /// Trip length in days, must be positive
    pub days: u16,
    /// Pacing preference forwarded to the provider
    pub chill_level: ChillLevel,
    /// First calendar day of the trip
    pub start_date: civil::Date,
    /// Optional reference images forwarded opaquely to the provider
    #[serde(default)]
    pub images: Vec<PhotoRef>,
}

impl TripRequest {
    /// Validate the request before any provider call is made.
    ///
    /// # Errors
    ///
    /// * `WanderError::InvalidInput` - when the destination is empty or the
    ///   day count is zero
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(WanderError::invalid_input(
                "destination",
                "A destination is required",
            ));
        }
        if self.days == 0 {
            return Err(WanderError::invalid_input(
                "days",
                "Trip length must be at least one day",
            ));
        }
        Ok(())
    }
}

fn require_coordinates(coordinates: Option<Coordinates>) -> Result<Coordinates> {
    let coordinates = coordinates.ok_or_else(|| {
        WanderError::invalid_input(
            "coordinates",
            "Select a location from the suggestions to resolve its coordinates",
        )
    })?;
    if !coordinates.in_range() {
        return Err(WanderError::invalid_input(
            "coordinates",
            format!(
                "Coordinates ({}, {}) are outside the valid range",
                coordinates.lat, coordinates.lng
            ),
        ));
    }
    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_spot_requires_resolved_location() {
        let params = SaveSpot {
            name: "Jardim da Estrela".to_string(),
            coordinates: None,
            website: None,
        };

        match params.validate().unwrap_err() {
            WanderError::InvalidInput { field, .. } => assert_eq!(field, "coordinates"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_save_spot_requires_name() {
        let params = SaveSpot {
            name: "   ".to_string(),
            coordinates: Some(Coordinates::new(38.7, -9.1)),
            website: None,
        };

        match params.validate().unwrap_err() {
            WanderError::InvalidInput { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_save_spot_rejects_out_of_range_coordinates() {
        let params = SaveSpot {
            name: "Nowhere".to_string(),
            coordinates: Some(Coordinates::new(123.0, 0.0)),
            website: None,
        };

        assert!(params.validate().is_err());
    }

    #[test]
    fn test_add_event_rejects_saved_place_types() {
        let params = AddEvent {
            trip_id: 1,
            name: "Evening market".to_string(),
            coordinates: Some(Coordinates::new(38.7, -9.1)),
            event_type: SpotType::WantToVisit,
            date: None,
            time: None,
        };

        match params.validate().unwrap_err() {
            WanderError::InvalidInput { field, .. } => assert_eq!(field, "event_type"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_add_event_accepts_accommodation() {
        let params = AddEvent {
            trip_id: 1,
            name: "Grand Hotel".to_string(),
            coordinates: Some(Coordinates::new(38.7, -9.1)),
            event_type: SpotType::Accommodation,
            date: Some(civil::date(2025, 6, 2)),
            time: None,
        };

        let coordinates = params.validate().expect("valid event");
        assert_eq!(coordinates, Coordinates::new(38.7, -9.1));
    }

    #[test]
    fn test_trip_request_validation() {
        let mut request = TripRequest {
            destination: "Lisbon".to_string(),
            days: 3,
            chill_level: ChillLevel::Balanced,
            start_date: civil::date(2025, 6, 1),
            images: vec![],
        };
        assert!(request.validate().is_ok());

        request.days = 0;
        match request.validate().unwrap_err() {
            WanderError::InvalidInput { field, .. } => assert_eq!(field, "days"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }

        request.days = 3;
        request.destination = "".to_string();
        assert!(request.validate().is_err());
    }
}
