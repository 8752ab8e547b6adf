//! Spot lifecycle operations.

use jiff::civil;
use log::debug;

use super::EntityStore;
use crate::error::{Result, WanderError};
use crate::models::{PhotoRef, Spot, SpotDraft, SpotType};
use crate::params::{AddEvent, SaveSpot, UpdateSpot};

/// Default time of day for manually added events without an explicit time.
const DEFAULT_EVENT_TIME: civil::Time = civil::Time::constant(9, 0, 0, 0);

impl EntityStore {
    /// Saves a standalone place with no trip affiliation.
    ///
    /// # Errors
    ///
    /// * `WanderError::InvalidInput` - when the parameters fail validation
    pub fn save_spot(&mut self, params: &SaveSpot) -> Result<Spot> {
        let coordinates = params.validate()?;
        let draft = SpotDraft {
            trip_id: None,
            name: params.name.clone(),
            description: Some("Saved place".to_string()),
            spot_type: SpotType::WantToVisit,
            coordinates,
            itinerary_time: None,
            visited_date: None,
            website: params.website.clone(),
            photos: Vec::new(),
            is_check_in: None,
        };
        Ok(self.insert_spot(draft).clone())
    }

    /// Adds a manual event (itinerary stop or base camp) to a trip.
    ///
    /// The event's civil date and time are resolved to an instant in the
    /// store's time zone; the time of day defaults to 09:00 when a date is
    /// given without one.
    ///
    /// # Errors
    ///
    /// * `WanderError::InvalidInput` - when the parameters fail validation
    /// * `WanderError::TripNotFound` - when the trip does not exist
    /// * `WanderError::Calendar` - when the civil date cannot be resolved
    pub fn add_event(&mut self, params: &AddEvent) -> Result<Spot> {
        let coordinates = params.validate()?;
        if self.trip(params.trip_id).is_none() {
            return Err(WanderError::TripNotFound { id: params.trip_id });
        }

        let itinerary_time = match params.date {
            Some(date) => {
                let time = params.time.unwrap_or(DEFAULT_EVENT_TIME);
                let zoned = date.to_datetime(time).to_zoned(self.time_zone().clone())?;
                Some(zoned.timestamp())
            }
            None => None,
        };

        let (description, is_check_in) = if params.event_type == SpotType::Accommodation {
            ("Manual Base Camp", Some(true))
        } else {
            ("User added activity", None)
        };

        let draft = SpotDraft {
            trip_id: Some(params.trip_id),
            name: params.name.clone(),
            description: Some(description.to_string()),
            spot_type: params.event_type,
            coordinates,
            itinerary_time,
            visited_date: None,
            website: None,
            photos: Vec::new(),
            is_check_in,
        };
        Ok(self.insert_spot(draft).clone())
    }

    /// Merges a partial update into an existing spot.
    ///
    /// Only `Some` fields replace stored values; editing one field never
    /// clears another.
    ///
    /// # Errors
    ///
    /// * `WanderError::SpotNotFound` - when the spot does not exist
    pub fn update_spot(&mut self, id: u64, params: &UpdateSpot) -> Result<Spot> {
        let spot = self
            .spots
            .iter_mut()
            .find(|spot| spot.id == id)
            .ok_or(WanderError::SpotNotFound { id })?;

        if let Some(description) = &params.description {
            spot.description = Some(description.clone());
        }
        if let Some(itinerary_time) = params.itinerary_time {
            spot.itinerary_time = Some(itinerary_time);
        }
        if let Some(visited_date) = params.visited_date {
            spot.visited_date = Some(visited_date);
        }
        if let Some(website) = &params.website {
            spot.website = Some(website.clone());
        }
        if let Some(photos) = &params.photos {
            spot.photos = photos.clone();
        }

        Ok(spot.clone())
    }

    /// Deletes a spot, clearing a dangling active selection.
    ///
    /// Returns `false` when the id is unknown; deleting an unknown spot is
    /// a no-op signal, not an error.
    pub fn delete_spot(&mut self, id: u64) -> bool {
        let before = self.spots.len();
        self.spots.retain(|spot| spot.id != id);
        let removed = self.spots.len() < before;

        if removed {
            debug!("deleted spot {id}");
            if self.active_spot_id == Some(id) {
                self.active_spot_id = None;
            }
        }
        removed
    }

    /// Appends a photo to a spot, returning the new photo count.
    ///
    /// # Errors
    ///
    /// * `WanderError::SpotNotFound` - when the spot does not exist
    pub fn push_photo(&mut self, id: u64, photo: PhotoRef) -> Result<usize> {
        let spot = self
            .spots
            .iter_mut()
            .find(|spot| spot.id == id)
            .ok_or(WanderError::SpotNotFound { id })?;
        spot.photos.push(photo);
        Ok(spot.photos.len())
    }

    /// Removes the photo at `index` from a spot, returning it.
    ///
    /// # Errors
    ///
    /// * `WanderError::SpotNotFound` - when the spot does not exist
    /// * `WanderError::InvalidInput` - when the index is out of bounds
    pub fn remove_photo(&mut self, id: u64, index: usize) -> Result<PhotoRef> {
        let spot = self
            .spots
            .iter_mut()
            .find(|spot| spot.id == id)
            .ok_or(WanderError::SpotNotFound { id })?;
        if index >= spot.photos.len() {
            return Err(WanderError::invalid_input(
                "index",
                format!(
                    "Photo index {index} out of bounds for {} photos",
                    spot.photos.len()
                ),
            ));
        }
        Ok(spot.photos.remove(index))
    }

    /// Looks up a spot by id.
    pub fn spot(&self, id: u64) -> Option<&Spot> {
        self.spots.iter().find(|spot| spot.id == id)
    }

    /// All spots in insertion order.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Spots belonging to a trip, in insertion order.
    pub fn spots_for_trip(&self, trip_id: u64) -> Vec<&Spot> {
        self.spots
            .iter()
            .filter(|spot| spot.trip_id == Some(trip_id))
            .collect()
    }

    /// Standalone saved places: no trip affiliation and not itinerary-typed.
    ///
    /// Itinerary-only entries never appear in the saved view, even when
    /// orphaned by a trip deletion.
    pub fn unaffiliated_spots(&self) -> Vec<&Spot> {
        self.spots
            .iter()
            .filter(|spot| spot.trip_id.is_none() && spot.spot_type != SpotType::Itinerary)
            .collect()
    }

    pub(crate) fn insert_spot(&mut self, draft: SpotDraft) -> &Spot {
        let id = self.allocate_spot_id();
        self.spots.push(draft.into_spot(id));
        self.spots.last().expect("spot was just inserted")
    }
}
