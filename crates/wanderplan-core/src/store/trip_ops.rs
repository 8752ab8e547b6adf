//! Trip lifecycle operations and generated-batch application.

use log::debug;

use super::EntityStore;
use crate::models::{SpotDraft, Trip, TripDraft};

impl EntityStore {
    /// Looks up a trip by id.
    pub fn trip(&self, id: u64) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id == id)
    }

    /// All trips in creation order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Applies one successful generation run: inserts the trip, attaches and
    /// inserts every spot, and selects the new trip.
    ///
    /// Callers must fully materialize the drafts before calling, so the
    /// batch is all-or-nothing: nothing here can fail, and a generation
    /// failure upstream leaves the store untouched.
    pub fn apply_generated(&mut self, trip: TripDraft, spots: Vec<SpotDraft>) -> u64 {
        let trip_id = self.allocate_trip_id();
        debug!(
            "applying generated trip {trip_id} to {} with {} spots",
            trip.destination,
            spots.len()
        );
        self.trips.push(trip.into_trip(trip_id));

        for mut draft in spots {
            draft.trip_id = Some(trip_id);
            self.insert_spot(draft);
        }

        self.selected_trip_id = Some(trip_id);
        trip_id
    }

    /// Deletes a trip.
    ///
    /// Spots referencing the trip are kept and retain their (now dangling)
    /// `trip_id`; there is no cascading delete. A matching trip selection is
    /// cleared. Returns `false` when the id is unknown.
    pub fn delete_trip(&mut self, id: u64) -> bool {
        let before = self.trips.len();
        self.trips.retain(|trip| trip.id != id);
        let removed = self.trips.len() < before;

        if removed {
            debug!("deleted trip {id}, spots are retained");
            if self.selected_trip_id == Some(id) {
                self.selected_trip_id = None;
            }
        }
        removed
    }
}
