//! In-memory entity store for trips and spots.
//!
//! The store owns all session state: the spot and trip collections, the
//! identifier counters, and the selection references. It is initialized
//! empty at process start and mutated only through the operations defined
//! here and in the per-entity submodules; there is no persistence layer and
//! no teardown.
//!
//! Mutations are synchronous `&mut self` methods, so they apply atomically
//! with respect to the event loop: two mutations never interleave within a
//! single user action.
//!
//! Selections are nullable identifiers resolved by lookup at read time, so
//! they become stale-safe automatically when the referenced entity is
//! deleted; deletion additionally clears a matching selection eagerly.

use jiff::tz::TimeZone;

use crate::models::{Spot, Trip};

pub mod spot_ops;
pub mod trip_ops;


/// Owner of all trip and spot state for one session.
pub struct EntityStore {
    pub(crate) spots: Vec<Spot>,
    pub(crate) trips: Vec<Trip>,
    pub(crate) active_spot_id: Option<u64>,
    pub(crate) selected_trip_id: Option<u64>,
    next_spot_id: u64,
    next_trip_id: u64,
    time_zone: TimeZone,
}

impl EntityStore {
    /// Creates an empty store using the system time zone for local-time
    /// resolution.
    pub fn new() -> Self {
        Self::with_time_zone(TimeZone::system())
    }

    /// Creates an empty store pinned to an explicit time zone.
    pub fn with_time_zone(time_zone: TimeZone) -> Self {
        Self {
            spots: Vec::new(),
            trips: Vec::new(),
            active_spot_id: None,
            selected_trip_id: None,
            next_spot_id: 0,
            next_trip_id: 0,
            time_zone,
        }
    }

    /// The zone used to resolve civil dates and times to instants.
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Marks a spot as the active selection. Ignored when the id is unknown.
    pub fn select_spot(&mut self, id: u64) -> bool {
        if self.spot(id).is_some() {
            self.active_spot_id = Some(id);
            true
        } else {
            false
        }
    }

    /// Clears the active spot selection.
    pub fn clear_spot_selection(&mut self) {
        self.active_spot_id = None;
    }

    /// The actively selected spot, resolved by lookup at read time.
    pub fn active_spot(&self) -> Option<&Spot> {
        self.active_spot_id.and_then(|id| self.spot(id))
    }

    /// Marks a trip as the current selection. Ignored when the id is unknown.
    pub fn select_trip(&mut self, id: u64) -> bool {
        if self.trip(id).is_some() {
            self.selected_trip_id = Some(id);
            true
        } else {
            false
        }
    }

    /// Clears the trip selection (and any active spot, which belongs to the
    /// trip view).
    pub fn clear_trip_selection(&mut self) {
        self.selected_trip_id = None;
        self.active_spot_id = None;
    }

    /// The currently selected trip, resolved by lookup at read time.
    pub fn selected_trip(&self) -> Option<&Trip> {
        self.selected_trip_id.and_then(|id| self.trip(id))
    }

    pub(crate) fn allocate_spot_id(&mut self) -> u64 {
        self.next_spot_id += 1;
        self.next_spot_id
    }

    pub(crate) fn allocate_trip_id(&mut self) -> u64 {
        self.next_trip_id += 1;
        self.next_trip_id
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
