//! Core library for the WanderPlan trip-planning client.
//!
//! This crate owns the itinerary state and the geospatial orchestration
//! around it: the trip/spot entity model, the derived views the UI renders,
//! and the two asynchronous request pipelines that must behave correctly
//! under rapid user input.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────┐     ┌─────────────────┐
//! │  SearchOrchestr. │      │ GenerationPipe.  │     │   EntityStore   │
//! │ (debounce, race- │      │ (all-or-nothing  │────▶│ (trips, spots,  │
//! │  safe resolve)   │      │  store mutation) │     │  selection)     │
//! └──────────────────┘      └──────────────────┘     └────────┬────────┘
//!          │                         │                        │ read
//!          ▼                         ▼                        ▼
//!   place provider trait      itinerary provider       projector + display
//!   (external service)        trait (external AI)      (day groups, legs,
//!                                                       trip progress)
//! ```
//!
//! User input flows into [`EntityStore`] mutations or a
//! [`GenerationPipeline`] run; the projector recomputes display-ready views
//! on read. Everything executes on one logical thread; only the debounced
//! search call and the generation call suspend, and the search module's
//! sequence gate guarantees that callers only ever observe the result of
//! the most recently issued call.
//!
//! Rendering, map tiles, prompt wording, and the concrete geocoding/AI
//! services are external collaborators behind the provider traits.
//!
//! # Quick Start
//!
//! ```rust
//! use wanderplan_core::models::Coordinates;
//! use wanderplan_core::params::SaveSpot;
//! use wanderplan_core::{projector, EntityStore};
//!
//! # fn main() -> wanderplan_core::Result<()> {
//! let mut store = EntityStore::new();
//!
//! // Save a standalone place
//! let spot = store.save_spot(&SaveSpot {
//!     name: "Torre de Belém, Lisbon, Portugal".to_string(),
//!     coordinates: Some(Coordinates::new(38.6916, -9.2160)),
//!     website: None,
//! })?;
//! assert_eq!(store.unaffiliated_spots().len(), 1);
//!
//! // Derived views are pure functions over the store's data
//! let groups = projector::day_groups(&store.spots_for_trip(0), store.time_zone());
//! assert!(groups.is_empty());
//! store.select_spot(spot.id);
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod config;
pub mod display;
pub mod error;
pub mod generation;
pub mod geo;
pub mod lightbox;
pub mod models;
pub mod params;
pub mod projector;
pub mod search;
pub mod store;

// Re-export commonly used types
pub use config::GenerationConfig;
pub use error::{Result, WanderError};
pub use generation::{GenerationOutcome, GenerationPipeline, GenerationRequest, ItineraryProvider};
pub use lightbox::LightboxController;
pub use models::{ChillLevel, Coordinates, PhotoRef, Spot, SpotType, Trip};
pub use params::{AddEvent, SaveSpot, TripRequest, UpdateSpot};
pub use projector::{day_groups, trip_progress, DayGroup, ItineraryEntry};
pub use search::{
    PlaceFeature, PlaceProperties, PlaceSearchProvider, SearchOptions, SearchOrchestrator,
    SearchOutcome, SearchQuery, Suggestion,
};
pub use store::EntityStore;
