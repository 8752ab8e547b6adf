//! Itinerary generation pipeline.
//!
//! Turns one trip request into a batch of store mutations: one trip plus a
//! spot per accommodation and activity in the provider's response document.
//! The whole mapping is materialized before the store is touched, so a
//! transport failure, an empty result, or a malformed payload leaves the
//! store completely unmodified.

use jiff::civil;
use jiff::tz::TimeZone;
use log::debug;

use crate::error::{Result, WanderError};
use crate::models::{
    GeneratedAccommodation, GeneratedActivity, GeneratedTrip, SpotDraft, SpotType, TripDraft,
};
use crate::params::TripRequest;
use crate::store::EntityStore;

pub mod provider;


pub use provider::{GenerationRequest, ItineraryProvider};

/// Check-in hour assigned to generated accommodations.
const CHECK_IN_TIME: civil::Time = civil::Time::constant(7, 0, 0, 0);

/// Receipt for one successful generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    /// Identifier of the newly created (and now selected) trip
    pub trip_id: u64,
    /// Provider's summary of the trip vibe
    pub summary: String,
    /// Number of spots created alongside the trip
    pub spots_created: usize,
}

/// Pipeline from trip request to store mutations.
pub struct GenerationPipeline<P> {
    provider: P,
}

impl<P: ItineraryProvider> GenerationPipeline<P> {
    /// Creates a pipeline over a generation provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Generates an itinerary and applies it to the store.
    ///
    /// On success one trip and its spots exist in the store and the trip is
    /// selected. On any failure the store is untouched and the error carries
    /// a user-facing description; the user may retry by resubmitting.
    ///
    /// # Errors
    ///
    /// * `WanderError::InvalidInput` - when the request fails validation
    ///   (checked before any provider call)
    /// * `WanderError::Generation` - when the provider call fails, returns
    ///   no days, or returns a document that fails schema validation
    pub async fn generate(
        &self,
        store: &mut EntityStore,
        request: &TripRequest,
    ) -> Result<GenerationOutcome> {
        request.validate()?;

        let wire = GenerationRequest::from_trip_request(request);
        let raw = self.provider.generate(&wire).await.map_err(|error| {
            WanderError::generation(format!("Itinerary provider call failed: {error:#}"))
        })?;
        let document: GeneratedTrip = serde_json::from_value(raw).map_err(|error| {
            WanderError::generation(format!(
                "Itinerary response failed schema validation: {error}"
            ))
        })?;
        if document.days.is_empty() {
            return Err(WanderError::generation(
                "Itinerary response contained no days",
            ));
        }

        // Materialize every mutation before touching the store
        let spots = map_days(&document, request.start_date, store.time_zone())?;

        let trip = TripDraft {
            destination: request.destination.clone(),
            start_date: request.start_date,
            days: request.days,
            chill_level: request.chill_level,
        };
        let spots_created = spots.len();
        let trip_id = store.apply_generated(trip, spots);
        debug!(
            "generated trip {trip_id} to {}: {spots_created} spots over {} days",
            request.destination,
            document.days.len()
        );

        Ok(GenerationOutcome {
            trip_id,
            summary: document.summary,
            spots_created,
        })
    }
}

/// Maps every day of the document into spot drafts, failing wholesale on
/// the first inconsistency.
fn map_days(
    document: &GeneratedTrip,
    start_date: civil::Date,
    tz: &TimeZone,
) -> Result<Vec<SpotDraft>> {
    let mut drafts = Vec::new();
    for day in &document.days {
        let date = day_date(start_date, day.day)?;
        if let Some(accommodation) = &day.accommodation {
            drafts.push(accommodation_draft(accommodation, date, tz)?);
        }
        for activity in &day.activities {
            drafts.push(activity_draft(activity, &day.cluster, date, tz)?);
        }
    }
    Ok(drafts)
}

/// Calendar date of a 1-based day number: day N is `start_date + (N - 1)`.
fn day_date(start_date: civil::Date, day: u16) -> Result<civil::Date> {
    if day == 0 {
        return Err(WanderError::generation(
            "Itinerary response used day number 0; day numbers are 1-based",
        ));
    }
    Ok(start_date.checked_add(jiff::Span::new().days(i64::from(day) - 1))?)
}

fn accommodation_draft(
    accommodation: &GeneratedAccommodation,
    date: civil::Date,
    tz: &TimeZone,
) -> Result<SpotDraft> {
    let instant = date.to_datetime(CHECK_IN_TIME).to_zoned(tz.clone())?.timestamp();
    Ok(SpotDraft {
        trip_id: None,
        name: accommodation.name.clone(),
        description: Some(format!(
            "[Base Camp] {}. {}",
            accommodation.reason, accommodation.description
        )),
        spot_type: SpotType::Accommodation,
        coordinates: accommodation.coordinates,
        itinerary_time: Some(instant),
        visited_date: None,
        website: None,
        photos: Vec::new(),
        is_check_in: Some(accommodation.is_check_in),
    })
}

fn activity_draft(
    activity: &GeneratedActivity,
    cluster: &str,
    date: civil::Date,
    tz: &TimeZone,
) -> Result<SpotDraft> {
    let time = parse_time_of_day(&activity.time)?;
    let instant = date.to_datetime(time).to_zoned(tz.clone())?.timestamp();

    let logistics = if cluster.is_empty() {
        String::new()
    } else {
        format!(
            "[{cluster} • {} Battery: {}/10] ",
            energy_glyph(activity.energy_score),
            activity.energy_score
        )
    };
    let description = format!("{logistics}{}: {}", activity.location_name, activity.notes);

    Ok(SpotDraft {
        trip_id: None,
        name: activity.name.clone(),
        description: Some(description),
        spot_type: SpotType::Itinerary,
        coordinates: activity.coordinates,
        itinerary_time: Some(instant),
        visited_date: None,
        website: activity.website.clone(),
        photos: Vec::new(),
        is_check_in: None,
    })
}

/// Parses a 24-hour "HH:MM" time of day.
fn parse_time_of_day(raw: &str) -> Result<civil::Time> {
    civil::Time::strptime("%H:%M", raw).map_err(|_| {
        WanderError::generation(format!("Itinerary response used invalid time of day '{raw}'"))
    })
}

/// Energy indicator: high above 7, low below 4, neutral otherwise.
fn energy_glyph(score: u8) -> &'static str {
    if score > 7 {
        "⚡"
    } else if score < 4 {
        "☕"
    } else {
        "✨"
    }
}
