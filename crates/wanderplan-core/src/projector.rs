//! Derived itinerary views.
//!
//! Pure functions over the store's spot/trip data: day grouping with
//! walking-distance annotations, and trip progress. Nothing here mutates
//! state; the projections are recomputed on read from whatever the store
//! currently holds.

use jiff::civil;
use jiff::tz::TimeZone;
use jiff::Timestamp;

use crate::error::Result;
use crate::geo::{self, Distance};
use crate::models::{Spot, SpotType, Trip};

/// One day of the itinerary view.
///
/// `day` is `None` for the distinguished unscheduled bucket. Entries are in
/// canonical order: ascending by scheduled time, absent times first.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    /// Local calendar day, or `None` for unscheduled entries
    pub day: Option<civil::Date>,
    /// Spots of the day in canonical order, annotated with walking legs
    pub entries: Vec<ItineraryEntry>,
}

/// A spot within a day group, annotated with the leg from its predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryEntry {
    pub spot: Spot,
    /// Distance from the preceding entry in the same group; `None` for the
    /// first entry and whenever either endpoint is an accommodation
    pub leg: Option<Distance>,
}

/// Partitions spots into per-day groups keyed by the local calendar day of
/// their scheduled time.
///
/// Spots without a scheduled time go into the unscheduled bucket, which
/// always appears first (absent times sort before any present value); dated
/// groups follow in ascending day order. The result is deterministic for
/// equal inputs: the sort is stable, so spots sharing an instant keep their
/// insertion order.
pub fn day_groups(spots: &[&Spot], tz: &TimeZone) -> Vec<DayGroup> {
    let mut ordered: Vec<&Spot> = spots.to_vec();
    ordered.sort_by_key(|spot| spot.itinerary_time);

    let mut groups: Vec<DayGroup> = Vec::new();
    for spot in ordered {
        let day = spot
            .itinerary_time
            .map(|instant| instant.to_zoned(tz.clone()).date());

        if groups.last().map(|group| group.day) != Some(day) {
            groups.push(DayGroup {
                day,
                entries: Vec::new(),
            });
        }
        let Some(group) = groups.last_mut() else {
            continue;
        };

        let leg = group
            .entries
            .last()
            .and_then(|previous| walking_leg(&previous.spot, spot));
        group.entries.push(ItineraryEntry {
            spot: spot.clone(),
            leg,
        });
    }
    groups
}

/// Walking distance between consecutive stops.
///
/// Accommodation endpoints are excluded: a base camp is not a waypoint, so
/// no leg is reported into or out of one.
fn walking_leg(previous: &Spot, current: &Spot) -> Option<Distance> {
    if previous.spot_type == SpotType::Accommodation
        || current.spot_type == SpotType::Accommodation
    {
        return None;
    }
    Some(geo::distance(previous.coordinates, current.coordinates))
}

/// Elapsed fraction of the trip window `[start, start + days)` against
/// `now`, as a percentage clamped to [0, 100] and rounded to the nearest
/// integer.
///
/// Exactly 0 at the start instant and 100 at the end instant; monotonically
/// non-decreasing in `now` for a fixed trip.
///
/// # Errors
///
/// * `WanderError::Calendar` - when the trip window cannot be resolved in
///   the given zone
pub fn trip_progress(trip: &Trip, now: Timestamp, tz: &TimeZone) -> Result<u8> {
    let start = trip
        .start_date
        .to_datetime(civil::Time::midnight())
        .to_zoned(tz.clone())?
        .timestamp();
    let end = trip
        .start_date
        .checked_add(jiff::Span::new().days(i64::from(trip.days)))?
        .to_datetime(civil::Time::midnight())
        .to_zoned(tz.clone())?
        .timestamp();

    let start_ms = start.as_millisecond();
    let end_ms = end.as_millisecond();
    let now_ms = now.as_millisecond();

    if now_ms <= start_ms {
        return Ok(0);
    }
    if now_ms >= end_ms {
        return Ok(100);
    }
    let ratio = (now_ms - start_ms) as f64 / (end_ms - start_ms) as f64;
    Ok((ratio * 100.0).round() as u8)
}
