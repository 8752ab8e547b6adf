//! Display wrapper types for derived itinerary views.
//!
//! Newtype wrappers implement [`std::fmt::Display`] for the projector's
//! outputs so the same data can be rendered consistently wherever it is
//! shown: day headings, clock times, walking-distance legs, and trip
//! progress.

pub mod datetime;
pub mod metrics;

pub use datetime::{DayHeading, TimeLabel};
pub use metrics::{DistanceLabel, ProgressLabel};
