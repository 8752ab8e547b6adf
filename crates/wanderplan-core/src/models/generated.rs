//! Wire document returned by the itinerary generation provider.
//!
//! The document is schema-validated before being trusted: the pipeline
//! derives a JSON schema from these types (sent with the request as the
//! structured-output contract) and parses the response through serde. A
//! response that fails to parse is a pipeline failure and never reaches the
//! entity store.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Complete generated itinerary for one trip.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedTrip {
    /// Brief summary of the trip vibe
    pub summary: String,

    /// Ordered per-day entries
    pub days: Vec<GeneratedDay>,
}

/// One day of the generated itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedDay {
    /// 1-based day number within the trip
    pub day: u16,

    /// Geographic zone or neighborhood the day's activities cluster around
    #[serde(rename = "morning_cluster")]
    pub cluster: String,

    /// Recommended lodging for this day, when present
    pub accommodation: Option<GeneratedAccommodation>,

    /// Ordered activities for the day
    pub activities: Vec<GeneratedActivity>,
}

/// Recommended lodging for a day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedAccommodation {
    /// Name of the hotel or hostel
    pub name: String,

    /// Brief description of the lodging
    pub description: String,

    /// Why this location was chosen
    pub reason: String,

    /// Whether this is the first night at this lodging
    pub is_check_in: bool,

    /// Location of the lodging
    pub coordinates: Coordinates,
}

/// A single generated activity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedActivity {
    /// Time of day in 24h "HH:MM" form
    pub time: String,

    /// Title of the activity
    pub name: String,

    /// Description and logistics notes
    pub notes: String,

    /// Name of the specific place or venue
    pub location_name: String,

    /// Energy cost from 1 (resting) to 10 (exhausting)
    pub energy_score: u8,

    /// Estimated duration in minutes
    pub duration_min: u32,

    /// Location of the activity
    pub coordinates: Coordinates,

    /// Official website URL if known
    #[serde(default)]
    pub website: Option<String>,
}
