//! Closed enumerations classifying spots and trip pacing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe classification of a spot.
///
/// The classification determines display semantics and which optional fields
/// are meaningful (`is_check_in` only applies to [`SpotType::Accommodation`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpotType {
    /// A place the user has already been to
    Visited,

    /// A saved place the user wants to visit
    WantToVisit,

    /// A scheduled itinerary stop belonging to a trip
    Itinerary,

    /// Lodging acting as a base for one or more days
    Accommodation,
}

impl FromStr for SpotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visited" => Ok(SpotType::Visited),
            "want_to_visit" | "wanttovisit" => Ok(SpotType::WantToVisit),
            "itinerary" => Ok(SpotType::Itinerary),
            "accommodation" => Ok(SpotType::Accommodation),
            _ => Err(format!("Invalid spot type: {s}")),
        }
    }
}

impl SpotType {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpotType::Visited => "visited",
            SpotType::WantToVisit => "want_to_visit",
            SpotType::Itinerary => "itinerary",
            SpotType::Accommodation => "accommodation",
        }
    }
}

/// Qualitative pacing preference for a trip.
///
/// Influences generation only; the core attaches no runtime behavior to it
/// beyond passing it through the generation request and labelling trips.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChillLevel {
    /// Resort, beach, low-energy days
    Relaxed,

    /// Sightseeing mixed with rest
    #[default]
    Balanced,

    /// Hiking, adventure, full days
    Active,

    /// Museums, history, food
    Culture,

    /// Nightlife and social
    Party,
}

impl FromStr for ChillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relaxed" => Ok(ChillLevel::Relaxed),
            "balanced" => Ok(ChillLevel::Balanced),
            "active" => Ok(ChillLevel::Active),
            "culture" | "cultural" => Ok(ChillLevel::Culture),
            "party" => Ok(ChillLevel::Party),
            _ => Err(format!("Invalid chill level: {s}")),
        }
    }
}

impl ChillLevel {
    /// Human-readable label shown alongside a trip.
    pub fn label(&self) -> &'static str {
        match self {
            ChillLevel::Relaxed => "Relaxed (Resort/Beach/Chill)",
            ChillLevel::Balanced => "Balanced (Sightseeing + Rest)",
            ChillLevel::Active => "Active (Hiking/Adventure/Full Day)",
            ChillLevel::Culture => "Cultural (Museums/History/Food)",
            ChillLevel::Party => "Nightlife & Social",
        }
    }
}

impl fmt::Display for ChillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
