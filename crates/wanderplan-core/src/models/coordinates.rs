//! Geographic coordinate pair shared by entities and provider payloads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    /// Latitude in degrees, valid range [-90, 90]
    pub lat: f64,

    /// Longitude in degrees, valid range [-180, 180]
    pub lng: f64,
}

impl Coordinates {
    /// Creates a coordinate pair without range checking.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components fall inside their valid degree ranges.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}
