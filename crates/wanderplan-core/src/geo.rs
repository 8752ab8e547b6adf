//! Great-circle distance math between coordinate pairs.

use crate::models::Coordinates;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A great-circle distance between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    km: f64,
}

impl Distance {
    /// Constructs a distance from kilometers.
    pub fn from_km(km: f64) -> Self {
        Self { km }
    }

    /// Distance in kilometers.
    pub fn kilometers(&self) -> f64 {
        self.km
    }

    /// Distance in meters.
    pub fn meters(&self) -> f64 {
        self.km * 1000.0
    }
}

/// Haversine distance between two coordinate pairs.
pub fn distance(a: Coordinates, b: Coordinates) -> Distance {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Distance::from_km(EARTH_RADIUS_KM * c)
}
