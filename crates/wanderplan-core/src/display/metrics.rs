//! Distance and progress display utilities.

use std::fmt;

use crate::geo::Distance;

/// Walking-distance label for an itinerary leg.
///
/// Distances under one kilometer render as whole meters (`350m`), longer
/// ones as kilometers with a single decimal (`1.2km`).
pub struct DistanceLabel(pub Distance);

impl fmt::Display for DistanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let km = self.0.kilometers();
        if km < 1.0 {
            write!(f, "{}m", self.0.meters().round() as i64)
        } else {
            write!(f, "{km:.1}km")
        }
    }
}

/// Completion label for a trip's progress percentage.
pub struct ProgressLabel(pub u8);

impl fmt::Display for ProgressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% Completed", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_label_meters_under_one_km() {
        assert_eq!(format!("{}", DistanceLabel(Distance::from_km(0.3504))), "350m");
        assert_eq!(format!("{}", DistanceLabel(Distance::from_km(0.9996))), "1000m");
    }

    #[test]
    fn test_distance_label_kilometers_with_one_decimal() {
        assert_eq!(format!("{}", DistanceLabel(Distance::from_km(1.0))), "1.0km");
        assert_eq!(format!("{}", DistanceLabel(Distance::from_km(12.34))), "12.3km");
    }

    #[test]
    fn test_progress_label() {
        assert_eq!(format!("{}", ProgressLabel(42)), "42% Completed");
    }
}
