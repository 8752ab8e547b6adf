//! Date and time display utilities.

use std::fmt;

use jiff::civil;
use jiff::tz::TimeZone;
use jiff::Timestamp;

/// Heading for a day group of the itinerary.
///
/// Dated groups format as e.g. `Monday, March 17`; the unscheduled bucket
/// formats as `To Be Decided`.
pub struct DayHeading(pub Option<civil::Date>);

impl fmt::Display for DayHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.strftime("%A, %B %-d")),
            None => f.write_str("To Be Decided"),
        }
    }
}

/// 24-hour wall-clock label for a scheduled instant in a given zone.
pub struct TimeLabel<'a>(pub &'a Timestamp, pub &'a TimeZone);

impl fmt::Display for TimeLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_zoned(self.1.clone()).strftime("%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::tz::{Offset, TimeZone};

    use super::*;

    #[test]
    fn test_day_heading_formats_date() {
        let heading = format!("{}", DayHeading(Some(civil::date(2025, 3, 17))));
        assert_eq!(heading, "Monday, March 17");
    }

    #[test]
    fn test_day_heading_unscheduled() {
        assert_eq!(format!("{}", DayHeading(None)), "To Be Decided");
    }

    #[test]
    fn test_time_label_uses_zone() {
        let ts = Timestamp::from_second(1_740_871_800).unwrap(); // 2025-03-01 23:30:00 UTC
        let utc = TimeZone::UTC;
        let plus_two = TimeZone::fixed(Offset::constant(2));
        assert_eq!(format!("{}", TimeLabel(&ts, &utc)), "23:30");
        assert_eq!(format!("{}", TimeLabel(&ts, &plus_two)), "01:30");
    }
}
