//! Pure calendar arithmetic for date pickers.
//!
//! Everything here operates on civil (timezone-free) dates. Date selection
//! builds the canonical `YYYY-MM-DD` string from local year/month/day
//! components directly, never by formatting a timestamp that could shift
//! the day across a timezone boundary.

use jiff::civil;
use jiff::tz::TimeZone;
use jiff::Timestamp;

use crate::error::Result;

/// Number of days in the given month.
pub fn days_in_month(year: i16, month: i8) -> Result<i8> {
    Ok(civil::Date::new(year, month, 1)?.days_in_month())
}

/// Weekday of the first day of the month, with Sunday as zero.
pub fn first_weekday_of_month(year: i16, month: i8) -> Result<i8> {
    Ok(civil::Date::new(year, month, 1)?
        .weekday()
        .to_sunday_zero_offset())
}

/// Whether two instants fall on the same calendar day in the given zone.
pub fn is_same_local_date(a: Timestamp, b: Timestamp, tz: &TimeZone) -> bool {
    a.to_zoned(tz.clone()).date() == b.to_zoned(tz.clone()).date()
}

/// Canonical `YYYY-MM-DD` string built purely from date components.
pub fn date_string(date: civil::Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Whether a candidate day is disabled relative to an optional minimum.
///
/// Strictly-earlier comparison of calendar dates; time of day never enters
/// the decision.
pub fn is_disabled(date: civil::Date, min: Option<civil::Date>) -> bool {
    matches!(min, Some(min) if date < min)
}

/// A month page of the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    year: i16,
    month: i8,
}

impl MonthView {
    /// Creates a view for the given month, validating the components.
    pub fn new(year: i16, month: i8) -> Result<Self> {
        civil::Date::new(year, month, 1)?;
        Ok(Self { year, month })
    }

    /// The view's year.
    pub fn year(&self) -> i16 {
        self.year
    }

    /// The view's month, 1-based.
    pub fn month(&self) -> i8 {
        self.month
    }

    /// The following month, rolling across year boundaries.
    pub fn next(&self) -> Result<Self> {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// The preceding month, rolling across year boundaries.
    pub fn prev(&self) -> Result<Self> {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// Cells of the month grid: leading `None` blanks aligning the first day
    /// to its weekday column (Sunday first), then `Some(day)` for each day.
    pub fn grid(&self) -> Result<Vec<Option<i8>>> {
        let blanks = first_weekday_of_month(self.year, self.month)?;
        let total = days_in_month(self.year, self.month)?;

        let mut cells = Vec::with_capacity(blanks as usize + total as usize);
        cells.extend(std::iter::repeat(None).take(blanks as usize));
        cells.extend((1..=total).map(Some));
        Ok(cells)
    }

    /// Canonical date string for a clicked day cell of this month.
    pub fn select(&self, day: i8) -> Result<String> {
        let date = civil::Date::new(self.year, self.month, day)?;
        Ok(date_string(date))
    }
}

#[cfg(test)]
mod tests {
    use jiff::tz::{Offset, TimeZone};

    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2025, 4).unwrap(), 30);
        assert_eq!(days_in_month(2025, 12).unwrap(), 31);
        assert!(days_in_month(2025, 13).is_err());
    }

    #[test]
    fn test_first_weekday_of_month() {
        // 2025-03-01 is a Saturday, 2024-02-01 a Thursday
        assert_eq!(first_weekday_of_month(2025, 3).unwrap(), 6);
        assert_eq!(first_weekday_of_month(2024, 2).unwrap(), 4);
        // 2025-06-01 is a Sunday
        assert_eq!(first_weekday_of_month(2025, 6).unwrap(), 0);
    }

    #[test]
    fn test_grid_shape() {
        let view = MonthView::new(2025, 3).unwrap();
        let grid = view.grid().unwrap();
        assert_eq!(grid.len(), 6 + 31);
        assert!(grid[..6].iter().all(Option::is_none));
        assert_eq!(grid[6], Some(1));
        assert_eq!(grid[grid.len() - 1], Some(31));
    }

    #[test]
    fn test_selection_is_timezone_invariant() {
        // The string comes from components alone, no timestamp round trip
        let view = MonthView::new(2025, 3).unwrap();
        assert_eq!(view.select(15).unwrap(), "2025-03-15");
        assert_eq!(view.select(5).unwrap(), "2025-03-05");
        assert!(view.select(32).is_err());
    }

    #[test]
    fn test_month_navigation_rolls_over_years() {
        let december = MonthView::new(2024, 12).unwrap();
        let january = december.next().unwrap();
        assert_eq!((january.year(), january.month()), (2025, 1));
        let back = january.prev().unwrap();
        assert_eq!((back.year(), back.month()), (2024, 12));
    }

    #[test]
    fn test_is_same_local_date_depends_on_zone() {
        let tz_utc = TimeZone::UTC;
        let tz_plus_nine = TimeZone::fixed(Offset::constant(9));

        // 23:30 and 00:30 UTC straddle midnight in UTC but share a day at +9
        let late = Timestamp::from_second(1_740_871_800).unwrap(); // 2025-03-01 23:30:00 UTC
        let early = Timestamp::from_second(1_740_875_400).unwrap(); // 2025-03-02 00:30:00 UTC

        assert!(!is_same_local_date(late, early, &tz_utc));
        assert!(is_same_local_date(late, early, &tz_plus_nine));
    }

    #[test]
    fn test_min_date_comparison_is_strict() {
        let min = civil::date(2025, 3, 10);
        assert!(is_disabled(civil::date(2025, 3, 9), Some(min)));
        assert!(!is_disabled(civil::date(2025, 3, 10), Some(min)));
        assert!(!is_disabled(civil::date(2025, 3, 11), Some(min)));
        assert!(!is_disabled(civil::date(2025, 3, 9), None));
    }

    #[test]
    fn test_date_string_pads_components() {
        assert_eq!(date_string(civil::date(987, 1, 2)), "0987-01-02");
    }
}
