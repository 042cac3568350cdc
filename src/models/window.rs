//! Trip and shift window models.
//!
//! Both windows are a pair of time-of-day values on the 24-hour circle. A
//! window whose start lies after its end wraps around midnight and is really
//! two linear segments; the calculation functions handle that case
//! explicitly.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// One vehicle trip's clock-time span, independent of its calendar date.
///
/// # Example
///
/// ```
/// use utilization_engine::models::{TimeOfDay, TripWindow};
///
/// let trip = TripWindow::new(TimeOfDay::from_hms(22, 0, 0), TimeOfDay::from_hms(2, 0, 0));
/// assert!(trip.wraps_midnight());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripWindow {
    /// The clock time at which the trip started.
    pub start: TimeOfDay,
    /// The clock time at which the trip ended.
    pub end: TimeOfDay,
}

impl TripWindow {
    /// Creates a trip window from its start and end times-of-day.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Derives a trip window from the trip's actual start and end
    /// timestamps, stripping the calendar dates.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use utilization_engine::models::{TimeOfDay, TripWindow};
    ///
    /// let start = NaiveDateTime::parse_from_str("2026-01-15 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2026-01-16 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let trip = TripWindow::from_timestamps(start, end);
    /// assert_eq!(trip.start, TimeOfDay::from_hms(22, 0, 0));
    /// assert_eq!(trip.end, TimeOfDay::from_hms(2, 0, 0));
    /// ```
    pub fn from_timestamps(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start: TimeOfDay::from(start),
            end: TimeOfDay::from(end),
        }
    }

    /// Returns true if the trip spans midnight.
    ///
    /// A zero-length trip (`start == end`) does not wrap; it is a degenerate
    /// window with no duration.
    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }
}

/// A recurring daily work period, defined by a start and end time-of-day.
///
/// Same shape and wraparound rule as [`TripWindow`], but semantically a
/// shift definition (e.g. a day shift of `07:00`–`15:00`) that repeats every
/// calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// The clock time at which the shift starts.
    pub start: TimeOfDay,
    /// The clock time at which the shift ends.
    pub end: TimeOfDay,
}

impl ShiftWindow {
    /// Creates a shift window from its start and end times-of-day.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Returns true if the shift spans midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tod(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::from_hms(h, m, 0)
    }

    #[test]
    fn test_day_trip_does_not_wrap() {
        let trip = TripWindow::new(tod(7, 30), tod(9, 0));
        assert!(!trip.wraps_midnight());
    }

    #[test]
    fn test_overnight_trip_wraps() {
        let trip = TripWindow::new(tod(23, 30), tod(0, 30));
        assert!(trip.wraps_midnight());
    }

    #[test]
    fn test_zero_length_trip_does_not_wrap() {
        let trip = TripWindow::new(tod(9, 0), tod(9, 0));
        assert!(!trip.wraps_midnight());
    }

    #[test]
    fn test_night_shift_wraps() {
        let shift = ShiftWindow::new(tod(23, 0), tod(7, 0));
        assert!(shift.wraps_midnight());
    }

    #[test]
    fn test_day_shift_does_not_wrap() {
        let shift = ShiftWindow::new(tod(7, 0), tod(15, 0));
        assert!(!shift.wraps_midnight());
    }

    #[test]
    fn test_from_timestamps_strips_dates() {
        let start =
            NaiveDateTime::parse_from_str("2026-01-15 23:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let end =
            NaiveDateTime::parse_from_str("2026-01-16 00:30:00", "%Y-%m-%d %H:%M:%S").unwrap();

        let trip = TripWindow::from_timestamps(start, end);
        assert_eq!(trip.start, tod(23, 30));
        assert_eq!(trip.end, tod(0, 30));
        assert!(trip.wraps_midnight());
    }

    #[test]
    fn test_window_serialization() {
        let shift = ShiftWindow::new(tod(23, 0), tod(7, 0));
        let json = serde_json::to_string(&shift).unwrap();
        assert_eq!(json, r#"{"start":82800,"end":25200}"#);

        let deserialized: ShiftWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, shift);
    }
}
