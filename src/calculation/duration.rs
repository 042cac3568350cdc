//! Shift duration resolution.
//!
//! A shift's total length is its own property, independent of any trip: a
//! shift whose end does not come after its start wraps midnight and gains a
//! 24-hour offset. The same arithmetic, with the trip's wraparound rule,
//! gives a trip's span.

use crate::models::{SECONDS_PER_DAY, ShiftWindow, TripWindow};

/// Resolves a shift's total duration in seconds, handling midnight
/// wraparound.
///
/// If `end <= start` the shift is treated as wrapping midnight, so a
/// `23:00`–`07:00` shift is 8 hours and a `00:00`–`00:00` definition is a
/// full 24-hour shift. This is the canonical shift length the reporting
/// layer uses for capacity, and an upper bound that
/// [`shift_overlap`](crate::calculation::shift_overlap) never exceeds.
///
/// # Example
///
/// ```
/// use utilization_engine::calculation::shift_duration;
/// use utilization_engine::models::{ShiftWindow, TimeOfDay};
///
/// let day = ShiftWindow::new(TimeOfDay::from_hms(7, 0, 0), TimeOfDay::from_hms(15, 0, 0));
/// assert_eq!(shift_duration(&day), 28_800);
///
/// let night = ShiftWindow::new(TimeOfDay::from_hms(23, 0, 0), TimeOfDay::from_hms(7, 0, 0));
/// assert_eq!(shift_duration(&night), 28_800);
/// ```
pub fn shift_duration(shift: &ShiftWindow) -> i64 {
    let start = shift.start.as_i64();
    let end = shift.end.as_i64();

    if end <= start {
        end + SECONDS_PER_DAY - start
    } else {
        end - start
    }
}

/// Returns a trip's own span in seconds, accounting for midnight wraparound.
///
/// Trips wrap only when `start > end`, so a zero-length trip has span `0`
/// rather than a full day.
pub fn trip_span(trip: &TripWindow) -> i64 {
    let start = trip.start.as_i64();
    let end = trip.end.as_i64();

    if start > end {
        end + SECONDS_PER_DAY - start
    } else {
        end - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeOfDay;

    fn shift(start: &str, end: &str) -> ShiftWindow {
        ShiftWindow::new(start.parse().unwrap(), end.parse().unwrap())
    }

    // ==========================================================================
    // DU-001: non-wrapping shift is end minus start
    // ==========================================================================
    #[test]
    fn test_du_001_day_shift_duration() {
        assert_eq!(shift_duration(&shift("07:00", "15:00")), 8 * 3600);
    }

    // ==========================================================================
    // DU-002: wrapping shift gains the 24-hour offset
    // ==========================================================================
    #[test]
    fn test_du_002_night_shift_duration() {
        assert_eq!(shift_duration(&shift("23:00", "07:00")), 8 * 3600);
    }

    // ==========================================================================
    // DU-003: equal start and end is a 24-hour shift
    // ==========================================================================
    #[test]
    fn test_du_003_zero_length_definition_is_a_full_day() {
        assert_eq!(shift_duration(&shift("00:00", "00:00")), 86_400);
        assert_eq!(shift_duration(&shift("09:00", "09:00")), 86_400);
    }

    #[test]
    fn test_one_minute_shift() {
        assert_eq!(shift_duration(&shift("23:59", "00:00")), 60);
    }

    #[test]
    fn test_trip_span_without_wrap() {
        let trip = TripWindow::new(TimeOfDay::from_hms(7, 30, 0), TimeOfDay::from_hms(9, 0, 0));
        assert_eq!(trip_span(&trip), 5400);
    }

    #[test]
    fn test_trip_span_with_wrap() {
        let trip = TripWindow::new(TimeOfDay::from_hms(22, 0, 0), TimeOfDay::from_hms(2, 0, 0));
        assert_eq!(trip_span(&trip), 4 * 3600);
    }

    #[test]
    fn test_zero_length_trip_has_no_span() {
        let trip = TripWindow::new(TimeOfDay::from_hms(9, 0, 0), TimeOfDay::from_hms(9, 0, 0));
        assert_eq!(trip_span(&trip), 0);
    }
}
