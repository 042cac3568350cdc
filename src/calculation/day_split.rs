//! Splitting a shift across its two calendar days.
//!
//! A wrapping shift belongs to two calendar dates: the portion from its
//! start up to (but not including) the next midnight falls on the starting
//! day, and the rest falls on the following day. The reporting layer uses
//! the split to bucket a recurring shift's hours into per-date capacity.

use serde::{Deserialize, Serialize};

use crate::models::{SECONDS_PER_DAY, ShiftWindow};

/// The portions of a shift falling on its starting calendar day and on the
/// next one, in seconds.
///
/// The two components always sum to the shift's total duration as resolved
/// by [`shift_duration`](crate::calculation::shift_duration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySplit {
    /// Seconds falling on the shift's starting calendar day.
    pub first_day: i64,
    /// Seconds spilling into the next calendar day.
    pub second_day: i64,
}

/// Splits a shift into its starting-day and next-day portions.
///
/// A non-wrapping shift lies entirely on its starting day. For a wrapping
/// shift the first portion runs from the shift's start to the end of the
/// day and the second from midnight to the shift's end. Components are
/// clamped at zero so out-of-range inputs cannot produce negative buckets.
///
/// # Example
///
/// ```
/// use utilization_engine::calculation::split_across_days;
/// use utilization_engine::models::{ShiftWindow, TimeOfDay};
///
/// let night = ShiftWindow::new(TimeOfDay::from_hms(23, 0, 0), TimeOfDay::from_hms(7, 0, 0));
/// let split = split_across_days(&night);
/// assert_eq!(split.first_day, 3600);    // 23:00 to midnight
/// assert_eq!(split.second_day, 25_200); // midnight to 07:00
/// ```
pub fn split_across_days(shift: &ShiftWindow) -> DaySplit {
    let start = shift.start.as_i64();
    let end = shift.end.as_i64();

    if end > start {
        DaySplit {
            first_day: end - start,
            second_day: 0,
        }
    } else {
        DaySplit {
            first_day: (SECONDS_PER_DAY - start).max(0),
            second_day: end.max(0),
        }
    }
}
