//! The time-of-day domain type.
//!
//! All quantities in the engine are points on a repeating 24-hour clock:
//! seconds since local midnight, with no calendar date attached. Values are
//! compared, not wrapped; the overlap calculation explicitly adds a 24-hour
//! offset where a window spills into the next day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The number of seconds in one day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// A clock time with no calendar date, as seconds since local midnight.
///
/// Values derived from real clock times lie in `[0, 86400)`; the type does
/// not clamp, and the calculation functions treat the value as a free
/// integer on the 24-hour circle.
///
/// # Example
///
/// ```
/// use utilization_engine::models::TimeOfDay;
///
/// let seven_am: TimeOfDay = "07:00".parse().unwrap();
/// assert_eq!(seven_am.seconds(), 25_200);
/// assert_eq!(seven_am.to_string(), "07:00:00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Creates a time-of-day from raw seconds since midnight.
    pub fn from_seconds(seconds: u32) -> Self {
        Self(seconds)
    }

    /// Creates a time-of-day from hour, minute, and second components.
    ///
    /// # Example
    ///
    /// ```
    /// use utilization_engine::models::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::from_hms(23, 0, 0).seconds(), 82_800);
    /// ```
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self(hour * 3600 + minute * 60 + second)
    }

    /// Returns the number of seconds since midnight.
    pub fn seconds(&self) -> u32 {
        self.0
    }

    /// Returns the value as a signed integer for window arithmetic.
    pub(crate) fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self(time.num_seconds_from_midnight())
    }
}

impl From<NaiveDateTime> for TimeOfDay {
    /// Strips the calendar date from a timestamp, keeping only the local
    /// time-of-day.
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from(datetime.time())
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    /// Parses a `"HH:MM:SS"` or `"HH:MM"` clock time.
    ///
    /// # Example
    ///
    /// ```
    /// use utilization_engine::models::TimeOfDay;
    ///
    /// let t: TimeOfDay = "15:30".parse().unwrap();
    /// assert_eq!(t, TimeOfDay::from_hms(15, 30, 0));
    /// assert!("25:99".parse::<TimeOfDay>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .map(Self::from)
            .map_err(|e| EngineError::InvalidTimeOfDay {
                value: s.to_string(),
                message: e.to_string(),
            })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.0 / 3600,
            self.0 % 3600 / 60,
            self.0 % 60
        )
    }
}
