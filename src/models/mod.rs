//! Core data models for the Shift Utilization Core.
//!
//! This module contains the time-of-day domain types used throughout the
//! engine: clock times stripped of their calendar date, and the trip and
//! shift windows built from them.

mod time_of_day;
mod window;

pub use time_of_day::{SECONDS_PER_DAY, TimeOfDay};
pub use window::{ShiftWindow, TripWindow};
