//! Calculation logic for the Shift Utilization Core.
//!
//! This module contains the pure functions the reporting layer consumes:
//! the trip/shift overlap calculation, shift duration resolution with
//! midnight wraparound, and splitting a wrapping shift across its two
//! calendar days. All functions are total, synchronous, and stateless.

mod day_split;
mod duration;
mod overlap;

pub use day_split::{DaySplit, split_across_days};
pub use duration::{shift_duration, trip_span};
pub use overlap::shift_overlap;
