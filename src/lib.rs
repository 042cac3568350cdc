//! Shift Utilization Core for vehicle fleet reporting.
//!
//! This crate computes how much of a vehicle trip's elapsed time falls inside
//! an organizational work shift, where both the trip and the shift are
//! expressed as times-of-day on a repeating 24-hour clock and either may wrap
//! around midnight. It also resolves a shift's total duration and splits a
//! wrapping shift across its two calendar days for per-date reporting.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
