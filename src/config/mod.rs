//! Shift roster configuration.
//!
//! This module provides the strongly-typed structures deserialized from a
//! roster YAML file and the [`ConfigLoader`] that parses the user-configured
//! `"HH:MM"` shift boundaries into [`ShiftWindow`](crate::models::ShiftWindow)
//! values.

mod loader;
mod types;

pub use loader::{ConfigLoader, NamedShift};
pub use types::{RosterConfig, ShiftDefinition};
