//! Configuration types for the shift roster.
//!
//! These structures mirror the roster YAML file as written by users: shift
//! boundaries are clock-time strings and are only converted to window values
//! by the loader.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftWindow;

/// A single user-configured shift definition, with raw clock-time strings.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftDefinition {
    /// The shift's name as shown on reports (e.g. "day", "night").
    pub name: String,
    /// The shift's start time, as `"HH:MM"` or `"HH:MM:SS"`.
    pub start: String,
    /// The shift's end time, as `"HH:MM"` or `"HH:MM:SS"`.
    pub end: String,
}

impl ShiftDefinition {
    /// Parses the definition's clock-time strings into a [`ShiftWindow`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShiftDefinition`] naming the shift when
    /// either boundary fails to parse.
    pub fn to_window(&self) -> EngineResult<ShiftWindow> {
        let start = self
            .start
            .parse()
            .map_err(|e: EngineError| EngineError::InvalidShiftDefinition {
                name: self.name.clone(),
                message: e.to_string(),
            })?;
        let end = self
            .end
            .parse()
            .map_err(|e: EngineError| EngineError::InvalidShiftDefinition {
                name: self.name.clone(),
                message: e.to_string(),
            })?;

        Ok(ShiftWindow::new(start, end))
    }
}

/// Roster configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// The configured shift definitions, in report order.
    pub shifts: Vec<ShiftDefinition>,
}
