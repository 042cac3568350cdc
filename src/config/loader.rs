//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a shift roster
//! from a YAML file and resolving every definition into a ready-to-use
//! [`ShiftWindow`].

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftWindow;

use super::types::RosterConfig;

/// A roster shift resolved from its configuration entry.
#[derive(Debug, Clone)]
pub struct NamedShift {
    /// The shift's configured name.
    pub name: String,
    /// The shift's resolved clock-time window.
    pub window: ShiftWindow,
}

/// Loads and provides access to the shift roster configuration.
///
/// The loader reads a roster YAML file, parses every shift's `"HH:MM"`
/// boundaries, and exposes the resolved windows for the attribution loop.
///
/// # File Structure
///
/// ```text
/// shifts:
///   - name: day
///     start: "07:00"
///     end: "15:00"
///   - name: night
///     start: "23:00"
///     end: "07:00"
/// ```
///
/// # Example
///
/// ```no_run
/// use utilization_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/shifts.yaml").unwrap();
/// for shift in loader.shifts() {
///     println!("{}: {} - {}", shift.name, shift.window.start, shift.window.end);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    shifts: Vec<NamedShift>,
}

impl ConfigLoader {
    /// Loads the roster from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, contains invalid YAML, or
    /// any shift boundary fails to parse as a clock time.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let roster: RosterConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::resolve(roster)
    }

    /// Parses a roster from an embedded YAML document.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ConfigLoader::load`], except that a missing
    /// file cannot occur.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let roster: RosterConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Self::resolve(roster)
    }

    /// Resolves every raw definition into a named window.
    fn resolve(roster: RosterConfig) -> EngineResult<Self> {
        let shifts = roster
            .shifts
            .iter()
            .map(|definition| {
                Ok(NamedShift {
                    name: definition.name.clone(),
                    window: definition.to_window()?,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        tracing::debug!(shift_count = shifts.len(), "resolved shift roster");

        Ok(Self { shifts })
    }

    /// Returns the resolved shifts in configuration order.
    pub fn shifts(&self) -> &[NamedShift] {
        &self.shifts
    }

    /// Looks up a shift's window by its configured name.
    pub fn get_shift(&self, name: &str) -> Option<&ShiftWindow> {
        self.shifts
            .iter()
            .find(|shift| shift.name == name)
            .map(|shift| &shift.window)
    }
}
