//! Error types for the Shift Utilization Core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation functions themselves are total and never fail; errors can
//! only arise at the configuration boundary, when shift definitions are read
//! and parsed.

use thiserror::Error;

/// The main error type for the Shift Utilization Core.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use utilization_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/shifts.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/shifts.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time-of-day string could not be parsed.
    #[error("Invalid time of day '{value}': {message}")]
    InvalidTimeOfDay {
        /// The string that failed to parse.
        value: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift definition contained an unparseable start or end time.
    #[error("Invalid shift definition '{name}': {message}")]
    InvalidShiftDefinition {
        /// The name of the invalid shift definition.
        name: String,
        /// A description of what made the definition invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
