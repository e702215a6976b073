//! Error types for the Time Metrics Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during metrics calculation.

use thiserror::Error;

/// The main error type for the Time Metrics Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timeclock_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A punch instant was missing or could not be parsed.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid (e.g., "punch_in").
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A schedule field was missing or malformed.
    #[error("Invalid schedule field '{field}': {message}")]
    InvalidSchedule {
        /// The schedule field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The schedule named a timezone that is not a known IANA zone.
    #[error("Unknown timezone: {name}")]
    UnknownTimezone {
        /// The timezone name that could not be resolved.
        name: String,
    },

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

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Creates an `InvalidInput` error for a missing required field.
    pub fn missing(field: &str) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            message: "is required".to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
