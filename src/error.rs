//! Error types for the Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading a tax regime or
//! computing a salary breakdown.

use thiserror::Error;

/// The main error type for the Salary Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "gross_annual_salary".to_string(),
///     message: "'abc' is not a number".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input for 'gross_annual_salary': 'abc' is not a number"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input value could not be parsed or is outside its domain.
    ///
    /// This is the only error a salary calculation can produce. No partial
    /// result accompanies it.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of why the value was rejected.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
