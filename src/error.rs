//! Error types for the Shift Payroll Engine.
//!
//! The payroll formula itself is total and never fails. These errors come
//! from the surrounding shell: configuration loading, reference lookups and
//! request validation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Shift Payroll Engine.
///
/// # Example
///
/// ```
/// use shift_payroll::error::EngineError;
///
/// let error = EngineError::ShiftTypeNotFound {
///     code: "CA_9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Shift type not found: CA_9");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A shift type code was not found in the configuration.
    #[error("Shift type not found: {code}")]
    ShiftTypeNotFound {
        /// The shift type code that was not found.
        code: String,
    },

    /// No pay rule is effective on the given date.
    #[error("No pay rule effective on {date}")]
    PayRuleNotFound {
        /// The date for which a rule was requested.
        date: NaiveDate,
    },

    /// A work log was invalid or inconsistent with the request.
    #[error("Invalid work log '{work_log_id}': {message}")]
    InvalidWorkLog {
        /// The ID of the invalid work log.
        work_log_id: String,
        /// A description of what made the work log invalid.
        message: String,
    },

    /// An employee record was invalid.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A pay rule supplied with a request was invalid.
    #[error("Invalid pay rule field '{field}': {message}")]
    InvalidPayRule {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The pay period was malformed.
    #[error("Invalid pay period: {message}")]
    InvalidPayPeriod {
        /// A description of what made the pay period invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
