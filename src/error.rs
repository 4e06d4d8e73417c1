//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while importing rosters or
//! preparing payroll runs. The calculation engine itself never fails.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/company.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/company.yaml");
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

    /// Package id was not found in the configuration.
    #[error("Package not found: {id}")]
    PackageNotFound {
        /// The package id that was not found.
        id: String,
    },

    /// An imported file could not be read, decoded, or had no data rows.
    #[error("Failed to parse import file: {message}")]
    Parse {
        /// A description of what made the file unreadable.
        message: String,
    },

    /// A template file could not be written.
    #[error("Failed to write template: {message}")]
    Export {
        /// A description of the write failure.
        message: String,
    },

    /// A payroll month was not in `YYYY-MM` form.
    #[error("Invalid payroll month '{value}': expected YYYY-MM")]
    InvalidPayrollMonth {
        /// The rejected value.
        value: String,
    },
}

impl EngineError {
    /// Builds a [`EngineError::Parse`] from anything displayable.
    pub fn parse(message: impl Into<String>) -> Self {
        EngineError::Parse {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
