//! Error types for the Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for conditions that are genuine failures (configuration, collaborator and
//! ledger lookups). Input validation of a salary calculation is not an error:
//! calculators report it through their result types instead.

use thiserror::Error;

/// The main error type for the Salary Engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
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

    /// A configuration value was parsed but is out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending settings field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A designation name is not part of the hotel designation catalogue.
    #[error("Unknown designation: {name}")]
    UnknownDesignation {
        /// The name that failed to match.
        name: String,
    },

    /// A staff record was invalid or contained inconsistent data.
    #[error("Invalid staff field '{field}': {message}")]
    InvalidStaff {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No finalized record exists with the given id.
    #[error("Finalized record not found: {id}")]
    RecordNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// An external collaborator (staff source, attendance store) failed.
    #[error("Collaborator error: {message}")]
    Collaborator {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
