//! Error types for the Attendance Eligibility Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Configuration errors are fatal: the engine cannot evaluate anything without
//! a fully loaded pattern catalog. Per-record outcomes are never errors; they
//! resolve to a [`crate::models::DecisionStatus`] instead.

use thiserror::Error;

/// The main error type for the Attendance Eligibility Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/patterns.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/patterns.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found or could not be read.
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

    /// One of the two required pattern lists is absent from the pattern file.
    #[error("Pattern list '{list}' is missing from '{path}'")]
    MissingPatternList {
        /// The path to the pattern file.
        path: String,
        /// The name of the missing list.
        list: String,
    },

    /// A pattern entry is present but cannot be turned into a usable pattern.
    #[error("Invalid pattern {list}[{index}]: {message}")]
    InvalidPattern {
        /// The list the pattern was declared in.
        list: String,
        /// Zero-based position in the list.
        index: usize,
        /// What is wrong with the entry.
        message: String,
    },

    /// The rules file (roster, category labels, attendance codes) is inconsistent.
    #[error("Invalid attendance rules: {message}")]
    InvalidRules {
        /// What is wrong with the rules.
        message: String,
    },

    /// A grid or result file could not be read or written.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// The file involved.
        path: String,
        /// The underlying error.
        message: String,
    },

    /// A CSV grid or result table could not be encoded or decoded.
    #[error("CSV error on '{path}': {message}")]
    Csv {
        /// The file involved.
        path: String,
        /// The underlying error.
        message: String,
    },
}

impl EngineError {
    /// Wraps a `csv` error raised while reading or writing `path`.
    ///
    /// Underlying I/O failures become [`EngineError::Io`]; everything else
    /// becomes [`EngineError::Csv`].
    pub fn from_csv(path: &std::path::Path, error: csv::Error) -> Self {
        let path = path.display().to_string();
        if error.is_io_error() {
            EngineError::Io {
                path,
                message: error.to_string(),
            }
        } else {
            EngineError::Csv {
                path,
                message: error.to_string(),
            }
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
