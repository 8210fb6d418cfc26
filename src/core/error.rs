//! Error type for the I/O facing parts of the library.
//!
//! The grade engine itself never fails; these errors come from persistence,
//! export, calendar rendering and record editing.

use thiserror::Error;

/// Errors raised by storage, export, calendar and record editing.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTML template rendering failure
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// A stored value exists but cannot be decoded
    #[error("Stored value under '{key}' is corrupt: {message}")]
    Corrupt {
        /// Store key holding the bad value
        key: String,
        /// Decoder message
        message: String,
    },

    /// A selector matched nothing
    #[error("No {kind} matches '{selector}'")]
    NotFound {
        /// Entity kind ("year", "module", "assessment")
        kind: &'static str,
        /// The id or name that was looked up
        selector: String,
    },

    /// Caller-supplied value rejected
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, Error>;
