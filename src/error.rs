//! Error types for the kalender crate.

use std::path::PathBuf;

/// Error type for the fallible outer surface: argument handling and
/// loading activity exports. Grid and holiday computation never fail.
#[derive(Debug, thiserror::Error)]
pub enum KalenderError {
    /// Returned for argument combinations or values that make no sense.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Returned when a year is not a number or outside 1-9999.
    #[error("Invalid year: {0} (must be 1-9999)")]
    InvalidYear(String),

    /// Returned when a month is neither a number nor a known month name.
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// Returned when a date is not in `YYYY-MM-DD` form.
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Returned for an activity record that fails validation.
    #[error("activity {id:?} rejected: {reason}")]
    InvalidActivity { id: String, reason: String },

    /// Returned when the activities file cannot be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Returned when the activities file is not a JSON array of objects.
    #[error("malformed activities file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, KalenderError>;
