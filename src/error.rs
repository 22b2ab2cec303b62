//! Error types for loading, scheduling, and exporting trips.
//!
//! The scheduling pass itself never fails. Errors come from the
//! collaborators around it: reading trip rows, loading configuration,
//! and writing rosters out.

use thiserror::Error;

/// Errors raised by the turn-schedule pipeline.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A trip row is missing a required field or holds an unparsable time.
    ///
    /// `row` is the 1-based CSV record after the header; fully empty lines
    /// are not counted.
    #[error("malformed trip at row {row}, field '{field}': {message}")]
    MalformedInput {
        row: usize,
        field: String,
        message: String,
    },

    /// The input contained no trips.
    #[error("no trips to schedule")]
    EmptyInput,

    /// File extension not understood by the loader or exporter.
    #[error("unsupported file format: '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),

    /// Configuration values out of range or unreadable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScheduleError {
    /// Shorthand for a [`ScheduleError::MalformedInput`].
    pub fn malformed(row: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        ScheduleError::MalformedInput {
            row,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;
