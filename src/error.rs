//! Error types for loading, aggregating, and driving a session.

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::City;

/// A city's backing file could not be used.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No data available for {city}: cannot open {path:?} ({source})")]
    Unavailable {
        city: City,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Data file for {city} has an unreadable header: {source}")]
    Header {
        city: City,
        #[source]
        source: csv::Error,
    },

    #[error("Data file for {city} is missing required column {column:?}")]
    MissingColumn { city: City, column: &'static str },
}

/// A statistic is undefined for the current filtered rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("No data for this filter")]
    EmptyResultSet,
}

/// Failures that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Input closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}
