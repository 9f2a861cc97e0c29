//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CrewError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `cs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CrewError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid clock time {0:?}: expected HH:MM")]
    ClockTime(String),

    #[error("duplicate {what} id {id:?}")]
    DuplicateId { what: &'static str, id: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `cs-*` crates.
pub type CrewResult<T> = Result<T, CrewError>;
