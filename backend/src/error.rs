//! Engine errors
//!
//! Unknown domain values (diseases, cities, hospital types) are never errors;
//! they resolve to documented defaults. Errors cover bad caller input and
//! faults in the data supplied by collaborators.

use thiserror::Error;

/// Errors returned by engine entry points
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Malformed hospital record '{hospital}': {reason}")]
    MalformedRecord { hospital: String, reason: String },

    #[error("Hospital source error: {0}")]
    Source(String),

    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table error: {0}")]
    Table(#[from] crate::tables::TableError),
}

impl EngineError {
    /// Whether the error was caused by the caller's arguments
    ///
    /// Validation errors are reported to the user as bad input; anything
    /// else is an unexpected failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::MissingParameter(_) | EngineError::InvalidParameter { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
