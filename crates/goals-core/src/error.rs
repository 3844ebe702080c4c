// error.rs — Error types for the goal store and service.

use thiserror::Error;

/// Errors that can occur during goal operations.
#[derive(Debug, Error)]
pub enum GoalError {
    /// The submitted text was missing or blank after trimming.
    #[error("invalid goal text")]
    InvalidInput,

    /// The store could not be reached or the operation failed inside it.
    ///
    /// `operation` names what was being attempted (`list`, `create`, `delete`).
    #[error("store unavailable during {operation}: {source}")]
    StoreUnavailable {
        operation: &'static str,
        #[source]
        source: Box<GoalError>,
    },

    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to serialize/deserialize goal documents.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The connection string names a scheme no store understands.
    #[error("invalid store uri: {0}")]
    InvalidStoreUri(String),

    /// The store handle was closed and no longer accepts operations.
    #[error("store is closed")]
    Closed,
}

impl GoalError {
    /// Wrap a store-level failure as `StoreUnavailable` for `operation`.
    pub fn unavailable(operation: &'static str, source: GoalError) -> Self {
        GoalError::StoreUnavailable {
            operation,
            source: Box::new(source),
        }
    }

    /// True for errors the caller caused (bad input), false for store failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GoalError::InvalidInput)
    }
}
