use std::time::Duration;

/// Errors raised by the MongoDB access layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Anything the driver reports: connection, query or decode failures.
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The operation did not finish before its deadline and was abandoned.
    #[error("{operation} timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },
}
