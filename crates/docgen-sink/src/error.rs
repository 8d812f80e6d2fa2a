//! Error types for document sinks.

use thiserror::Error;

/// Errors that can occur while delivering documents.
#[derive(Error, Debug)]
pub enum SinkError {
    /// IO error from a file or console writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The endpoint rejected one or more documents of a bulk request.
    #[error("Bulk request failed for {failed} of {total} documents, first error: {first_error}")]
    BulkDelivery {
        failed: usize,
        total: usize,
        first_error: String,
    },

    /// The request never produced a usable bulk response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The sink was used after `close`.
    #[error("Sink '{0}' is already closed")]
    Closed(String),
}
