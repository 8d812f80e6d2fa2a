//! Error types for the Elasticsearch sink.

use docgen_sink::SinkError;
use thiserror::Error;

/// Errors that can occur talking to Elasticsearch.
#[derive(Error, Debug)]
pub enum ElasticsearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {path} failed with status {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    #[error("Invalid cloud ID: {0}")]
    CloudId(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ElasticsearchError> for SinkError {
    fn from(err: ElasticsearchError) -> Self {
        match err {
            ElasticsearchError::Json(e) => SinkError::Json(e),
            other => SinkError::Transport(other.to_string()),
        }
    }
}
