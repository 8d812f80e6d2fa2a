//! Bulk action headers.
//!
//! Both the bulk file format and the `_bulk` request body frame every
//! document with a one-line action header:
//!
//! ```text
//! {"index":{"_index":"articles","_id":"550e8400-e29b-41d4-a716-446655440000"}}
//! {"id":"550e8400-e29b-41d4-a716-446655440000","title":"...",...}
//! ```

use crate::document::Document;
use serde::{Deserialize, Serialize};

/// Action header line of a bulk payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAction {
    pub index: IndexAction,
}

/// Metadata of an `index` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexAction {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    /// Ingest pipeline applied to the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<String>,
}

impl BulkAction {
    /// Build the `index` header for a document.
    pub fn index(index: impl Into<String>, document: &Document) -> Self {
        Self {
            index: IndexAction {
                index: index.into(),
                id: document.id.to_string(),
                pipeline: None,
            },
        }
    }

    /// Route the document through an ingest pipeline.
    pub fn with_pipeline(mut self, pipeline: Option<&str>) -> Self {
        self.index.pipeline = pipeline.map(str::to_string);
        self
    }

    /// Compact JSON form of the header line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
