//! Bulk request bodies and responses.

use docgen_core::{BulkAction, Document};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Build the NDJSON body of a `_bulk` request.
///
/// One `index` header and one document line per document; the body ends
/// with a newline as the endpoint requires.
pub fn bulk_body(
    index: &str,
    pipeline: Option<&str>,
    documents: &[Document],
) -> serde_json::Result<String> {
    let mut body = String::new();
    for document in documents {
        let action = BulkAction::index(index, document).with_pipeline(pipeline);
        body.push_str(&action.to_json()?);
        body.push('\n');
        body.push_str(&document.to_json()?);
        body.push('\n');
    }
    Ok(body)
}

/// Response of a `_bulk` request.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkResponse {
    /// Milliseconds the endpoint spent on the request.
    #[serde(default)]
    pub took: u64,
    /// Whether any item failed.
    pub errors: bool,
    /// One entry per operation, keyed by operation type.
    #[serde(default)]
    pub items: Vec<BTreeMap<String, BulkItem>>,
}

/// Result of a single bulk operation.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkItem {
    #[serde(rename = "_index", default)]
    pub index: Option<String>,
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub status: u16,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl BulkItem {
    pub fn failed(&self) -> bool {
        self.error.is_some() || self.status >= 300
    }

    /// Human-readable error detail, e.g. `mapper_parsing_exception: failed to parse`.
    pub fn error_detail(&self) -> String {
        let detail = match &self.error {
            Some(serde_json::Value::Object(error)) => {
                let kind = error.get("type").and_then(|v| v.as_str());
                let reason = error.get("reason").and_then(|v| v.as_str());
                match (kind, reason) {
                    (Some(kind), Some(reason)) => format!("{kind}: {reason}"),
                    _ => serde_json::Value::Object(error.clone()).to_string(),
                }
            }
            Some(other) => other.to_string(),
            None => format!("status {}", self.status),
        };

        match &self.id {
            Some(id) => format!("document {id}: {detail}"),
            None => detail,
        }
    }
}

impl BulkResponse {
    /// Iterate over all operation results.
    pub fn results(&self) -> impl Iterator<Item = &BulkItem> {
        self.items.iter().flat_map(|item| item.values())
    }

    /// Iterate over failed operations, in request order.
    pub fn failed_items(&self) -> impl Iterator<Item = &BulkItem> {
        self.results().filter(|item| item.failed())
    }

    /// Whether any operation failed.
    pub fn has_failures(&self) -> bool {
        self.errors || self.failed_items().next().is_some()
    }

    /// Detail of the first failed operation.
    pub fn first_error(&self) -> Option<String> {
        self.failed_items().next().map(BulkItem::error_detail)
    }
}
