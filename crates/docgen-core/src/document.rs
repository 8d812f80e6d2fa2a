//! The synthetic document type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Approximate serialized size of a document without its `text` field.
///
/// Generation starts its size accumulator here.
pub const BASE_DOCUMENT_OVERHEAD: usize = 300;

/// Smallest document size that can be requested.
pub const MIN_DOCUMENT_SIZE: usize = BASE_DOCUMENT_OVERHEAD;

/// A generated document.
///
/// Field order matches the JSON layout written to every sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier, also used as the `_id` of bulk actions.
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub summary: String,
    /// Paragraphs joined by a blank line.
    pub text: String,
    /// Marker asking the ingest pipeline to run inference on this document.
    ///
    /// Omitted from the JSON when enrichment is off.
    #[serde(
        rename = "_run_ml_inference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub inference_flag: Option<bool>,
}

impl Document {
    /// Create a document without the enrichment marker.
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        author: impl Into<String>,
        summary: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            summary: summary.into(),
            text: text.into(),
            inference_flag: None,
        }
    }

    /// Mark the document for enrichment.
    pub fn with_inference_flag(mut self) -> Self {
        self.inference_flag = Some(true);
        self
    }

    /// Size estimate used during generation: base overhead plus text bytes.
    pub fn estimated_size(&self) -> usize {
        let paragraphs = self.paragraphs().map(str::len).sum::<usize>();
        BASE_DOCUMENT_OVERHEAD + paragraphs
    }

    /// Iterate over the paragraphs of `text`.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.text.split("\n\n").filter(|p| !p.is_empty())
    }

    /// Compact JSON form, as written to bulk payloads.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(
            Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            "Quia dolor sit",
            "Ada Palmer",
            "Lorem ipsum.",
            "First paragraph.\n\nSecond paragraph.",
        )
    }

    #[test]
    fn test_inference_flag_omitted_when_unset() {
        let json = sample().to_json().unwrap();
        assert!(!json.contains("_run_ml_inference"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert_eq!(
            obj.get("id").unwrap().as_str().unwrap(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_inference_flag_serialized_when_set() {
        let json = sample().with_inference_flag().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value.get("_run_ml_inference"),
            Some(&serde_json::Value::Bool(true))
        );
    }

    #[test]
    fn test_field_order() {
        let json = sample().with_inference_flag().to_json().unwrap();
        let keys = [
            "\"id\"",
            "\"title\"",
            "\"author\"",
            "\"summary\"",
            "\"text\"",
            "\"_run_ml_inference\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| json.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let doc = sample().with_inference_flag();
        let parsed: Document = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_estimated_size() {
        let doc = sample();
        assert_eq!(
            doc.estimated_size(),
            BASE_DOCUMENT_OVERHEAD + "First paragraph.".len() + "Second paragraph.".len()
        );
        assert_eq!(doc.paragraphs().count(), 2);
    }

    #[test]
    fn test_empty_text_has_no_paragraphs() {
        let mut doc = sample();
        doc.text.clear();
        assert_eq!(doc.paragraphs().count(), 0);
        assert_eq!(doc.estimated_size(), BASE_DOCUMENT_OVERHEAD);
    }
}
