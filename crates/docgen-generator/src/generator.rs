//! Main document generator.

use crate::generators::lorem::LoremSource;
use crate::generators::TextSource;
use docgen_core::{Document, BASE_DOCUMENT_OVERHEAD};

/// Maximum length of the `summary` field.
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Generator that produces documents of an approximate target size.
///
/// Documents reach the target by appending whole paragraphs, so the
/// estimated size is never below the target and overshoots it by less
/// than one paragraph.
pub struct DocumentGenerator<S = LoremSource> {
    /// Source of field contents
    source: S,
    /// Whether documents carry the enrichment marker
    enrichment: bool,
    /// Number of documents generated so far
    generated: u64,
}

impl DocumentGenerator<LoremSource> {
    /// Create a generator backed by a lorem source with the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(LoremSource::seeded(seed))
    }
}

impl<S: TextSource> DocumentGenerator<S> {
    /// Create a new generator over the given text source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            enrichment: false,
            generated: 0,
        }
    }

    /// Mark every generated document for enrichment.
    pub fn with_enrichment(mut self, enabled: bool) -> Self {
        self.enrichment = enabled;
        self
    }

    /// Whether generated documents carry the enrichment marker.
    pub fn enrichment(&self) -> bool {
        self.enrichment
    }

    /// Number of documents generated so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Generate one document whose estimated size reaches `target_size`.
    pub fn generate(&mut self, target_size: usize) -> Document {
        let mut paragraphs = Vec::new();
        let mut total_size = BASE_DOCUMENT_OVERHEAD;
        while total_size < target_size {
            let paragraph = self.source.paragraph();
            total_size += paragraph.len();
            paragraphs.push(paragraph);
        }

        let id = self.source.uuid();
        let title = self.source.sentence().replace('.', "");
        let author = self.source.name();
        let summary = self.source.text(SUMMARY_MAX_CHARS);

        let document = Document::new(id, title, author, summary, paragraphs.join("\n\n"));
        self.generated += 1;

        if self.enrichment {
            document.with_inference_flag()
        } else {
            document
        }
    }

    /// Generate `count` documents in order.
    pub fn generate_batch(&mut self, count: usize, target_size: usize) -> Vec<Document> {
        self.documents(count as u64, target_size).collect()
    }

    /// Lazily generate `count` documents.
    pub fn documents(&mut self, count: u64, target_size: usize) -> DocumentIterator<'_, S> {
        DocumentIterator {
            generator: self,
            target_size,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates documents.
pub struct DocumentIterator<'a, S> {
    generator: &'a mut DocumentGenerator<S>,
    target_size: usize,
    remaining: u64,
}

impl<S: TextSource> Iterator for DocumentIterator<'_, S> {
    type Item = Document;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.generate(self.target_size))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl<S: TextSource> ExactSizeIterator for DocumentIterator<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use uuid::Uuid;

    /// Source with fixed-length paragraphs, for exact size arithmetic.
    struct FixedSource {
        paragraph_len: usize,
        next_id: u128,
    }

    impl FixedSource {
        fn new(paragraph_len: usize) -> Self {
            Self {
                paragraph_len,
                next_id: 1,
            }
        }
    }

    impl TextSource for FixedSource {
        fn paragraph(&mut self) -> String {
            "p".repeat(self.paragraph_len)
        }

        fn sentence(&mut self) -> String {
            "A fixed title.".to_string()
        }

        fn name(&mut self) -> String {
            "Fixed Author".to_string()
        }

        fn text(&mut self, max_chars: usize) -> String {
            "s".repeat(max_chars)
        }

        fn uuid(&mut self) -> Uuid {
            self.next_id += 1;
            Uuid::from_u128(self.next_id)
        }
    }

    #[test]
    fn test_minimum_size_has_no_paragraphs() {
        let mut generator = DocumentGenerator::new(FixedSource::new(100));
        let doc = generator.generate(300);

        assert_eq!(doc.text, "");
        assert_eq!(doc.estimated_size(), 300);
    }

    #[test]
    fn test_exact_paragraph_count() {
        let mut generator = DocumentGenerator::new(FixedSource::new(100));

        // 300 + 100 * 7 = 1000 meets the target exactly
        let doc = generator.generate(1000);
        assert_eq!(doc.paragraphs().count(), 7);

        // One byte more needs an extra paragraph
        let doc = generator.generate(1001);
        assert_eq!(doc.paragraphs().count(), 8);
        assert_eq!(doc.estimated_size(), 1100);
    }

    #[test]
    fn test_paragraphs_joined_by_blank_line() {
        let mut generator = DocumentGenerator::new(FixedSource::new(3));
        let doc = generator.generate(306);

        assert_eq!(doc.text, "ppp\n\nppp");
    }

    #[test]
    fn test_size_bounds_with_lorem_source() {
        for seed in 0..5 {
            let mut generator = DocumentGenerator::seeded(seed);

            for target in [300, 301, 450, 1000, 4096, 20_000] {
                let doc = generator.generate(target);
                let lengths: Vec<usize> = doc.paragraphs().map(str::len).collect();
                let size = BASE_DOCUMENT_OVERHEAD + lengths.iter().sum::<usize>();

                assert!(size >= target, "size {size} below target {target}");
                if let Some(last) = lengths.last() {
                    // Everything before the last paragraph stayed under the target
                    assert!(size - last < target);
                }
            }
        }
    }

    #[test]
    fn test_field_shapes() {
        let mut generator = DocumentGenerator::seeded(42);

        for _ in 0..100 {
            let doc = generator.generate(1000);
            assert!(!doc.title.contains('.'));
            assert!(!doc.title.is_empty());
            assert!(doc.author.contains(' '));
            assert!(doc.summary.len() <= SUMMARY_MAX_CHARS);
            assert_eq!(doc.id.get_version_num(), 4);
        }
    }

    #[test]
    fn test_enrichment_flag() {
        let mut enriched = DocumentGenerator::seeded(42).with_enrichment(true);
        assert!(enriched.enrichment());
        for doc in enriched.documents(20, 500) {
            assert_eq!(doc.inference_flag, Some(true));
            let json: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
            assert_eq!(json["_run_ml_inference"], serde_json::Value::Bool(true));
        }

        let mut plain = DocumentGenerator::seeded(42);
        assert!(!plain.enrichment());
        for doc in plain.documents(20, 500) {
            assert_eq!(doc.inference_flag, None);
            let json: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
            assert!(json.get("_run_ml_inference").is_none());
        }
    }

    #[test]
    fn test_unique_ids() {
        let mut generator = DocumentGenerator::seeded(42);
        let ids: HashSet<Uuid> = generator.documents(1000, 300).map(|d| d.id).collect();

        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = DocumentGenerator::seeded(42);
        let mut gen2 = DocumentGenerator::seeded(42);

        assert_eq!(gen1.generate_batch(5, 800), gen2.generate_batch(5, 800));
    }

    #[test]
    fn test_generated_count() {
        let mut generator = DocumentGenerator::seeded(42);

        assert_eq!(generator.generated(), 0);
        let batch = generator.generate_batch(3, 300);
        assert_eq!(batch.len(), 3);
        assert_eq!(generator.generated(), 3);

        let iter = generator.documents(4, 300);
        assert_eq!(iter.len(), 4);
        let _ = iter.count();
        assert_eq!(generator.generated(), 7);
    }
}
