//! Document generator for docgen.
//!
//! This crate provides the `DocumentGenerator` which produces documents of an
//! approximate target size. Field contents come from a [`TextSource`]; the
//! bundled [`LoremSource`] draws lorem-ipsum words and names from a seeded RNG
//! so runs with the same seed produce the same documents.
//!
//! # Architecture
//!
//! ```text
//!   target size
//!        │
//!        ▼
//! ┌─────────────────────┐       ┌──────────────────┐
//! │  DocumentGenerator  │◄──────│    TextSource    │
//! │                     │       │  (LoremSource)   │
//! │  - enrichment flag  │       │  - rng (StdRng)  │
//! │  - generated count  │       └──────────────────┘
//! └──────────┬──────────┘
//!            │
//!            ▼
//!   Document { id, title, author, summary, text, _run_ml_inference? }
//! ```
//!
//! # Example
//!
//! ```rust
//! use docgen_generator::{DocumentGenerator, LoremSource};
//!
//! let mut generator = DocumentGenerator::new(LoremSource::seeded(42));
//! let doc = generator.generate(1000);
//! assert!(doc.estimated_size() >= 1000);
//! ```

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{DocumentGenerator, DocumentIterator, SUMMARY_MAX_CHARS};
pub use generators::lorem::LoremSource;
pub use generators::TextSource;
