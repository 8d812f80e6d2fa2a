//! Core types for docgen.
//!
//! This crate provides the types shared by the generator and every sink:
//!
//! - [`Document`] - The fixed-shape synthetic document
//! - [`BulkAction`] - The action header that precedes a document in bulk payloads
//!
//! # Architecture
//!
//! ```text
//! docgen-core (this crate)
//!    │
//!    ├─── docgen-generator    (produces Documents)
//!    │
//!    ├─── docgen-sink         (console and bulk file sinks)
//!    └─── elasticsearch-sink  (bulk endpoint sink)
//! ```
//!
//! # Example
//!
//! ```rust
//! use docgen_core::{BulkAction, Document};
//!
//! let doc = Document::new(
//!     uuid::Uuid::nil(),
//!     "A title",
//!     "Jane Doe",
//!     "A short summary.",
//!     "Some text.",
//! );
//! let action = BulkAction::index("articles", &doc);
//! assert_eq!(action.index.id, doc.id.to_string());
//! ```

pub mod action;
pub mod document;

// Re-exports for convenience
pub use action::{BulkAction, IndexAction};
pub use document::{Document, BASE_DOCUMENT_OVERHEAD, MIN_DOCUMENT_SIZE};
