//! Elasticsearch sink for docgen.
//!
//! This crate provides the `IndexSink` which submits each batch of documents
//! as one `_bulk` request, and the `ElasticsearchClient` connection it runs
//! on. The client owns transport policy (timeouts, retries with backoff);
//! the sink treats every bulk call as a single blocking operation and turns
//! any rejected document into a fatal error.
//!
//! # Architecture
//!
//! ```text
//!   &[Document]
//!        │
//!        ▼
//! ┌─────────────────┐     ┌──────────────────────┐
//! │    IndexSink    │────►│       bulk.rs        │
//! │                 │     │ - NDJSON body        │
//! │ - index         │     │ - BulkResponse       │
//! │ - pipeline      │     └──────────────────────┘
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │ ElasticsearchClient │
//! │ - base url / auth   │
//! │ - timeout, retries  │
//! └─────────┬───────────┘
//!           │
//!           ▼
//!    POST {base}/_bulk
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use elasticsearch_sink::{ClientConfig, ElasticsearchClient, IndexSink};
//! use docgen_sink::DocumentSink;
//!
//! let config = ClientConfig::from_cloud_id(&cloud_id)?
//!     .with_credentials("elastic", &password);
//! let client = ElasticsearchClient::new(config)?;
//!
//! let mut sink = IndexSink::new(client, "articles", Some("articles".to_string()));
//! sink.dispatch(&documents).await?;
//! sink.close().await?;
//! ```

pub mod bulk;
pub mod client;
pub mod cloud_id;
pub mod error;
pub mod sink;

// Re-exports for convenience
pub use bulk::{BulkItem, BulkResponse};
pub use client::{ClientConfig, Credentials, ElasticsearchClient};
pub use cloud_id::cloud_id_to_url;
pub use error::ElasticsearchError;
pub use sink::IndexSink;
