//! docgen library
//!
//! Generates synthetic documents of an approximate size and delivers them in
//! batches to the console, a bulk action file, or an Elasticsearch index,
//! reporting throughput along the way.
//!
//! # Crates
//!
//! - `docgen_core` - the `Document` and bulk action types
//! - `docgen_generator` - documents of a target size from a seeded text source
//! - `docgen_sink` - the `DocumentSink` trait, console and bulk file sinks
//! - `elasticsearch_sink` - the `_bulk` endpoint sink and its HTTP client
//!
//! # CLI Usage
//!
//! ```bash
//! # Print 10 documents to stdout
//! docgen
//!
//! # Write 10000 documents of ~2 KB as bulk actions
//! docgen -o articles.ndjson -i articles -l 10000 -s 2000
//!
//! # Index into Elastic Cloud, clearing the index first
//! docgen -c "$ELASTIC_CLOUD_ID" -p "$ELASTIC_PASSWORD" -i articles -x -l 100000
//! ```

pub mod config;
pub mod driver;
pub mod generate;
pub mod logging;
pub mod report;
pub mod throughput;

pub use config::{Advisory, ConfigError, GenerateArgs, OutputMode, RunConfig};
pub use driver::{BatchDriver, BatchPlan, RunError, RunPhase, RunProgress, RunState};
pub use generate::{open_sinks, run_generate};
pub use report::RunReport;
pub use throughput::{ThroughputReading, ThroughputTracker};
