//! Document sink abstraction.
//!
//! This crate defines the `DocumentSink` trait that every delivery target
//! implements, together with the two local sinks:
//!
//! - [`ConsoleSink`] - pretty-prints documents to stdout
//! - [`BulkFileSink`] - writes bulk action/document line pairs to a file
//!
//! The remote bulk endpoint lives in the `elasticsearch-sink` crate. A run
//! delivers through a [`SinkSet`], which fixes the active sinks once at
//! setup and tears them all down exactly once.

mod console;
mod error;
mod file;
mod set;
mod traits;

pub use console::ConsoleSink;
pub use error::SinkError;
pub use file::{BulkFileSink, DEFAULT_BUFFER_SIZE};
pub use set::SinkSet;
pub use traits::DocumentSink;
