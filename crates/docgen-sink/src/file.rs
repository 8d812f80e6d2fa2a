//! Bulk action file sink.
//!
//! Writes one line pair per document: the `index` action header, then the
//! document itself. The output can be replayed against a `_bulk` endpoint.

use crate::error::SinkError;
use crate::traits::DocumentSink;
use docgen_core::{BulkAction, Document};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default buffer size for bulk file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Sink writing bulk action/document line pairs.
pub struct BulkFileSink {
    path: PathBuf,
    index: String,
    writer: Option<BufWriter<File>>,
    documents_written: u64,
}

impl BulkFileSink {
    /// Create (or truncate) the output file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the output file
    /// * `index` - Index name written into every action header
    pub fn create<P: AsRef<Path>>(path: P, index: impl Into<String>) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;

        Ok(Self {
            path,
            index: index.into(),
            writer: Some(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file)),
            documents_written: 0,
        })
    }

    /// Path of the output file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of documents written so far.
    pub fn documents_written(&self) -> u64 {
        self.documents_written
    }
}

#[async_trait::async_trait]
impl DocumentSink for BulkFileSink {
    fn name(&self) -> &str {
        "file"
    }

    async fn dispatch(&mut self, batch: &[Document]) -> Result<(), SinkError> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| SinkError::Closed("file".to_string()))?;

        debug!(
            "Writing {} documents to {}",
            batch.len(),
            self.path.display()
        );

        for document in batch {
            serde_json::to_writer(&mut *writer, &BulkAction::index(&self.index, document))?;
            writeln!(writer)?;
            serde_json::to_writer(&mut *writer, document)?;
            writeln!(writer)?;
        }

        self.documents_written += batch.len() as u64;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), SinkError> {
        if let Some(mut writer) = self.writer.take() {
            debug!(
                "Closing {} after {} documents",
                self.path.display(),
                self.documents_written
            );
            writer.flush()?;
        }
        Ok(())
    }
}
