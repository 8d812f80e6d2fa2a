//! Bulk indexing sink.

use crate::bulk::bulk_body;
use crate::client::ElasticsearchClient;
use docgen_core::Document;
use docgen_sink::{DocumentSink, SinkError};
use std::time::Instant;
use tracing::{debug, error, info};

/// Sink that indexes every batch with one `_bulk` request.
///
/// Any rejected document fails the whole dispatch; the error carries the
/// detail of the first rejected document.
pub struct IndexSink {
    client: Option<ElasticsearchClient>,
    index: String,
    pipeline: Option<String>,
    documents_indexed: u64,
}

impl IndexSink {
    /// Create a sink writing to `index`, optionally through an ingest pipeline.
    pub fn new(
        client: ElasticsearchClient,
        index: impl Into<String>,
        pipeline: Option<String>,
    ) -> Self {
        Self {
            client: Some(client),
            index: index.into(),
            pipeline,
            documents_indexed: 0,
        }
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn pipeline(&self) -> Option<&str> {
        self.pipeline.as_deref()
    }

    /// Number of documents accepted by the endpoint so far.
    pub fn documents_indexed(&self) -> u64 {
        self.documents_indexed
    }

    fn client(&self) -> Result<&ElasticsearchClient, SinkError> {
        self.client
            .as_ref()
            .ok_or_else(|| SinkError::Closed("elasticsearch".to_string()))
    }
}

#[async_trait::async_trait]
impl DocumentSink for IndexSink {
    fn name(&self) -> &str {
        "elasticsearch"
    }

    async fn dispatch(&mut self, batch: &[Document]) -> Result<(), SinkError> {
        if batch.is_empty() {
            return Ok(());
        }

        let client = self.client()?;
        debug!("Indexing {} documents to {}", batch.len(), self.index);

        let body = bulk_body(&self.index, self.pipeline.as_deref(), batch)?;
        let started = Instant::now();
        let response = client.bulk(body).await.map_err(|e| {
            error!("Error while indexing documents: {}", e);
            SinkError::from(e)
        })?;

        if response.has_failures() {
            let failed = response.failed_items().count();
            let first_error = response
                .first_error()
                .unwrap_or_else(|| "endpoint reported errors without item detail".to_string());
            error!(
                "Error while indexing documents: {} of {} failed",
                failed,
                batch.len()
            );
            error!("First error: {}", first_error);
            return Err(SinkError::BulkDelivery {
                failed,
                total: batch.len(),
                first_error,
            });
        }

        self.documents_indexed += batch.len() as u64;
        debug!(
            "Bulk request for {} documents took {} ms on the endpoint, {:?} round trip",
            batch.len(),
            response.took,
            started.elapsed()
        );
        Ok(())
    }

    async fn clear_target(&mut self) -> Result<(), SinkError> {
        let client = self.client()?;
        info!("Clearing index {}", self.index);
        let deleted = client.delete_all(&self.index).await?;
        info!("Deleted {} documents from {}", deleted, self.index);
        Ok(())
    }

    async fn close(&mut self) -> Result<(), SinkError> {
        if let Some(client) = self.client.take() {
            debug!(
                "Indexed {} documents into {}",
                self.documents_indexed, self.index
            );
            client.close();
        }
        Ok(())
    }
}
