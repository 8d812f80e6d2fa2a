//! DocumentSink trait definition.

use crate::error::SinkError;
use docgen_core::Document;

/// Trait for delivering batches of documents.
///
/// # Usage Pattern
///
/// ```ignore
/// sink.clear_target().await?;
/// for batch in batches {
///     sink.dispatch(&batch).await?;
/// }
/// sink.close().await?;
/// ```
///
/// A failed `dispatch` is fatal for the run. Implementations do not retry
/// individual documents; transient transport retries belong to the
/// underlying connection.
#[async_trait::async_trait]
pub trait DocumentSink: Send {
    /// Short name used in log messages.
    fn name(&self) -> &str;

    /// Deliver a batch of documents, preserving their order.
    async fn dispatch(&mut self, batch: &[Document]) -> Result<(), SinkError>;

    /// Remove existing documents from the target before a run.
    ///
    /// Sinks without persistent state keep the default no-op.
    async fn clear_target(&mut self) -> Result<(), SinkError> {
        Ok(())
    }

    /// Flush and release the underlying handle.
    async fn close(&mut self) -> Result<(), SinkError>;
}
