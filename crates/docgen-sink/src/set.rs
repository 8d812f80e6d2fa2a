//! The set of sinks active for one run.

use crate::console::ConsoleSink;
use crate::error::SinkError;
use crate::traits::DocumentSink;
use docgen_core::Document;
use tracing::{debug, error};

/// Sinks a run delivers to, fixed at setup.
///
/// Either the console alone, or an ordered set of delivery sinks (a bulk
/// file, an endpoint, or both). Every batch goes to each sink in order.
pub struct SinkSet {
    sinks: Vec<Box<dyn DocumentSink>>,
}

impl SinkSet {
    /// Deliver to standard output only.
    pub fn console() -> Self {
        Self {
            sinks: vec![Box::new(ConsoleSink::stdout())],
        }
    }

    /// Deliver to the given sinks, in order.
    ///
    /// An empty list falls back to the console.
    pub fn delivery(sinks: Vec<Box<dyn DocumentSink>>) -> Self {
        if sinks.is_empty() {
            return Self::console();
        }
        Self { sinks }
    }

    /// Names of the active sinks, in delivery order.
    pub fn names(&self) -> Vec<&str> {
        self.sinks.iter().map(|sink| sink.name()).collect()
    }

    /// Clear every sink's target before the first batch.
    pub async fn clear(&mut self) -> Result<(), SinkError> {
        for sink in &mut self.sinks {
            sink.clear_target().await?;
        }
        Ok(())
    }

    /// Deliver a batch to every sink. Stops at the first failure.
    pub async fn dispatch(&mut self, batch: &[Document]) -> Result<(), SinkError> {
        for sink in &mut self.sinks {
            sink.dispatch(batch).await?;
        }
        Ok(())
    }

    /// Close every sink, even after a failure.
    ///
    /// Returns the first close error.
    pub async fn close(mut self) -> Result<(), SinkError> {
        let mut first_error = None;

        for sink in &mut self.sinks {
            debug!("Closing {} sink", sink.name());
            if let Err(e) = sink.close().await {
                error!("Failed to close {} sink: {}", sink.name(), e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
