//! Console sink.

use crate::error::SinkError;
use crate::traits::DocumentSink;
use docgen_core::Document;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{Stdout, Write};

/// Sink that pretty-prints every document as indented JSON.
///
/// Used when neither a file nor an endpoint is configured.
pub struct ConsoleSink<W = Stdout> {
    writer: W,
}

impl ConsoleSink<Stdout> {
    /// Print to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    /// Print to an arbitrary writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn print(&mut self, document: &Document) -> Result<(), SinkError> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut self.writer, formatter);
        document.serialize(&mut serializer)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl<W: Write + Send> DocumentSink for ConsoleSink<W> {
    fn name(&self) -> &str {
        "console"
    }

    async fn dispatch(&mut self, batch: &[Document]) -> Result<(), SinkError> {
        for document in batch {
            self.print(document)?;
        }
        Ok(())
    }

    async fn close(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}
