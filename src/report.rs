//! Summary of a completed run.

use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Documents delivered.
    pub documents: u64,
    /// Requested approximate document size in bytes.
    pub document_size: usize,
    /// Batches delivered.
    pub batches: u64,
    /// Wall time from the first batch to the last.
    pub duration: Duration,
    /// Average documents per second over the run.
    pub docs_per_second: f64,
    /// Sinks the documents went to.
    pub sinks: Vec<String>,
}

impl RunReport {
    /// Human-readable summary printed at the end of a run.
    pub fn summary(&self) -> String {
        format!(
            "DONE - Processed {} documents of ~{} bytes each\n\
             Total duration: {:.3} seconds\n\
             Average throughput: {:.3} docs/sec",
            self.documents,
            self.document_size,
            self.duration.as_secs_f64(),
            self.docs_per_second,
        )
    }

    /// Write the summary, whatever the log level.
    pub fn write_summary<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.summary())?;
        writer.flush()
    }

    /// Machine-readable form of the report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let report = RunReport {
            documents: 10,
            document_size: 1000,
            batches: 4,
            duration: Duration::from_millis(2500),
            docs_per_second: 4.0,
            sinks: vec!["file".to_string()],
        };

        assert_eq!(
            report.summary(),
            "DONE - Processed 10 documents of ~1000 bytes each\n\
             Total duration: 2.500 seconds\n\
             Average throughput: 4.000 docs/sec"
        );

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["documents"], 10);
        assert_eq!(json["sinks"][0], "file");
    }

    #[test]
    fn test_write_summary() {
        let report = RunReport {
            documents: 3,
            document_size: 300,
            ..Default::default()
        };

        let mut out = Vec::new();
        report.write_summary(&mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, format!("{}\n", report.summary()));
        assert!(out.starts_with("DONE - Processed 3 documents of ~300 bytes each\n"));
    }
}
