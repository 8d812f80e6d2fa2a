//! Throughput accounting across batches.

use std::time::Duration;
use tracing::warn;

/// Elapsed time used for the final reading when the clock did not advance.
pub const MIN_ELAPSED: Duration = Duration::from_micros(1);

/// One throughput sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughputReading {
    /// Wall time since the run started.
    pub elapsed: Duration,
    /// Documents processed so far.
    pub processed: u64,
    /// Average documents per second over `elapsed`.
    pub docs_per_second: f64,
}

/// Documents per second, or `None` when no time has elapsed.
pub fn docs_per_second(processed: u64, elapsed: Duration) -> Option<f64> {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        Some(processed as f64 / secs)
    } else {
        None
    }
}

/// Tracks the rolling average throughput of a run.
///
/// Every reading covers the whole run so far, so the rolling value is the
/// average since the start rather than a windowed rate.
#[derive(Debug, Default)]
pub struct ThroughputTracker {
    last: Option<ThroughputReading>,
    readings: u64,
}

impl ThroughputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample after a batch.
    ///
    /// Returns the rolling throughput, or `None` when `elapsed` is zero or
    /// `processed` went backwards. Rejected samples leave the tracker as it
    /// was.
    pub fn record(&mut self, elapsed: Duration, processed: u64) -> Option<f64> {
        if let Some(last) = self.last {
            if processed < last.processed {
                warn!(
                    "Ignoring throughput sample: processed count went from {} to {}",
                    last.processed, processed
                );
                return None;
            }
        }

        let rate = docs_per_second(processed, elapsed)?;
        self.last = Some(ThroughputReading {
            elapsed,
            processed,
            docs_per_second: rate,
        });
        self.readings += 1;
        Some(rate)
    }

    /// The most recent accepted reading.
    pub fn rolling(&self) -> Option<ThroughputReading> {
        self.last
    }

    /// Number of accepted readings.
    pub fn readings(&self) -> u64 {
        self.readings
    }

    /// Final reading for the run. Always yields a number.
    pub fn finish(&self, elapsed: Duration, processed: u64) -> ThroughputReading {
        let elapsed = elapsed.max(MIN_ELAPSED);
        ThroughputReading {
            elapsed,
            processed,
            docs_per_second: processed as f64 / elapsed.as_secs_f64(),
        }
    }
}
