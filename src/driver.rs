//! Batch driver: generates documents batch by batch and delivers them.

use crate::report::RunReport;
use crate::throughput::ThroughputTracker;
use docgen_core::Document;
use docgen_generator::{DocumentGenerator, TextSource};
use docgen_sink::{SinkError, SinkSet};
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info};

/// How many documents to produce and how to split them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    /// Total number of documents
    pub total: u64,
    /// Documents per batch; only the last batch may be smaller
    pub batch_size: usize,
    /// Approximate size of each document in bytes
    pub document_size: usize,
}

impl BatchPlan {
    pub fn new(total: u64, batch_size: usize, document_size: usize) -> Self {
        Self {
            total,
            batch_size,
            document_size,
        }
    }

    /// Sizes of the batches, in order.
    pub fn sizes(&self) -> BatchSizes {
        BatchSizes {
            remaining: self.total,
            batch_size: self.batch_size.max(1) as u64,
        }
    }

    /// Number of batches, `ceil(total / batch_size)`.
    pub fn batch_count(&self) -> u64 {
        self.total.div_ceil(self.batch_size.max(1) as u64)
    }
}

/// Iterator over batch sizes.
#[derive(Debug, Clone)]
pub struct BatchSizes {
    remaining: u64,
    batch_size: u64,
}

impl Iterator for BatchSizes {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let size = self.batch_size.min(self.remaining);
        self.remaining -= size;
        Some(size as usize)
    }
}

/// Phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Between batches
    Idle,
    /// Generating a batch
    Running,
    /// Delivering a batch
    Draining,
    /// Sinks are being closed
    Done,
}

/// Snapshot of a run, published on every phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunProgress {
    pub phase: RunPhase,
    pub processed: u64,
    pub total: u64,
    pub batches: u64,
}

impl RunProgress {
    fn idle(total: u64) -> Self {
        Self {
            phase: RunPhase::Idle,
            processed: 0,
            total,
            batches: 0,
        }
    }
}

/// Progress of a run. Only the driver mutates it, between dispatches.
#[derive(Debug)]
pub struct RunState {
    total: u64,
    remaining: u64,
    processed: u64,
    batches: u64,
    started: Instant,
    phase: RunPhase,
    progress: watch::Sender<RunProgress>,
}

impl RunState {
    fn new(total: u64, progress: watch::Sender<RunProgress>) -> Self {
        Self {
            total,
            remaining: total,
            processed: 0,
            batches: 0,
            started: Instant::now(),
            phase: RunPhase::Idle,
            progress,
        }
    }

    fn start(&mut self) {
        self.started = Instant::now();
        self.enter(RunPhase::Idle);
    }

    fn enter(&mut self, phase: RunPhase) {
        self.phase = phase;
        self.progress.send_replace(self.snapshot());
    }

    fn batch_delivered(&mut self, size: usize) {
        let size = size as u64;
        debug_assert!(size > 0 && size <= self.remaining);
        self.remaining -= size;
        self.processed += size;
        self.batches += 1;
        self.enter(RunPhase::Idle);
    }

    pub fn snapshot(&self) -> RunProgress {
        RunProgress {
            phase: self.phase,
            processed: self.processed,
            total: self.total,
            batches: self.batches,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn batches(&self) -> u64 {
        self.batches
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Fatal run failure.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Failed to deliver documents: {0}")]
    Sink(#[from] SinkError),

    #[error("Document producer failed: {0}")]
    Producer(String),

    #[error("Failed to close sinks: {0}")]
    Teardown(SinkError),
}

/// Drives a run from the first batch to teardown.
pub struct BatchDriver<S> {
    generator: DocumentGenerator<S>,
    plan: BatchPlan,
    clear_before_run: bool,
    prefetch_batches: usize,
    progress: watch::Sender<RunProgress>,
}

impl<S: TextSource + Send + 'static> BatchDriver<S> {
    pub fn new(generator: DocumentGenerator<S>, plan: BatchPlan) -> Self {
        let (progress, _) = watch::channel(RunProgress::idle(plan.total));
        Self {
            generator,
            plan,
            clear_before_run: false,
            prefetch_batches: 0,
            progress,
        }
    }

    /// Follow the run's phase and counters.
    ///
    /// The phase is `Draining` while sinks receive a batch and `Done` while
    /// they are closed, on success and failure alike.
    pub fn subscribe(&self) -> watch::Receiver<RunProgress> {
        self.progress.subscribe()
    }

    /// Clear every sink's target before the first batch.
    pub fn with_clear_before_run(mut self, clear: bool) -> Self {
        self.clear_before_run = clear;
        self
    }

    /// Generate up to `batches` batches ahead of delivery on a blocking
    /// thread. Zero generates inline.
    pub fn with_prefetch(mut self, batches: usize) -> Self {
        self.prefetch_batches = batches;
        self
    }

    /// Run to completion and close the sinks.
    ///
    /// The sinks are closed exactly once, whether the run succeeds or not.
    pub async fn run(self, mut sinks: SinkSet) -> Result<RunReport, RunError> {
        let sink_names: Vec<String> = sinks.names().into_iter().map(str::to_string).collect();
        let progress = self.progress.clone();
        let outcome = self.drive(&mut sinks).await;
        progress.send_modify(|p| p.phase = RunPhase::Done);
        let closed = sinks.close().await;

        match (outcome, closed) {
            (Ok(mut report), Ok(())) => {
                report.sinks = sink_names;
                Ok(report)
            }
            (Ok(_), Err(e)) => Err(RunError::Teardown(e)),
            // The close failure was already logged
            (Err(e), _) => Err(e),
        }
    }

    async fn drive(self, sinks: &mut SinkSet) -> Result<RunReport, RunError> {
        let plan = self.plan;
        let mut state = RunState::new(plan.total, self.progress);
        let mut tracker = ThroughputTracker::new();

        if self.clear_before_run {
            sinks.clear().await.inspect_err(|e| {
                error!("Failed to clear target before run: {}", e);
            })?;
        }

        state.start();

        if self.prefetch_batches == 0 {
            let mut generator = self.generator;
            for size in plan.sizes() {
                state.enter(RunPhase::Running);
                info!("Generating {} documents", size);
                let batch = generator.generate_batch(size, plan.document_size);
                deliver(&mut state, &mut tracker, sinks, &batch).await?;
            }
        } else {
            let (tx, mut rx) = mpsc::channel(self.prefetch_batches);
            let generator = self.generator;
            let producer = tokio::task::spawn_blocking(move || produce(generator, plan, tx));

            state.enter(RunPhase::Running);
            while let Some(batch) = rx.recv().await {
                deliver(&mut state, &mut tracker, sinks, &batch).await?;
                state.enter(RunPhase::Running);
            }

            producer
                .await
                .map_err(|e| RunError::Producer(e.to_string()))?;
            if state.remaining() > 0 {
                return Err(RunError::Producer(format!(
                    "producer stopped with {} documents outstanding",
                    state.remaining()
                )));
            }
        }

        let reading = tracker.finish(state.elapsed(), state.processed());
        debug!(
            "Delivered {} batches, {} throughput readings",
            state.batches(),
            tracker.readings()
        );

        Ok(RunReport {
            documents: state.processed(),
            document_size: plan.document_size,
            batches: state.batches(),
            duration: reading.elapsed,
            docs_per_second: reading.docs_per_second,
            sinks: Vec::new(),
        })
    }
}

/// Generate every batch of the plan into the channel.
///
/// Stops early once the receiving side is gone.
fn produce<S: TextSource>(
    mut generator: DocumentGenerator<S>,
    plan: BatchPlan,
    tx: mpsc::Sender<Vec<Document>>,
) {
    for size in plan.sizes() {
        info!("Generating {} documents", size);
        let batch = generator.generate_batch(size, plan.document_size);
        if tx.blocking_send(batch).is_err() {
            debug!("Delivery stopped, producer exiting");
            return;
        }
    }
}

/// Dispatch one batch and update progress.
async fn deliver(
    state: &mut RunState,
    tracker: &mut ThroughputTracker,
    sinks: &mut SinkSet,
    batch: &[Document],
) -> Result<(), RunError> {
    state.enter(RunPhase::Draining);
    sinks.dispatch(batch).await.inspect_err(|e| {
        error!("Batch {} failed: {}", state.batches() + 1, e);
    })?;
    state.batch_delivered(batch.len());

    match tracker.record(state.elapsed(), state.processed()) {
        Some(rate) => debug!(
            "Processed {}/{} documents, rolling average throughput: {:.3} docs/sec",
            state.processed(),
            state.total(),
            rate
        ),
        None => debug!("Processed {}/{} documents", state.processed(), state.total()),
    }
    Ok(())
}
