//! Generate command runner.

use anyhow::Context;
use docgen_generator::{DocumentGenerator, LoremSource};
use docgen_sink::{BulkFileSink, DocumentSink, SinkSet};
use elasticsearch_sink::{ElasticsearchClient, IndexSink};

use crate::config::{EndpointTarget, FileTarget, OutputMode, RunConfig};
use crate::driver::BatchDriver;
use crate::report::RunReport;

/// Run the generate command.
///
/// Returns `None` in dry-run mode.
pub async fn run_generate(config: &RunConfig) -> anyhow::Result<Option<RunReport>> {
    for advisory in config.advisories() {
        tracing::warn!("{}", advisory);
    }

    if config.dry_run {
        tracing::info!(
            "[DRY-RUN] Would generate {} documents of ~{} bytes in {} batches of up to {}",
            config.plan.total,
            config.plan.document_size,
            config.plan.batch_count(),
            config.plan.batch_size
        );
        log_targets(config, "[DRY-RUN] ");
        tracing::info!("[DRY-RUN] Configuration validated successfully");
        return Ok(None);
    }

    tracing::info!(
        "Generating {} documents of ~{} bytes",
        config.plan.total,
        config.plan.document_size
    );
    log_targets(config, "");

    let sinks = open_sinks(config)?;

    let source = match config.seed {
        Some(seed) => LoremSource::seeded(seed),
        None => LoremSource::from_os_rng(),
    };
    let generator = DocumentGenerator::new(source).with_enrichment(config.enrichment);
    tracing::debug!(
        "Enrichment marker {}",
        if generator.enrichment() { "on" } else { "off" }
    );

    let report = BatchDriver::new(generator, config.plan)
        .with_clear_before_run(config.clear_before_run)
        .with_prefetch(config.prefetch_batches)
        .run(sinks)
        .await
        .context("Document generation failed")?;

    if let Ok(json) = report.to_json() {
        tracing::debug!("Run report: {}", json);
    }
    Ok(Some(report))
}

fn log_targets(config: &RunConfig, prefix: &str) {
    if let Some(file) = config.output.file() {
        tracing::info!(
            "{}Writing documents to {} for index {}",
            prefix,
            file.path.display(),
            file.index
        );
    }
    if let Some(endpoint) = config.output.endpoint() {
        tracing::info!(
            "{}Indexing documents to index {} on {}",
            prefix,
            endpoint.index,
            endpoint.display
        );
        if let Some(pipeline) = &config.pipeline {
            tracing::info!("{}Applying ingest pipeline {}", prefix, pipeline);
        }
        if config.clear_before_run {
            tracing::info!("{}Clearing index {} before the run", prefix, endpoint.index);
        }
    }
    if matches!(config.output, OutputMode::Console) {
        tracing::info!("{}Printing documents to stdout", prefix);
    }
}

/// Open the sinks for the configured output.
///
/// The endpoint client is built before the file is created, so a bad
/// endpoint leaves no file behind.
pub fn open_sinks(config: &RunConfig) -> anyhow::Result<SinkSet> {
    let sinks = match &config.output {
        OutputMode::Console => return Ok(SinkSet::console()),
        OutputMode::File(file) => vec![open_file(file)?],
        OutputMode::Endpoint(endpoint) => vec![connect(endpoint, config)?],
        OutputMode::FileAndEndpoint(file, endpoint) => {
            let index_sink = connect(endpoint, config)?;
            vec![open_file(file)?, index_sink]
        }
    };
    Ok(SinkSet::delivery(sinks))
}

fn open_file(file: &FileTarget) -> anyhow::Result<Box<dyn DocumentSink>> {
    let sink = BulkFileSink::create(&file.path, &file.index)
        .with_context(|| format!("Failed to create output file {:?}", file.path))?;
    tracing::debug!("Created {}", sink.path().display());
    Ok(Box::new(sink))
}

fn connect(endpoint: &EndpointTarget, config: &RunConfig) -> anyhow::Result<Box<dyn DocumentSink>> {
    let client = ElasticsearchClient::new(endpoint.client.clone())
        .with_context(|| format!("Failed to create Elasticsearch client for {}", endpoint.display))?;
    let sink = IndexSink::new(client, endpoint.index.clone(), config.pipeline.clone());
    tracing::debug!(
        "Bulk actions target index {} with pipeline {}",
        sink.index(),
        sink.pipeline().unwrap_or("none")
    );
    Ok(Box::new(sink))
}
