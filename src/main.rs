//! Command-line interface for docgen
//!
//! # Usage Examples
//!
//! ```bash
//! # Bulk action file, no enrichment
//! docgen -o articles.ndjson -i articles --skip-enrichment
//!
//! # Elasticsearch through a custom ingest pipeline, reproducible documents
//! docgen --elastic-url http://localhost:9200 -p changeme \
//!   -i articles -q articles-inference --seed 42 -l 5000 -b 100
//!
//! # Check the options without generating anything
//! docgen -c "$ELASTIC_CLOUD_ID" -p "$ELASTIC_PASSWORD" -i articles --dry-run
//! ```

use anyhow::Context;
use clap::Parser;
use docgen::logging::init_tracing;
use docgen::{run_generate, GenerateArgs};

#[derive(Parser)]
#[command(name = "docgen")]
#[command(about = "Generate synthetic documents for benchmarking Elasticsearch indexing")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.args.debug);

    let config = cli.args.validate().context("Invalid options")?;

    if let Some(report) = run_generate(&config).await? {
        report
            .write_summary(std::io::stdout().lock())
            .context("Failed to print summary")?;
    }

    Ok(())
}
