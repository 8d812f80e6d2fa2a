//! Command-line options and their validation into a run configuration.

use crate::driver::BatchPlan;
use crate::logging::{mask_url_password, short_cloud_id};
use clap::Args;
use docgen_core::MIN_DOCUMENT_SIZE;
use elasticsearch_sink::ClientConfig;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Batch sizes above this put too much pressure on a bulk endpoint.
pub const ADVISED_MAX_ENDPOINT_BATCH: usize = 100;

/// Options of the generate command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Output file for bulk index actions
    #[arg(short = 'o', long)]
    pub out_file: Option<PathBuf>,

    /// Elastic Cloud ID of the target deployment
    #[arg(short = 'c', long, env = "ELASTIC_CLOUD_ID")]
    pub cloud_id: Option<String>,

    /// Elasticsearch URL, as an alternative to a cloud ID
    #[arg(long, env = "ELASTIC_URL")]
    pub elastic_url: Option<String>,

    /// Elasticsearch username
    #[arg(short = 'u', long, env = "ELASTIC_USERNAME", default_value = "elastic")]
    pub elastic_username: String,

    /// Elasticsearch password
    #[arg(short = 'p', long, env = "ELASTIC_PASSWORD", hide_env_values = true)]
    pub elastic_password: Option<String>,

    /// Index name, required for file and Elasticsearch output
    #[arg(short = 'i', long)]
    pub index: Option<String>,

    /// Delete every document in the index before indexing
    #[arg(short = 'x', long)]
    pub clear_index: bool,

    /// Ingest pipeline (default: the index name, unless enrichment is skipped)
    #[arg(short = 'q', long)]
    pub pipeline: Option<String>,

    /// Do not mark documents for enrichment and use no ingest pipeline
    #[arg(long)]
    pub skip_enrichment: bool,

    /// Number of documents to generate
    #[arg(short = 'l', long, default_value = "10")]
    pub limit: u64,

    /// Approximate size of each document in bytes
    #[arg(short = 's', long, default_value = "1000")]
    pub size: usize,

    /// Number of documents per batch
    #[arg(short = 'b', long, default_value = "50")]
    pub batch_size: usize,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Random seed for deterministic generation (same seed = same documents)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Batches generated ahead of delivery on a background thread (0 = generate inline)
    #[arg(long, default_value = "0")]
    pub prefetch_batches: usize,

    /// Timeout for a single Elasticsearch request, in seconds
    #[arg(long, default_value = "180")]
    pub request_timeout: u64,

    /// Retries for failed Elasticsearch requests
    #[arg(long, default_value = "10")]
    pub max_retries: u32,

    /// Dry-run mode: validate options and log the plan without generating anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Invalid combination of options. Fatal before any work starts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Elasticsearch username and password are required to index documents")]
    MissingCredentials,

    #[error("An index name is required when {0}")]
    MissingIndex(&'static str),

    #[error("Specify either a cloud ID or an Elasticsearch URL, not both")]
    ConflictingEndpoints,

    #[error("Minimum document size is {min} bytes, got {size}")]
    DocumentTooSmall { size: usize, min: usize },

    #[error("Number of documents must be at least 1")]
    InvalidLimit,

    #[error("Batch size must be at least 1")]
    InvalidBatchSize,

    #[error("Invalid cloud ID: {0}")]
    InvalidCloudId(String),
}

/// Non-fatal remark about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// Batches this large may overload the endpoint.
    LargeEndpointBatch { batch_size: usize },
    /// `--clear-index` has no effect without an endpoint.
    ClearWithoutEndpoint,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::LargeEndpointBatch { batch_size } => write!(
                f,
                "Batch size {batch_size} is larger than {ADVISED_MAX_ENDPOINT_BATCH}, \
                 bulk requests may be rejected or time out"
            ),
            Advisory::ClearWithoutEndpoint => {
                write!(f, "--clear-index is ignored without an Elasticsearch endpoint")
            }
        }
    }
}

/// Bulk action file output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    pub path: PathBuf,
    pub index: String,
}

/// Elasticsearch output.
#[derive(Debug, Clone)]
pub struct EndpointTarget {
    /// Resolved connection settings, credentials included
    pub client: ClientConfig,
    pub index: String,
    /// Endpoint as shown in logs, without secrets
    pub display: String,
}

/// Where documents go.
#[derive(Debug, Clone)]
pub enum OutputMode {
    /// Pretty-printed to stdout
    Console,
    File(FileTarget),
    Endpoint(EndpointTarget),
    /// The file is written before each batch is indexed
    FileAndEndpoint(FileTarget, EndpointTarget),
}

impl OutputMode {
    pub fn file(&self) -> Option<&FileTarget> {
        match self {
            OutputMode::File(file) | OutputMode::FileAndEndpoint(file, _) => Some(file),
            _ => None,
        }
    }

    pub fn endpoint(&self) -> Option<&EndpointTarget> {
        match self {
            OutputMode::Endpoint(endpoint) | OutputMode::FileAndEndpoint(_, endpoint) => {
                Some(endpoint)
            }
            _ => None,
        }
    }
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub output: OutputMode,
    pub plan: BatchPlan,
    /// Ingest pipeline applied by the endpoint
    pub pipeline: Option<String>,
    /// Whether documents carry the enrichment marker
    pub enrichment: bool,
    pub clear_before_run: bool,
    pub seed: Option<u64>,
    pub prefetch_batches: usize,
    pub dry_run: bool,
}

impl RunConfig {
    /// Remarks to log before the run.
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        let has_endpoint = self.output.endpoint().is_some();

        if has_endpoint && self.plan.batch_size > ADVISED_MAX_ENDPOINT_BATCH {
            advisories.push(Advisory::LargeEndpointBatch {
                batch_size: self.plan.batch_size,
            });
        }
        if self.clear_before_run && !has_endpoint {
            advisories.push(Advisory::ClearWithoutEndpoint);
        }
        advisories
    }
}

impl GenerateArgs {
    /// Check the options and build the run configuration.
    pub fn validate(&self) -> Result<RunConfig, ConfigError> {
        if self.size < MIN_DOCUMENT_SIZE {
            return Err(ConfigError::DocumentTooSmall {
                size: self.size,
                min: MIN_DOCUMENT_SIZE,
            });
        }
        if self.limit < 1 {
            return Err(ConfigError::InvalidLimit);
        }
        if self.batch_size < 1 {
            return Err(ConfigError::InvalidBatchSize);
        }

        let index = self.index.as_deref().filter(|i| !i.is_empty());

        let file = match &self.out_file {
            Some(path) => {
                let index =
                    index.ok_or(ConfigError::MissingIndex("writing bulk actions to a file"))?;
                Some(FileTarget {
                    path: path.clone(),
                    index: index.to_string(),
                })
            }
            None => None,
        };

        let endpoint = self.endpoint_target(index)?;

        let output = match (file, endpoint) {
            (None, None) => OutputMode::Console,
            (Some(file), None) => OutputMode::File(file),
            (None, Some(endpoint)) => OutputMode::Endpoint(endpoint),
            (Some(file), Some(endpoint)) => OutputMode::FileAndEndpoint(file, endpoint),
        };

        let pipeline = if self.skip_enrichment {
            None
        } else {
            self.pipeline
                .as_deref()
                .or(index)
                .map(str::to_string)
        };

        Ok(RunConfig {
            output,
            plan: BatchPlan::new(self.limit, self.batch_size, self.size),
            enrichment: pipeline.is_some(),
            pipeline,
            clear_before_run: self.clear_index,
            seed: self.seed,
            prefetch_batches: self.prefetch_batches,
            dry_run: self.dry_run,
        })
    }

    fn endpoint_target(&self, index: Option<&str>) -> Result<Option<EndpointTarget>, ConfigError> {
        let cloud_id = self.cloud_id.as_deref().filter(|c| !c.is_empty());
        let url = self.elastic_url.as_deref().filter(|u| !u.is_empty());

        let (client, display) = match (cloud_id, url) {
            (None, None) => return Ok(None),
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingEndpoints),
            (Some(cloud_id), None) => {
                let client = ClientConfig::from_cloud_id(cloud_id)
                    .map_err(|e| ConfigError::InvalidCloudId(e.to_string()))?;
                (client, short_cloud_id(cloud_id))
            }
            (None, Some(url)) => (ClientConfig::from_url(url), mask_url_password(url)),
        };

        let password = self
            .elastic_password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingCredentials)?;
        if self.elastic_username.is_empty() {
            return Err(ConfigError::MissingCredentials);
        }
        let index = index.ok_or(ConfigError::MissingIndex("indexing into Elasticsearch"))?;

        let client = client
            .with_credentials(&self.elastic_username, password)
            .with_request_timeout(Duration::from_secs(self.request_timeout))
            .with_max_retries(self.max_retries);

        Ok(Some(EndpointTarget {
            client,
            index: index.to_string(),
            display,
        }))
    }
}
