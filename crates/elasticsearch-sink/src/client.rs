//! Elasticsearch HTTP connection.

use crate::bulk::BulkResponse;
use crate::cloud_id::cloud_id_to_url;
use crate::error::ElasticsearchError;
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(180);

/// Default number of retries for transient failures.
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// Delay before the first retry; doubles on every further attempt.
pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Upper bound for a single backoff delay.
pub const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Basic authentication credentials.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Connection settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, e.g. `https://abc123.us-east-1.aws.found.io`
    pub base_url: String,
    pub credentials: Option<Credentials>,
    pub request_timeout: Duration,
    /// Retries after the first attempt for connect errors, timeouts and
    /// 429/502/503/504 responses.
    pub max_retries: u32,
    pub initial_backoff: Duration,
}

impl ClientConfig {
    /// Connect to a plain URL.
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
            credentials: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
        }
    }

    /// Connect to an Elastic Cloud deployment.
    pub fn from_cloud_id(cloud_id: &str) -> Result<Self, ElasticsearchError> {
        Ok(Self::from_url(&cloud_id_to_url(cloud_id)?))
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }
}

#[derive(Debug, Deserialize)]
struct DeleteByQueryResponse {
    #[serde(default)]
    deleted: u64,
}

/// HTTP client for the bulk and delete-by-query APIs.
pub struct ElasticsearchClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ElasticsearchClient {
    /// Create a new client.
    pub fn new(config: ClientConfig) -> Result<Self, ElasticsearchError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Submit an NDJSON body to `_bulk`.
    pub async fn bulk(&self, body: String) -> Result<BulkResponse, ElasticsearchError> {
        let url = format!("{}/_bulk", self.base_url());
        let response = self
            .send_with_retry("_bulk", || {
                self.request(self.http.post(&url))
                    .header(CONTENT_TYPE, "application/x-ndjson")
                    .body(body.clone())
            })
            .await?;

        let response = check_status("_bulk", response).await?;
        Ok(response.json::<BulkResponse>().await?)
    }

    /// Delete every document of `index`. Returns the number deleted.
    pub async fn delete_all(&self, index: &str) -> Result<u64, ElasticsearchError> {
        let path = format!("{index}/_delete_by_query");
        let url = format!("{}/{path}", self.base_url());
        let query = serde_json::json!({ "query": { "match_all": {} } });

        let response = self
            .send_with_retry(&path, || self.request(self.http.post(&url)).json(&query))
            .await?;

        let response = check_status(&path, response).await?;
        let deleted = response.json::<DeleteByQueryResponse>().await?.deleted;
        Ok(deleted)
    }

    /// Release the connection pool.
    pub fn close(self) {
        debug!("Closing Elasticsearch client for {}", self.base_url());
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.credentials {
            Some(credentials) => {
                builder.basic_auth(&credentials.username, Some(&credentials.password))
            }
            None => builder,
        }
    }

    /// Send a request, retrying transient failures with exponential backoff.
    async fn send_with_retry<F>(
        &self,
        path: &str,
        build: F,
    ) -> Result<Response, ElasticsearchError>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 0u32;
        loop {
            let outcome = build().send().await;
            let retryable = match &outcome {
                Ok(response) => is_retryable_status(response.status()),
                Err(e) => e.is_timeout() || e.is_connect(),
            };

            if !retryable || attempt >= self.config.max_retries {
                return Ok(outcome?);
            }

            attempt += 1;
            let delay = backoff_delay(self.config.initial_backoff, attempt);
            match &outcome {
                Ok(response) => warn!(
                    "Request to {} returned {} (attempt {}/{}), retrying in {:?}",
                    path,
                    response.status(),
                    attempt,
                    self.config.max_retries,
                    delay
                ),
                Err(e) => warn!(
                    "Request to {} failed (attempt {}/{}): {}, retrying in {:?}",
                    path, attempt, self.config.max_retries, e, delay
                ),
            }
            tokio::time::sleep(delay).await;
        }
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

fn backoff_delay(initial: Duration, attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
    initial.saturating_mul(factor).min(MAX_BACKOFF)
}

async fn check_status(path: &str, response: Response) -> Result<Response, ElasticsearchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ElasticsearchError::Status {
        path: path.to_string(),
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        let initial = Duration::from_millis(500);
        assert_eq!(backoff_delay(initial, 1), Duration::from_millis(500));
        assert_eq!(backoff_delay(initial, 2), Duration::from_secs(1));
        assert_eq!(backoff_delay(initial, 3), Duration::from_secs(2));
        assert_eq!(backoff_delay(initial, 10), MAX_BACKOFF);
        assert_eq!(backoff_delay(initial, 40), MAX_BACKOFF);
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_retryable_status(StatusCode::BAD_REQUEST));
        assert!(!is_retryable_status(StatusCode::UNAUTHORIZED));
        assert!(!is_retryable_status(StatusCode::OK));
    }

    #[test]
    fn test_config_from_url_trims_slash() {
        let config = ClientConfig::from_url("http://localhost:9200/");
        assert_eq!(config.base_url, "http://localhost:9200");
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);

        let client = ElasticsearchClient::new(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9200");
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let config =
            ClientConfig::from_url("http://localhost:9200").with_credentials("elastic", "s3cret");
        let debug = format!("{config:?}");
        assert!(debug.contains("elastic"));
        assert!(!debug.contains("s3cret"));
    }
}
