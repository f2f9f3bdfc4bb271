use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};
use search_core::{Article, Operation};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::SearchError;

/// Origin the search service listens on unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct ExecutorSettings {
    pub base_url: String,
    pub connect_timeout: Option<Duration>,
    /// Whole-request bound. `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ExecutorSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait SearchExecutor: Send + Sync {
    /// Performs exactly one round-trip for `operation`. No retries, no caching.
    async fn execute(&self, operation: &Operation) -> Result<Vec<Article>, SearchError>;
}

#[derive(Serialize)]
struct SearchRequestBody<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    k: Option<i64>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestExecutor {
    pub fn new(settings: ExecutorSettings) -> Result<Self, SearchError> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|err| SearchError::InvalidBaseUrl(err.to_string()))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(map_reqwest_error)?;

        Ok(Self { client, base_url })
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, SearchError> {
        Url::parse(&format!("{}{}", self.base_url, endpoint))
            .map_err(|err| SearchError::InvalidBaseUrl(err.to_string()))
    }
}

#[async_trait::async_trait]
impl SearchExecutor for ReqwestExecutor {
    async fn execute(&self, operation: &Operation) -> Result<Vec<Article>, SearchError> {
        let url = self.endpoint_url(operation.endpoint())?;
        let body = SearchRequestBody {
            query: operation.query(),
            k: operation.rank(),
        };
        engine_debug!(
            "POST {} query_len={} k={:?}",
            url,
            body.query.len(),
            body.k
        );

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let error_field = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.error);
            let err = SearchError::backend(status.as_u16(), error_field);
            engine_warn!("Search backend rejected request: status={} {}", status, err);
            return Err(err);
        }

        serde_json::from_slice::<Vec<Article>>(&bytes).map_err(|err| {
            engine_warn!("Search backend sent malformed results: {}", err);
            SearchError::Protocol(err.to_string())
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::Timeout;
    }
    SearchError::Transport(err.to_string())
}
