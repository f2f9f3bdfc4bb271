use search_core::{Article, RequestId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<Vec<Article>, SearchError>,
    },
}

/// The engine worker has exited; no further completions will arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search engine stopped")]
pub struct EngineStopped;

/// Failure of a single search round-trip. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid backend url: {0}")]
    InvalidBaseUrl(String),
    #[error("{0}")]
    Transport(String),
    #[error("Request timed out")]
    Timeout,
    /// Non-success status. `message` is the backend's `error` field or a status fallback.
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("Unexpected response from backend: {0}")]
    Protocol(String),
}

impl SearchError {
    pub(crate) fn backend(status: u16, error_field: Option<String>) -> Self {
        let message = error_field
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("Backend returned status {status}"));
        SearchError::Backend { status, message }
    }
}
