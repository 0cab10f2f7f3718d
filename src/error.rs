//! Fetch error types
//!
//! Every failure collapses into one of these before it crosses the actor
//! boundary as a message string.

use thiserror::Error;

/// Shared `Result` alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Failure of a single GET against the character API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Short human-readable description, as logged by the app layer.
    pub fn describe(&self) -> String {
        match self {
            FetchError::Request(e) if e.is_timeout() => "Request timed out".to_string(),
            FetchError::Request(e) if e.is_connect() => format!("Connection failed: {}", e),
            other => other.to_string(),
        }
    }
}
