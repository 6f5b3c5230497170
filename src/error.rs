//! Error taxonomy for the search pipeline

use thiserror::Error;

/// Errors surfaced by the fetch orchestrator.
///
/// All variants are recoverable by re-issuing the search; pagination state is
/// preserved across failures so a retry resumes rather than restarts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The request itself failed (connection refused, timeout, DNS, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("search failed: {0}")]
    Http(String),

    /// The response body could not be decoded
    #[error("malformed response: {0}")]
    Parse(String),
}

impl SearchError {
    /// Classify a transport-level failure from reqwest
    pub fn from_request(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Network(format!("request timed out: {}", err))
        } else {
            Self::Network(err.to_string())
        }
    }
}
