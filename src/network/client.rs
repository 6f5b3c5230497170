//! HTTP client for making requests to the search API

use crate::error::SearchError;
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client wrapper with NeuraSeek-specific configuration.
///
/// Carries a request timeout so a hung request surfaces as an error instead
/// of leaving the caller's loading flag stuck.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the given request timeout
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client })
    }

    /// GET request with query parameters
    pub async fn get_with_params(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<ApiResponse, SearchError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SearchError::from_request(&e))?;

        Self::parse_response(response).await
    }

    /// Collect status and body into an [`ApiResponse`]
    async fn parse_response(response: Response) -> Result<ApiResponse, SearchError> {
        let status = response.status();
        let url = response.url().to_string();
        let text = response
            .text()
            .await
            .map_err(|e| SearchError::from_request(&e))?;

        Ok(ApiResponse {
            status: status.as_u16(),
            status_text: format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
            text,
            url,
        })
    }
}

/// HTTP response from an API request
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Status code with its canonical reason, e.g. "500 Internal Server Error"
    pub status_text: String,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl ApiResponse {
    /// Parse response body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, SearchError> {
        serde_json::from_str(&self.text).map_err(|e| SearchError::Parse(e.to_string()))
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
