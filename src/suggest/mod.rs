//! Autocomplete suggestions
//!
//! Suggestions are best-effort: any failure, non-success status or
//! non-array body yields an empty list, never an error. The primary search
//! flow must not block on them.

use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::debug;

/// Trait for suggestion backends
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    /// Backend name
    fn name(&self) -> &str;

    /// Fetch suggestions for a query
    async fn suggest(&self, client: &HttpClient, query: &str) -> anyhow::Result<Vec<String>>;
}

/// The NeuraSeek API suggestion endpoint
pub struct ApiSuggestions {
    base_url: String,
}

impl ApiSuggestions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SuggestionBackend for ApiSuggestions {
    fn name(&self) -> &str {
        "neuraseek"
    }

    async fn suggest(&self, client: &HttpClient, query: &str) -> anyhow::Result<Vec<String>> {
        let url = format!("{}/suggestions", self.base_url);
        let response = client
            .get_with_params(&url, &[("q", query.to_string())])
            .await?;

        if !response.is_success() {
            return Ok(vec![]);
        }

        // The endpoint returns a JSON array of strings
        let json: serde_json::Value = serde_json::from_str(&response.text)?;

        let suggestions = json
            .as_array()
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(suggestions)
    }
}

/// Fetch suggestions, swallowing every failure into an empty list
pub async fn fetch_suggestions(
    client: &HttpClient,
    backend: &dyn SuggestionBackend,
    query: &str,
) -> Vec<String> {
    if query.trim().is_empty() {
        return vec![];
    }

    match backend.suggest(client, query.trim()).await {
        Ok(suggestions) => suggestions,
        Err(e) => {
            debug!("suggestion fetch from {} failed: {}", backend.name(), e);
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> HttpClient {
        HttpClient::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_suggestions_parsed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/suggestions"))
            .and(query_param("q", "ru"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                "rust",
                "rust lang",
                "ruby"
            ])))
            .mount(&server)
            .await;

        let backend = ApiSuggestions::new(server.uri());
        let suggestions = fetch_suggestions(&client(), &backend, "ru").await;
        assert_eq!(suggestions, vec!["rust", "rust lang", "ruby"]);
    }

    #[tokio::test]
    async fn test_empty_query_short_circuits() {
        // No server: would fail if a request were issued
        let backend = ApiSuggestions::new("http://127.0.0.1:1");
        let suggestions = fetch_suggestions(&client(), &backend, "   ").await;
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_failure_yields_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/suggestions"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let backend = ApiSuggestions::new(server.uri());
        let suggestions = fetch_suggestions(&client(), &backend, "rust").await;
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_non_array_body_yields_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/suggestions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"unexpected": "shape"})),
            )
            .mount(&server)
            .await;

        let backend = ApiSuggestions::new(server.uri());
        let suggestions = fetch_suggestions(&client(), &backend, "rust").await;
        assert!(suggestions.is_empty());
    }
}
