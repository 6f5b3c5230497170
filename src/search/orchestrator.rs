//! Search fetch orchestrator
//!
//! Composes cache lookup, request construction, response validation and
//! pagination updates into one per-request lifecycle, and owns the loading
//! and error flags the render layer consumes.
//!
//! Concurrency rules: at most one fetch is in flight per orchestrator,
//! enforced by a boolean guard; every query or type change bumps a
//! generation counter, and a response resolving under an older generation is
//! discarded rather than allowed to overwrite newer state.

use crate::cache::{query_cache_key, ResultCache};
use crate::error::SearchError;
use crate::network::HttpClient;
use crate::pagination::{LoadState, PaginationState};
use crate::render::{strategy_for, RenderedPage};
use crate::results::{ResultItem, ResultType, SearchResponse};
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Snapshot of the orchestrator's output surface.
///
/// This is everything the render layer is allowed to see: the accumulated
/// item list, the loading/error flags and the "has more" marker.
#[derive(Debug, Clone)]
pub struct SearchView {
    pub query: String,
    pub result_type: ResultType,
    pub results: Vec<ResultItem>,
    pub loading: bool,
    pub loading_more: bool,
    pub error: Option<SearchError>,
    pub has_more: bool,
}

#[derive(Debug, Default)]
struct OrchestratorState {
    /// Bumped on every query/type change; stale responses are discarded
    generation: u64,
    query: String,
    result_type: ResultType,
    pagination: PaginationState,
    loading: bool,
    error: Option<SearchError>,
    /// Single-flight guard: at most one fetch per orchestrator
    in_flight: bool,
}

/// Orchestrates fetches for one active (result type, query) key.
///
/// Cheap to clone; clones share state, so a fetch started from one handle is
/// visible through every other.
#[derive(Clone)]
pub struct SearchOrchestrator {
    client: HttpClient,
    cache: ResultCache,
    base_url: Arc<String>,
    page_size: u32,
    state: Arc<RwLock<OrchestratorState>>,
}

impl SearchOrchestrator {
    /// Create an orchestrator against the given API base URL
    pub fn new(
        client: HttpClient,
        cache: ResultCache,
        base_url: impl Into<String>,
        page_size: u32,
    ) -> Self {
        Self {
            client,
            cache,
            base_url: Arc::new(base_url.into()),
            page_size,
            state: Arc::new(RwLock::new(OrchestratorState::default())),
        }
    }

    /// Switch to a new (query, type) key and fetch its first page.
    ///
    /// The query is trimmed; an empty query resets state and suppresses
    /// fetching without raising an error. Any in-flight fetch for the
    /// previous key is superseded: its eventual response will be discarded.
    pub async fn set_query(
        &self,
        query: &str,
        result_type: ResultType,
    ) -> Result<(), SearchError> {
        let query = query.trim().to_string();

        {
            let mut s = self.state.write().unwrap();
            s.generation += 1;
            s.query = query.clone();
            s.result_type = result_type;
            s.pagination = PaginationState::new();
            s.loading = false;
            s.error = None;
            s.in_flight = false;
        }

        if query.is_empty() {
            return Ok(());
        }

        self.fetch_page(1).await
    }

    /// Fetch the next page and append it to the accumulated results.
    ///
    /// A no-op unless the backend reported more results and nothing is in
    /// flight for this key.
    pub async fn load_more(&self) -> Result<(), SearchError> {
        let page = {
            let s = self.state.read().unwrap();
            if s.in_flight || !s.pagination.can_load_more() {
                return Ok(());
            }
            s.pagination.next_page()
        };

        self.fetch_page(page).await
    }

    /// Re-issue the fetch a previous failure interrupted.
    ///
    /// Accumulated results survive failures, so this resumes at the page
    /// that failed instead of restarting from page 1. Only permitted from
    /// the post-failure Idle state; with a fetch already applied or in
    /// flight there is nothing to retry.
    pub async fn retry(&self) -> Result<(), SearchError> {
        let page = {
            let s = self.state.read().unwrap();
            if s.query.is_empty() || s.in_flight || s.pagination.state != LoadState::Idle {
                return Ok(());
            }
            s.pagination.next_page()
        };

        self.fetch_page(page).await
    }

    /// Snapshot the current output surface
    pub fn view(&self) -> SearchView {
        let s = self.state.read().unwrap();
        SearchView {
            query: s.query.clone(),
            result_type: s.result_type.clone(),
            results: s.pagination.results.clone(),
            loading: s.loading,
            loading_more: s.pagination.state == LoadState::LoadingMore,
            error: s.error.clone(),
            has_more: s.pagination.has_more,
        }
    }

    /// Render the accumulated results through the strategy for the active tag
    pub fn rendered(&self) -> RenderedPage {
        let (result_type, results) = {
            let s = self.state.read().unwrap();
            (s.result_type.clone(), s.pagination.results.clone())
        };
        strategy_for(&result_type).render(&results)
    }

    /// One fetch lifecycle for (active type, active query, `page`)
    async fn fetch_page(&self, page: u32) -> Result<(), SearchError> {
        let (query, result_type, token, generation) = {
            let mut s = self.state.write().unwrap();
            if s.query.is_empty() || s.in_flight {
                return Ok(());
            }
            s.in_flight = true;
            (
                s.query.clone(),
                s.result_type.clone(),
                s.pagination.next_page_token.clone(),
                s.generation,
            )
        };

        // Cache hit populates outputs synchronously; loading stays false
        let key = query_cache_key(&result_type, &query, page);
        if let Some(batch) = self.cache.get(&key).await {
            debug!("cache hit for '{}' {} page {}", query, result_type, page);
            let mut s = self.state.write().unwrap();
            if s.generation == generation {
                s.pagination.apply(page, &batch);
                s.error = None;
                s.in_flight = false;
            }
            return Ok(());
        }

        {
            let mut s = self.state.write().unwrap();
            if s.generation != generation {
                return Ok(());
            }
            s.loading = true;
            s.error = None;
            s.pagination.begin(page);
        }

        info!("fetching '{}' {} page {}", query, result_type, page);
        let result = self
            .request_page(&query, &result_type, page, token.as_deref())
            .await;

        // A batch is valid for its key regardless of who is still interested
        if let Ok(ref batch) = result {
            self.cache.put(key, batch.clone()).await;
        }

        let mut s = self.state.write().unwrap();
        if s.generation != generation {
            debug!("discarding superseded response for '{}'", query);
            return Ok(());
        }

        s.loading = false;
        s.in_flight = false;
        match result {
            Ok(batch) => {
                s.pagination.apply(page, &batch);
                s.error = None;
                Ok(())
            }
            Err(e) => {
                s.pagination.fail();
                s.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Build, issue and validate one search request
    async fn request_page(
        &self,
        query: &str,
        result_type: &ResultType,
        page: u32,
        page_token: Option<&str>,
    ) -> Result<SearchResponse, SearchError> {
        let url = format!("{}/search", self.base_url);
        let mut params = vec![
            ("q", query.to_string()),
            ("type", result_type.as_str().to_string()),
            ("page", page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(token) = page_token {
            params.push(("page_token", token.to_string()));
        }

        let response = self.client.get_with_params(&url, &params).await?;

        if !response.is_success() {
            return Err(SearchError::Http(response.status_text.clone()));
        }

        response.json::<SearchResponse>()
    }
}
