//! Search session: wires raw input through the debouncer into the
//! suggestion fetcher and the fetch orchestrator, and records committed
//! queries into the search history.

use crate::debounce::Debouncer;
use crate::history::SearchHistory;
use crate::network::HttpClient;
use crate::search::{SearchOrchestrator, SearchView};
use crate::suggest::{fetch_suggestions, SuggestionBackend};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// One interactive search session.
///
/// Keystrokes go through [`input`](Self::input) and are debounced before
/// they reach the network; an explicit [`commit`](Self::commit) (the
/// enter-key path) bypasses the quiet window and records history.
pub struct SearchSession {
    debouncer: Debouncer<String>,
    orchestrator: SearchOrchestrator,
    suggestions: Arc<RwLock<Vec<String>>>,
    history: Arc<Mutex<SearchHistory>>,
    drain: JoinHandle<()>,
}

impl SearchSession {
    /// Create a session and start its debounce-drain task
    pub fn new(
        orchestrator: SearchOrchestrator,
        client: HttpClient,
        backend: Arc<dyn SuggestionBackend>,
        history: SearchHistory,
        debounce: Duration,
    ) -> Self {
        let (debouncer, mut rx) = Debouncer::<String>::new(debounce);
        let suggestions = Arc::new(RwLock::new(Vec::new()));

        let drain = tokio::spawn({
            let orchestrator = orchestrator.clone();
            let suggestions = suggestions.clone();
            async move {
                while let Some(query) = rx.recv().await {
                    // Suggestions are best-effort and independent of the
                    // result pipeline; they must never delay the search
                    tokio::spawn({
                        let client = client.clone();
                        let backend = backend.clone();
                        let suggestions = suggestions.clone();
                        let query = query.clone();
                        async move {
                            let fresh =
                                fetch_suggestions(&client, backend.as_ref(), &query).await;
                            *suggestions.write().unwrap() = fresh;
                        }
                    });

                    let result_type = orchestrator.view().result_type;
                    if let Err(e) = orchestrator.set_query(&query, result_type).await {
                        debug!("debounced search failed: {}", e);
                    }
                }
            }
        });

        Self {
            debouncer,
            orchestrator,
            suggestions,
            history: Arc::new(Mutex::new(history)),
            drain,
        }
    }

    /// Feed a changed input value; acted on only once input quiesces
    pub fn input(&mut self, text: impl Into<String>) {
        self.debouncer.update(text.into());
    }

    /// Search immediately, bypassing the debounce window, and record the
    /// query in the history
    pub async fn commit(&mut self, query: &str) -> Result<(), crate::SearchError> {
        self.debouncer.cancel();

        let query = query.trim();
        if !query.is_empty() {
            self.history.lock().unwrap().add(query);
        }

        let result_type = self.orchestrator.view().result_type;
        self.orchestrator.set_query(query, result_type).await
    }

    /// Switch the active result type, re-fetching the current query
    pub async fn set_result_type(
        &self,
        result_type: crate::ResultType,
    ) -> Result<(), crate::SearchError> {
        let query = self.orchestrator.view().query;
        self.orchestrator.set_query(&query, result_type).await
    }

    /// Latest autocomplete candidates
    pub fn suggestions(&self) -> Vec<String> {
        self.suggestions.read().unwrap().clone()
    }

    /// Most-recent-first past queries
    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap().entries().to_vec()
    }

    /// Drop all history entries
    pub fn clear_history(&self) {
        self.history.lock().unwrap().clear();
    }

    /// Snapshot of the orchestrator's output surface
    pub fn view(&self) -> SearchView {
        self.orchestrator.view()
    }

    /// The underlying orchestrator, for load-more and retry
    pub fn orchestrator(&self) -> &SearchOrchestrator {
        &self.orchestrator
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.drain.abort();
    }
}
