//! Pagination state machine
//!
//! Tracks the accumulated result list, current page and continuation token
//! for one (result type, query) key. Page 1 replaces the accumulated list;
//! every later page appends. A query change discards the instance entirely,
//! so state never carries over between keys.

use crate::results::{ResultItem, SearchResponse};

/// Load state for one (result type, query) key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing fetched yet, or the last fetch failed
    #[default]
    Idle,
    /// First page in flight
    Loading,
    /// At least one page applied, more may be available
    Ready,
    /// A further page in flight
    LoadingMore,
    /// The backend reported no more results
    Exhausted,
}

/// Pagination controller state for one (result type, query) key
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    pub state: LoadState,
    /// Last successfully applied page, 0 before the first page lands
    pub current_page: u32,
    /// Continuation token from the last applied batch
    pub next_page_token: Option<String>,
    /// Accumulated results, in fetch order
    pub results: Vec<ResultItem>,
    pub has_more: bool,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page the next fetch should request (1-based)
    pub fn next_page(&self) -> u32 {
        self.current_page + 1
    }

    /// Whether a "load more" request is currently permitted
    pub fn can_load_more(&self) -> bool {
        self.state == LoadState::Ready && self.has_more
    }

    /// Whether a fetch is in flight for this key
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading | LoadState::LoadingMore)
    }

    /// Mark a fetch for `page` as started
    pub fn begin(&mut self, page: u32) {
        self.state = if page <= 1 {
            LoadState::Loading
        } else {
            LoadState::LoadingMore
        };
    }

    /// Apply a successfully fetched batch for `page`.
    ///
    /// Page 1 resets the accumulated list; page n>1 appends, preserving
    /// order: existing items first, new items after.
    pub fn apply(&mut self, page: u32, batch: &SearchResponse) {
        if page <= 1 {
            self.results = batch.results.clone();
        } else {
            self.results.extend(batch.results.iter().cloned());
        }

        self.current_page = page.max(1);
        self.next_page_token = batch.next_page_token.clone();
        self.has_more = batch.has_more;
        self.state = if batch.has_more {
            LoadState::Ready
        } else {
            LoadState::Exhausted
        };
    }

    /// Record a failed fetch, preserving accumulated results so a retry
    /// resumes without data loss
    pub fn fail(&mut self) {
        self.state = LoadState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(ids: &[&str], token: Option<&str>, has_more: bool) -> SearchResponse {
        SearchResponse {
            results: ids
                .iter()
                .map(|id| ResultItem::new(*id, format!("title {}", id), "https://x.example"))
                .collect(),
            total_results: ids.len() as u64,
            next_page_token: token.map(str::to_string),
            has_more,
        }
    }

    fn ids(state: &PaginationState) -> Vec<&str> {
        state.results.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = PaginationState::new();
        assert_eq!(state.state, LoadState::Idle);
        assert_eq!(state.next_page(), 1);
        assert!(!state.can_load_more());
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_page_one_replaces_then_pages_append() {
        let mut state = PaginationState::new();

        state.begin(1);
        assert_eq!(state.state, LoadState::Loading);
        state.apply(1, &batch(&["a", "b"], Some("tok1"), true));

        assert_eq!(state.state, LoadState::Ready);
        assert_eq!(ids(&state), vec!["a", "b"]);
        assert_eq!(state.next_page(), 2);
        assert!(state.can_load_more());

        state.begin(2);
        assert_eq!(state.state, LoadState::LoadingMore);
        state.apply(2, &batch(&["c", "d"], None, false));

        assert_eq!(ids(&state), vec!["a", "b", "c", "d"]);
        assert_eq!(state.state, LoadState::Exhausted);
        assert!(!state.can_load_more());
    }

    #[test]
    fn test_fresh_page_one_resets_accumulation() {
        let mut state = PaginationState::new();
        state.apply(1, &batch(&["a"], Some("tok1"), true));
        state.apply(2, &batch(&["b"], Some("tok2"), true));

        state.begin(1);
        state.apply(1, &batch(&["z"], None, true));

        assert_eq!(ids(&state), vec!["z"]);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_failure_preserves_results() {
        let mut state = PaginationState::new();
        state.apply(1, &batch(&["a", "b"], Some("tok1"), true));

        state.begin(2);
        state.fail();

        assert_eq!(state.state, LoadState::Idle);
        assert_eq!(ids(&state), vec!["a", "b"]);
        // token survives, so a retry can resume where it left off
        assert_eq!(state.next_page_token.as_deref(), Some("tok1"));
        assert_eq!(state.next_page(), 2);
    }

    #[test]
    fn test_no_load_more_while_in_flight() {
        let mut state = PaginationState::new();
        state.apply(1, &batch(&["a"], Some("tok1"), true));
        assert!(state.can_load_more());

        state.begin(2);
        assert!(state.is_loading());
        assert!(!state.can_load_more());
    }
}
