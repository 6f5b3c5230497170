//! NeuraSeek client: result-fetch orchestration for a multi-source search API
//!
//! Turns a raw query string into deduplicated, paginated, cache-aware result
//! batches: debounced input drives a fetch orchestrator that consults a TTL
//! cache, issues HTTP requests, tracks pagination state, and hands typed
//! result batches to a render dispatch layer.

pub mod cache;
pub mod config;
pub mod debounce;
pub mod error;
pub mod history;
pub mod network;
pub mod pagination;
pub mod render;
pub mod results;
pub mod search;
pub mod suggest;

pub use config::Settings;
pub use error::SearchError;
pub use results::{ResultItem, ResultType, SearchResponse};
pub use search::{SearchOrchestrator, SearchSession, SearchView};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of results requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Debounce window for rapidly changing input, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Time-to-live for cached result batches, in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Maximum number of entries kept in the search history
pub const MAX_HISTORY_ITEMS: usize = 10;
