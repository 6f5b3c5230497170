//! Fetch orchestration: the per-request lifecycle from query string to
//! accumulated, cache-aware result batches

mod orchestrator;
mod session;

pub use orchestrator::{SearchOrchestrator, SearchView};
pub use session::SearchSession;
