//! Search history
//!
//! Most-recent-first list of past queries, capped at a fixed size and unique:
//! re-searching an existing entry moves it to the front instead of
//! duplicating it. Persisted as JSON under the platform data directory;
//! persistence failures degrade to an empty list rather than erroring, since
//! history is never worth blocking a search over.

use std::path::{Path, PathBuf};
use tracing::warn;

/// Bounded, deduplicated list of past search queries
#[derive(Debug)]
pub struct SearchHistory {
    entries: Vec<String>,
    max_entries: usize,
    path: Option<PathBuf>,
}

impl SearchHistory {
    /// In-memory history, not persisted
    pub fn in_memory(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
            path: None,
        }
    }

    /// History backed by a JSON file, loading whatever is already there
    pub fn with_path(path: PathBuf, max_entries: usize) -> Self {
        let entries = Self::load_from(&path);
        Self {
            entries,
            max_entries,
            path: Some(path),
        }
    }

    /// History at the default platform location
    pub fn open_default(max_entries: usize) -> Self {
        match dirs::data_local_dir() {
            Some(dir) => Self::with_path(dir.join("neuraseek/search_history.json"), max_entries),
            None => Self::in_memory(max_entries),
        }
    }

    /// Record a query, moving an existing occurrence to the front
    pub fn add(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.entries.retain(|item| item != &query);
        self.entries.insert(0, query);
        self.entries.truncate(self.max_entries);
        self.save();
    }

    /// Most-recent-first entries
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Drop all entries and the backing file
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Some(ref path) = self.path {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    warn!("failed to remove history file: {}", e);
                }
            }
        }
    }

    fn load_from(path: &Path) -> Vec<String> {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("corrupt history file, starting empty: {}", e);
                Vec::new()
            }),
            Err(_) => Vec::new(),
        }
    }

    fn save(&self) {
        let Some(ref path) = self.path else {
            return;
        };

        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("failed to create history directory: {}", e);
                return;
            }
        }

        match serde_json::to_string(&self.entries) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    warn!("failed to write history file: {}", e);
                }
            }
            Err(e) => warn!("failed to encode history: {}", e),
        }
    }
}
