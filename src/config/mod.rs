//! Client configuration
//!
//! Settings follow the same shape as the deployment config: a YAML file with
//! nested sections, overridable through `NEURASEEK_*` environment variables.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level client settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub search: SearchSettings,
    pub history: HistorySettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (NEURASEEK_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("NEURASEEK_API_URL") {
            self.api.base_url = val;
        }
        if let Ok(val) = std::env::var("NEURASEEK_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.api.request_timeout_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("NEURASEEK_PAGE_SIZE") {
            if let Ok(size) = val.parse() {
                self.api.page_size = size;
            }
        }
    }
}

/// Search API endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the search API
    pub base_url: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Results requested per page
    pub page_size: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            request_timeout_secs: 10,
            page_size: crate::DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Quiet window before a changing query is acted on, in milliseconds
    pub debounce_ms: u64,
    /// Time-to-live for cached result batches, in seconds
    pub cache_ttl_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: crate::DEFAULT_DEBOUNCE_MS,
            cache_ttl_secs: crate::DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

/// Search history settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of entries kept
    pub max_entries: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_entries: crate::MAX_HISTORY_ITEMS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.page_size, 20);
        assert_eq!(settings.search.debounce_ms, 300);
        assert_eq!(settings.search.cache_ttl_secs, 300);
        assert_eq!(settings.history.max_entries, 10);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let yaml = r#"
api:
  base_url: "https://search.example/api"
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.api.base_url, "https://search.example/api");
        assert_eq!(settings.api.page_size, 20);
        assert_eq!(settings.search.debounce_ms, 300);
    }
}
