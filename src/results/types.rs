//! Result type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Result category tag, determining both the request shape and the render
/// strategy.
///
/// Unknown tags are preserved rather than rejected: they are still fetchable
/// and fall back to the default render strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultType {
    All,
    Images,
    Videos,
    Discussions,
    Papers,
    Other(String),
}

impl ResultType {
    /// Parse a tag as sent over the wire
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "all" => Self::All,
            "images" => Self::Images,
            "videos" => Self::Videos,
            "discussions" => Self::Discussions,
            "papers" => Self::Papers,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire representation of this tag
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Images => "images",
            Self::Videos => "videos",
            Self::Discussions => "discussions",
            Self::Papers => "papers",
            Self::Other(tag) => tag,
        }
    }

    /// All known tags, in tab order
    pub fn known() -> [ResultType; 5] {
        [
            Self::All,
            Self::Images,
            Self::Videos,
            Self::Discussions,
            Self::Papers,
        ]
    }
}

impl Default for ResultType {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ResultType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ResultType> for String {
    fn from(t: ResultType) -> Self {
        t.as_str().to_string()
    }
}

/// A single search result as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultItem {
    /// Stable identifier, unique within one response batch
    pub id: String,
    /// The title of the result
    pub title: String,
    /// Content snippet/description
    #[serde(default)]
    pub description: Option<String>,
    /// The URL of the result
    pub url: String,
    /// Thumbnail URL
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Source favicon URL
    #[serde(default)]
    pub source_icon: Option<String>,
    /// Human-readable source name
    #[serde(default)]
    pub source_name: Option<String>,
    /// Server-side relevance score
    #[serde(default)]
    pub relevance_score: f64,
    /// Type-specific payload (sentiment, citation counts, AI summary, ...)
    #[serde(default)]
    pub additional_info: Option<AdditionalInfo>,
}

impl ResultItem {
    /// Create a minimal result
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            url: url.into(),
            thumbnail: None,
            source_icon: None,
            source_name: None,
            relevance_score: 0.0,
            additional_info: None,
        }
    }

    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a type-specific payload
    pub fn with_additional_info(mut self, info: AdditionalInfo) -> Self {
        self.additional_info = Some(info);
        self
    }

    /// Hostname of the result URL, used as a source fallback
    pub fn hostname(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }
}

/// Type-specific metadata attached to a result.
///
/// Every field is optional; renderers must tolerate absence item-by-item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdditionalInfo {
    /// Channel name (video results)
    pub channel: Option<String>,
    /// Subreddit without the r/ prefix (discussion results)
    pub subreddit: Option<String>,
    /// Vote score (discussion results)
    pub score: Option<i64>,
    /// Comment count (discussion results)
    pub num_comments: Option<u64>,
    /// Creation time as a unix timestamp (discussion results)
    pub created_utc: Option<i64>,
    /// Publication year (paper results)
    pub year: Option<i32>,
    /// Citation count (paper results)
    pub citations: Option<u64>,
    /// Per-item emotional analysis
    pub sentiment: Option<Sentiment>,
    /// Overall positive/negative/neutral classification
    pub overall_sentiment: Option<OverallSentiment>,
    /// AI-generated summary of the batch, attached to the first item
    pub ai_summary: Option<String>,
    /// Sources backing the AI summary
    pub summary_sources: Option<Vec<SummarySource>>,
}

/// Emotional analysis of a result's description
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Sentiment {
    pub emotions: Vec<EmotionScore>,
    pub dominant_emotion: Option<String>,
}

/// A single scored emotion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmotionScore {
    pub emotion: String,
    pub score: f64,
}

/// Aggregate sentiment classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverallSentiment {
    /// "Positive", "Negative" or "Neutral"
    pub dominant: String,
    pub confidence: f64,
}

/// A source backing an AI-generated summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarySource {
    pub title: String,
    pub url: String,
}

/// One fetched batch of results: the value cached per (type, query, page)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub results: Vec<ResultItem>,
    #[serde(default)]
    pub total_results: u64,
    /// Opaque continuation token for forward pagination
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}
