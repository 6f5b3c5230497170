//! Result data model for the NeuraSeek search API

mod types;

pub use types::{
    AdditionalInfo, EmotionScore, OverallSentiment, ResultItem, ResultType, SearchResponse,
    Sentiment, SummarySource,
};
