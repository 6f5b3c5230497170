//! Render dispatch
//!
//! Maps a result type tag to a presentation strategy. Strategies are
//! selected by tag, never by inspecting items at runtime; unknown tags fall
//! back to the default (web) strategy. Each strategy consumes the
//! orchestrator's accumulated item list and produces a framework-neutral
//! presentation model. Every optional field must be tolerated item-by-item:
//! a missing thumbnail, sentiment or citation count never faults a strategy.

use crate::results::{AdditionalInfo, ResultItem, ResultType, SummarySource};
use chrono::DateTime;

/// One rendered result card
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub title: String,
    pub url: String,
    /// Description snippet
    pub body: Option<String>,
    /// Thumbnail or image URL
    pub media: Option<String>,
    /// Source attribution line
    pub source: Option<String>,
    /// Short metadata chips (year, citations, score, sentiment, ...)
    pub badges: Vec<String>,
}

/// AI-generated summary block shown above the result list
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryBlock {
    pub text: String,
    pub sources: Vec<SummarySource>,
}

/// Full presentation model for one result set
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedPage {
    pub summary: Option<SummaryBlock>,
    pub cards: Vec<RenderedCard>,
}

/// A presentation strategy for one result type
pub trait RenderStrategy: Send + Sync {
    /// Strategy name
    fn name(&self) -> &str;

    /// Render the accumulated item list
    fn render(&self, items: &[ResultItem]) -> RenderedPage;
}

/// Select the strategy for a result type tag
pub fn strategy_for(result_type: &ResultType) -> &'static dyn RenderStrategy {
    match result_type {
        ResultType::Images => &ImageStrategy,
        ResultType::Videos => &VideoStrategy,
        ResultType::Discussions => &DiscussionStrategy,
        ResultType::Papers => &PaperStrategy,
        ResultType::All | ResultType::Other(_) => &WebStrategy,
    }
}

/// Source attribution: explicit source name, else the URL's hostname
fn source_line(item: &ResultItem) -> Option<String> {
    item.source_name.clone().or_else(|| item.hostname())
}

/// AI summary from the first item of the batch, if the backend attached one
fn summary_block(items: &[ResultItem]) -> Option<SummaryBlock> {
    let info = items.first()?.additional_info.as_ref()?;
    let text = info.ai_summary.clone()?;
    Some(SummaryBlock {
        text,
        sources: info.summary_sources.clone().unwrap_or_default(),
    })
}

/// Sentiment chips shared by the discussion and paper strategies
fn sentiment_badges(info: &AdditionalInfo) -> Vec<String> {
    let mut badges = Vec::new();

    if let Some(ref sentiment) = info.sentiment {
        for emotion in &sentiment.emotions {
            badges.push(format!(
                "{} ({}%)",
                emotion.emotion,
                (emotion.score * 100.0).round() as i64
            ));
        }
        if let Some(ref dominant) = sentiment.dominant_emotion {
            badges.push(format!("dominant: {}", dominant));
        }
    }

    if let Some(ref overall) = info.overall_sentiment {
        badges.push(format!(
            "{} ({}%)",
            overall.dominant,
            (overall.confidence * 100.0).round() as i64
        ));
    }

    badges
}

/// Default strategy: plain web results with an optional summary lead
pub struct WebStrategy;

impl RenderStrategy for WebStrategy {
    fn name(&self) -> &str {
        "web"
    }

    fn render(&self, items: &[ResultItem]) -> RenderedPage {
        RenderedPage {
            summary: summary_block(items),
            cards: items
                .iter()
                .map(|item| RenderedCard {
                    title: item.title.clone(),
                    url: item.url.clone(),
                    body: item.description.clone(),
                    media: None,
                    source: source_line(item),
                    badges: vec![],
                })
                .collect(),
        }
    }
}

/// Image grid: thumbnail preferred, full image URL as fallback
pub struct ImageStrategy;

impl RenderStrategy for ImageStrategy {
    fn name(&self) -> &str {
        "images"
    }

    fn render(&self, items: &[ResultItem]) -> RenderedPage {
        RenderedPage {
            summary: None,
            cards: items
                .iter()
                .map(|item| RenderedCard {
                    title: item.title.clone(),
                    url: item.url.clone(),
                    body: None,
                    media: item.thumbnail.clone().or_else(|| Some(item.url.clone())),
                    source: source_line(item),
                    badges: vec![],
                })
                .collect(),
        }
    }
}

/// Video cards with channel attribution
pub struct VideoStrategy;

impl RenderStrategy for VideoStrategy {
    fn name(&self) -> &str {
        "videos"
    }

    fn render(&self, items: &[ResultItem]) -> RenderedPage {
        RenderedPage {
            summary: None,
            cards: items
                .iter()
                .map(|item| {
                    let channel = item
                        .additional_info
                        .as_ref()
                        .and_then(|info| info.channel.clone());
                    let source = match (source_line(item), channel) {
                        (Some(source), Some(channel)) => Some(format!("{} • {}", source, channel)),
                        (source, channel) => source.or(channel),
                    };

                    RenderedCard {
                        title: item.title.clone(),
                        url: item.url.clone(),
                        body: item.description.clone(),
                        media: item.thumbnail.clone(),
                        source,
                        badges: vec![],
                    }
                })
                .collect(),
        }
    }
}

/// Discussion threads: score, comments, subreddit, date, sentiment
pub struct DiscussionStrategy;

impl RenderStrategy for DiscussionStrategy {
    fn name(&self) -> &str {
        "discussions"
    }

    fn render(&self, items: &[ResultItem]) -> RenderedPage {
        RenderedPage {
            summary: summary_block(items),
            cards: items
                .iter()
                .map(|item| {
                    let mut badges = Vec::new();
                    let mut source = source_line(item);

                    if let Some(ref info) = item.additional_info {
                        if let Some(score) = info.score {
                            badges.push(format!("{} points", score));
                        }
                        if let Some(comments) = info.num_comments {
                            badges.push(format!("{} comments", comments));
                        }
                        if let Some(ref subreddit) = info.subreddit {
                            source = Some(match source {
                                Some(s) => format!("{} • r/{}", s, subreddit),
                                None => format!("r/{}", subreddit),
                            });
                        }
                        if let Some(created) = info.created_utc {
                            if let Some(date) = DateTime::from_timestamp(created, 0) {
                                badges.push(date.format("%Y-%m-%d").to_string());
                            }
                        }
                        badges.extend(sentiment_badges(info));
                    }

                    RenderedCard {
                        title: item.title.clone(),
                        url: item.url.clone(),
                        body: item.description.clone(),
                        media: None,
                        source,
                        badges,
                    }
                })
                .collect(),
        }
    }
}

/// Academic papers: year, citation count, sentiment, summary lead
pub struct PaperStrategy;

impl RenderStrategy for PaperStrategy {
    fn name(&self) -> &str {
        "papers"
    }

    fn render(&self, items: &[ResultItem]) -> RenderedPage {
        RenderedPage {
            summary: summary_block(items),
            cards: items
                .iter()
                .map(|item| {
                    let mut badges = Vec::new();

                    if let Some(ref info) = item.additional_info {
                        if let Some(year) = info.year {
                            badges.push(year.to_string());
                        }
                        if let Some(citations) = info.citations {
                            badges.push(format!("{} citations", citations));
                        }
                        badges.extend(sentiment_badges(info));
                    }

                    RenderedCard {
                        title: item.title.clone(),
                        url: item.url.clone(),
                        body: item.description.clone(),
                        media: None,
                        source: source_line(item),
                        badges,
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{EmotionScore, OverallSentiment, Sentiment};

    #[test]
    fn test_dispatch_by_tag() {
        assert_eq!(strategy_for(&ResultType::Images).name(), "images");
        assert_eq!(strategy_for(&ResultType::Videos).name(), "videos");
        assert_eq!(strategy_for(&ResultType::Discussions).name(), "discussions");
        assert_eq!(strategy_for(&ResultType::Papers).name(), "papers");
        assert_eq!(strategy_for(&ResultType::All).name(), "web");
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default() {
        let strategy = strategy_for(&ResultType::Other("podcasts".to_string()));
        assert_eq!(strategy.name(), "web");
    }

    #[test]
    fn test_bare_items_render_without_faulting() {
        // No description, thumbnail, source or additional_info anywhere
        let items = vec![
            ResultItem::new("1", "First", "https://a.example/x"),
            ResultItem::new("2", "Second", "https://b.example/y"),
        ];

        for t in ResultType::known() {
            let page = strategy_for(&t).render(&items);
            assert_eq!(page.cards.len(), 2);
            assert!(page.summary.is_none());
        }
    }

    #[test]
    fn test_image_media_falls_back_to_url() {
        let mut with_thumb = ResultItem::new("1", "Thumb", "https://a.example/full.png");
        with_thumb.thumbnail = Some("https://a.example/thumb.png".to_string());
        let without = ResultItem::new("2", "NoThumb", "https://b.example/full.png");

        let page = ImageStrategy.render(&[with_thumb, without]);
        assert_eq!(
            page.cards[0].media.as_deref(),
            Some("https://a.example/thumb.png")
        );
        assert_eq!(
            page.cards[1].media.as_deref(),
            Some("https://b.example/full.png")
        );
    }

    #[test]
    fn test_paper_badges_and_summary() {
        let info = AdditionalInfo {
            year: Some(2023),
            citations: Some(42),
            ai_summary: Some("Field overview.".to_string()),
            summary_sources: Some(vec![SummarySource {
                title: "Survey".to_string(),
                url: "https://papers.example/survey".to_string(),
            }]),
            ..Default::default()
        };
        let item = ResultItem::new("1", "A Paper", "https://papers.example/1")
            .with_description("Abstract.")
            .with_additional_info(info);

        let page = PaperStrategy.render(&[item]);
        let summary = page.summary.unwrap();
        assert_eq!(summary.text, "Field overview.");
        assert_eq!(summary.sources.len(), 1);
        assert!(page.cards[0].badges.contains(&"2023".to_string()));
        assert!(page.cards[0].badges.contains(&"42 citations".to_string()));
    }

    #[test]
    fn test_discussion_card_details() {
        let info = AdditionalInfo {
            subreddit: Some("rust".to_string()),
            score: Some(1543),
            num_comments: Some(208),
            created_utc: Some(1_700_000_000),
            sentiment: Some(Sentiment {
                emotions: vec![EmotionScore {
                    emotion: "joy".to_string(),
                    score: 0.85,
                }],
                dominant_emotion: Some("joy".to_string()),
            }),
            overall_sentiment: Some(OverallSentiment {
                dominant: "Positive".to_string(),
                confidence: 0.91,
            }),
            ..Default::default()
        };
        let mut item = ResultItem::new("1", "Thread", "https://reddit.example/t")
            .with_description("Body.")
            .with_additional_info(info);
        item.source_name = Some("Reddit".to_string());

        let page = DiscussionStrategy.render(&[item]);
        let card = &page.cards[0];
        assert_eq!(card.source.as_deref(), Some("Reddit • r/rust"));
        assert!(card.badges.contains(&"1543 points".to_string()));
        assert!(card.badges.contains(&"208 comments".to_string()));
        assert!(card.badges.contains(&"joy (85%)".to_string()));
        assert!(card.badges.contains(&"Positive (91%)".to_string()));
        assert!(card.badges.iter().any(|b| b == "2023-11-14"));
    }

    #[test]
    fn test_video_channel_attribution() {
        let info = AdditionalInfo {
            channel: Some("RustConf".to_string()),
            ..Default::default()
        };
        let mut item = ResultItem::new("1", "Talk", "https://videos.example/v")
            .with_additional_info(info);
        item.source_name = Some("YouTube".to_string());
        item.thumbnail = Some("https://videos.example/v.jpg".to_string());

        let page = VideoStrategy.render(&[item]);
        assert_eq!(page.cards[0].source.as_deref(), Some("YouTube • RustConf"));
        assert_eq!(
            page.cards[0].media.as_deref(),
            Some("https://videos.example/v.jpg")
        );
    }
}
