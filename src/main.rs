//! NeuraSeek command-line client: one-shot search against the API

use anyhow::Result;
use neuraseek_client::{
    cache::ResultCache,
    config::Settings,
    history::SearchHistory,
    network::HttpClient,
    render::RenderedPage,
    suggest::{fetch_suggestions, ApiSuggestions},
    ResultType, SearchOrchestrator,
};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(query) = args.next() else {
        print_usage();
        return Ok(());
    };
    let result_type = args
        .next()
        .map(|tag| ResultType::from_tag(&tag))
        .unwrap_or_default();
    let pages: u32 = args.next().and_then(|n| n.parse().ok()).unwrap_or(1);

    let settings = load_settings()?;
    info!("searching against {}", settings.api.base_url);

    let client = HttpClient::new(settings.api.request_timeout())?;
    let cache = ResultCache::new(settings.search.cache_ttl());
    let orchestrator = SearchOrchestrator::new(
        client.clone(),
        cache,
        settings.api.base_url.clone(),
        settings.api.page_size,
    );

    orchestrator.set_query(&query, result_type).await?;
    for _ in 1..pages {
        orchestrator.load_more().await?;
    }

    let view = orchestrator.view();
    print_page(&orchestrator.rendered());
    if view.has_more {
        println!("... more results available");
    }

    let backend = ApiSuggestions::new(settings.api.base_url.clone());
    let suggestions = fetch_suggestions(&client, &backend, &query).await;
    if !suggestions.is_empty() {
        println!("\nRelated: {}", suggestions.join(", "));
    }

    let mut history = SearchHistory::open_default(settings.history.max_entries);
    history.add(query);

    Ok(())
}

fn print_page(page: &RenderedPage) {
    if let Some(ref summary) = page.summary {
        println!("== Summary ==");
        println!("{}", summary.text);
        for source in &summary.sources {
            println!("  - {} <{}>", source.title, source.url);
        }
        println!();
    }

    for card in &page.cards {
        println!("{}", card.title);
        println!("  {}", card.url);
        if let Some(ref source) = card.source {
            println!("  {}", source);
        }
        if let Some(ref body) = card.body {
            println!("  {}", body);
        }
        if !card.badges.is_empty() {
            println!("  [{}]", card.badges.join(" | "));
        }
        println!();
    }
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    if let Ok(path) = std::env::var("NEURASEEK_CONFIG") {
        let mut settings = Settings::from_file(PathBuf::from(path))?;
        settings.merge_env();
        return Ok(settings);
    }

    let paths = [
        PathBuf::from("neuraseek.yml"),
        dirs::config_dir()
            .map(|p| p.join("neuraseek/config.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            info!("loading settings from {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

fn print_usage() {
    println!(
        r#"neuraseek v{}

USAGE:
    neuraseek <query> [type] [pages]

ARGS:
    query    Search query
    type     One of: all, images, videos, discussions, papers (default: all)
    pages    Number of pages to fetch (default: 1)

ENVIRONMENT VARIABLES:
    NEURASEEK_CONFIG        Path to a YAML config file
    NEURASEEK_API_URL       Search API base URL
    NEURASEEK_PAGE_SIZE     Results per page
    NEURASEEK_TIMEOUT_SECS  Request timeout in seconds
"#,
        neuraseek_client::VERSION
    );
}
