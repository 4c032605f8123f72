//! Crawler module
//!
//! The frontier-driven crawl engine, the GET-only fetch wrapper, and the
//! link discovery strategies.

mod engine;
mod fetcher;
mod links;

pub use engine::CrawlEngine;
pub use fetcher::{build_http_client, fetch_page};
pub use links::{discover_links, DiscoveredLink, LinkStrategy};

use crate::config::Config;
use crate::extract::ArticleRecord;
use crate::SiftError;

/// Runs a complete crawl from the configured seed
///
/// Builds an engine, walks the reachable same-origin graph, and returns
/// the keyword-matched articles in discovery order.
pub async fn crawl(config: &Config) -> Result<Vec<ArticleRecord>, SiftError> {
    let mut engine = CrawlEngine::new(config)?;
    engine.run().await
}
