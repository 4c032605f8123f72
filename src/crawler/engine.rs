//! Crawl engine - frontier traversal and result accumulation
//!
//! Owns the FIFO frontier and the visited set, and drives the
//! fetch → classify → extract → enqueue loop until the frontier empties.
//! All crawl state lives on the engine value; two engines never share
//! anything, so parallel or test-isolated crawls are just two values.

use crate::config::{Config, LimitsConfig};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::links::discover_links;
use crate::extract::{extract_article, is_article_page, ArticleRecord, KeywordSet};
use crate::url::SiteOrigin;
use crate::SiftError;
use reqwest::Client;
use scraper::Html;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use url::Url;

/// A URL waiting in the frontier, with its discovery depth
#[derive(Debug, Clone)]
struct FrontierEntry {
    url: Url,
    depth: u32,
}

/// The crawl engine
///
/// Invariants maintained across the run:
/// - every URL is fetched at most once (`visited` grows monotonically)
/// - the frontier never holds a visited URL (`queued` mirrors frontier
///   membership for O(1) checks)
/// - every retained record's URL is in `visited` and has at least one
///   matched keyword
pub struct CrawlEngine {
    origin: SiteOrigin,
    keywords: KeywordSet,
    limits: LimitsConfig,
    request_delay: Duration,
    client: Client,
    frontier: VecDeque<FrontierEntry>,
    queued: HashSet<String>,
    visited: HashSet<String>,
}

impl CrawlEngine {
    /// Creates an engine seeded with the configured site root
    pub fn new(config: &Config) -> Result<Self, SiftError> {
        let origin = SiteOrigin::new(&config.site.root)?;
        let keywords = KeywordSet::compile(&config.site.keywords)?;
        let client = build_http_client(&config.fetch)?;

        let seed = origin.root().clone();
        let mut queued = HashSet::new();
        queued.insert(seed.as_str().to_string());

        let mut frontier = VecDeque::new();
        frontier.push_back(FrontierEntry { url: seed, depth: 0 });

        Ok(Self {
            origin,
            keywords,
            limits: config.limits.clone(),
            request_delay: Duration::from_millis(config.fetch.request_delay_ms),
            client,
            frontier,
            queued,
            visited: HashSet::new(),
        })
    }

    /// Runs the crawl to completion and returns the matched articles in
    /// discovery order
    ///
    /// Strictly sequential: each fetch, including its pacing delay,
    /// completes before the next begins. A fetch failure marks the URL
    /// visited and the crawl continues; nothing short of frontier
    /// exhaustion (or a configured page cap) stops the run.
    pub async fn run(&mut self) -> Result<Vec<ArticleRecord>, SiftError> {
        let mut records = Vec::new();
        let mut pages_fetched: u64 = 0;
        let start_time = std::time::Instant::now();

        while let Some(entry) = self.frontier.pop_front() {
            let key = entry.url.as_str().to_string();
            self.queued.remove(&key);

            // Cannot occur given enqueue-time filtering; kept for a
            // concurrent variant where enqueue and pop may race.
            if self.visited.contains(&key) {
                continue;
            }

            if let Some(max_pages) = self.limits.max_pages {
                if pages_fetched >= max_pages {
                    tracing::info!("Page cap of {} reached, stopping crawl", max_pages);
                    break;
                }
            }

            tracing::debug!("Fetching {}", entry.url);
            self.visited.insert(key);
            pages_fetched += 1;

            match fetch_page(&self.client, &entry.url).await {
                Ok(body) => self.process_page(&entry, &body, &mut records),
                Err(e) => {
                    // Permanently skipped, never retried
                    tracing::warn!("Fetch failed for {}: {}", entry.url, e);
                }
            }

            if pages_fetched % 25 == 0 {
                tracing::info!(
                    "Progress: {} pages fetched, {} queued, {} articles matched",
                    pages_fetched,
                    self.frontier.len(),
                    records.len()
                );
            }

            // Politeness pacing: the delay belongs to the request that just
            // completed, so it runs even after a failure.
            if self.request_delay > Duration::ZERO {
                tokio::time::sleep(self.request_delay).await;
            }
        }

        tracing::info!(
            "Crawl complete: {} pages fetched, {} articles matched in {:?}",
            pages_fetched,
            records.len(),
            start_time.elapsed()
        );

        Ok(records)
    }

    /// Classifies one fetched page, extracting an article if it is one, and
    /// harvests frontier candidates either way
    fn process_page(&mut self, entry: &FrontierEntry, body: &str, records: &mut Vec<ArticleRecord>) {
        let html = Html::parse_document(body);

        if is_article_page(&html) {
            let draft = extract_article(&html, &entry.url);

            if !draft.body_text.is_empty() {
                let matched = self.keywords.matches(&draft.body_text);
                if !matched.is_empty() {
                    tracing::info!(
                        "Matched article '{}' ({}) on: {}",
                        draft.title,
                        entry.url,
                        matched.join(", ")
                    );
                    records.push(draft.into_record(matched));
                }
            }
        }

        // Links are harvested from every page, article or listing
        for link in discover_links(&html, &self.origin) {
            self.enqueue(link.url, entry.depth + 1);
        }
    }

    /// Adds a discovered URL to the frontier unless it is already visited,
    /// already queued, or excluded by the configured limits
    fn enqueue(&mut self, url: Url, depth: u32) {
        if let Some(max_depth) = self.limits.max_depth {
            if depth > max_depth {
                return;
            }
        }

        if self
            .limits
            .deny_paths
            .iter()
            .any(|deny| url.path().contains(deny.as_str()))
        {
            return;
        }

        let key = url.as_str().to_string();
        if self.visited.contains(&key) || self.queued.contains(&key) {
            return;
        }

        self.queued.insert(key);
        self.frontier.push_back(FrontierEntry { url, depth });
    }

    /// Number of URLs fetched (or attempted) so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns true if the URL has been fetched (or attempted)
    pub fn was_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of URLs currently waiting in the frontier
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}
