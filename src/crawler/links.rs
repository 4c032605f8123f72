//! Link discovery strategies
//!
//! Three independent strategies run over every fetched page and their
//! results are unioned, not prioritized:
//!
//! 1. Article-card title links (`h2.card-title a`)
//! 2. Article-card image links (`div.card-image a`)
//! 3. A generic same-origin anchor scan that keeps index/pagination pages
//!    and anything matching the article URL shape
//!
//! The rules themselves (selectors, asset extensions, path shapes) live as
//! data here and in [`crate::url`], separate from the traversal loop, so
//! each strategy is unit testable on its own.

use crate::url::{is_article_shape, is_index_path, is_static_asset, SiteOrigin};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Which strategy first discovered a candidate URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkStrategy {
    /// Article-card title link
    CardTitle,
    /// Article-card image link
    CardImage,
    /// Generic same-origin anchor scan
    SiteScan,
}

/// A candidate URL tagged with its discovery strategy
#[derive(Debug, Clone)]
pub struct DiscoveredLink {
    pub url: Url,
    pub strategy: LinkStrategy,
}

/// Extracts every candidate URL worth visiting from a parsed page
///
/// Output is deduplicated by URL, preserving first-discovery order: the
/// high-precision card strategies run before the generic scan, so a URL
/// found by both keeps its card tag. Every returned URL is absolute, inside
/// the configured origin, and fragment-free.
pub fn discover_links(html: &Html, origin: &SiteOrigin) -> Vec<DiscoveredLink> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut links = Vec::new();

    // Strategy 1: article card titles
    for href in hrefs(html, "h2.card-title a[href]") {
        push_card_link(&href, LinkStrategy::CardTitle, origin, &mut seen, &mut links);
    }

    // Strategy 2: article card images
    for href in hrefs(html, "div.card-image a[href]") {
        push_card_link(&href, LinkStrategy::CardImage, origin, &mut seen, &mut links);
    }

    // Strategy 3: generic anchor scan for index pages, pagination, and
    // anything article-shaped the card markup missed
    for href in hrefs(html, "a[href]") {
        let url = match origin.resolve(&href) {
            Some(url) => url,
            None => continue,
        };

        if !origin.contains(&url) || is_static_asset(&url) {
            continue;
        }

        if !is_index_path(&url) && !is_article_shape(&url) {
            continue;
        }

        if seen.insert(url.as_str().to_string()) {
            links.push(DiscoveredLink {
                url,
                strategy: LinkStrategy::SiteScan,
            });
        }
    }

    links
}

/// Applies the card-strategy filter: resolved, on-origin, article-shaped
fn push_card_link(
    href: &str,
    strategy: LinkStrategy,
    origin: &SiteOrigin,
    seen: &mut HashSet<String>,
    links: &mut Vec<DiscoveredLink>,
) {
    let url = match origin.resolve(href) {
        Some(url) => url,
        None => return,
    };

    if !origin.contains(&url) || !is_article_shape(&url) {
        return;
    }

    if seen.insert(url.as_str().to_string()) {
        links.push(DiscoveredLink { url, strategy });
    }
}

fn hrefs(html: &Html, selector: &str) -> Vec<String> {
    let selector = match Selector::parse(selector) {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    html.select(&selector)
        .filter_map(|el| el.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}
