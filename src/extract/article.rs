//! Article page detection and field extraction
//!
//! The site serves Ghost-style markup: article pages carry a
//! `div.post-entry` content container, headers live in
//! `div.post-header-intro`, and outbound references appear as bookmark
//! cards inside the content body.
//!
//! Every field extraction is independently fault tolerant. Missing markup
//! yields a fixed sentinel string, never an error, so one malformed page
//! cannot stop the crawl.

use scraper::{ElementRef, Html, Selector};
use std::fmt;
use url::Url;

/// Sentinel for a missing article title
pub const TITLE_MISSING: &str = "Title not found";
/// Sentinel for a missing article author
pub const AUTHOR_MISSING: &str = "Author not found";
/// Sentinel for a missing publication date
pub const DATE_MISSING: &str = "Date not found";
/// Sentinel for a missing source title
pub const SOURCE_TITLE_MISSING: &str = "Source title not found";
/// Sentinel for a missing source author
pub const SOURCE_AUTHOR_MISSING: &str = "Source author not found";
/// Sentinel for a missing source URL
pub const SOURCE_URL_MISSING: &str = "URL not found";

/// An outbound citation/source reference harvested from the article body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    pub title: String,
    /// Only bookmark cards carry an author line; custom bookmarks never do
    pub author: Option<String>,
    pub url: String,
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.author {
            Some(author) => write!(f, "Title: {}, Author: {}, URL: {}", self.title, author, self.url),
            None => write!(f, "Title: {}, URL: {}", self.title, self.url),
        }
    }
}

/// Extracted article fields before keyword filtering
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: String,
    pub author: String,
    pub publication_date: String,
    pub url: String,
    pub body_text: String,
    pub sources: Vec<SourceRef>,
}

impl ArticleDraft {
    /// Finalizes the draft into a record once keyword matching has run
    pub fn into_record(self, matched_keywords: Vec<String>) -> ArticleRecord {
        ArticleRecord {
            title: self.title,
            author: self.author,
            publication_date: self.publication_date,
            url: self.url,
            body_text: self.body_text,
            sources: self.sources,
            matched_keywords,
        }
    }
}

/// A qualifying article, immutable once created
///
/// `matched_keywords` is non-empty for every retained record; articles with
/// no keyword matches are discarded by the engine, not recorded.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub title: String,
    pub author: String,
    pub publication_date: String,
    pub url: String,
    pub body_text: String,
    pub sources: Vec<SourceRef>,
    pub matched_keywords: Vec<String>,
}

/// Returns true if the parsed page is an article page
///
/// Binary structural check: article pages carry the content-body container.
/// Listing pages that happen to contain the marker are treated as articles;
/// that false-positive bias is deliberate, since their links are harvested
/// either way and tightening the check could drop reachable articles.
pub fn is_article_page(html: &Html) -> bool {
    select_first(html, "div.post-entry").is_some()
}

/// Extracts article fields from a parsed article page
///
/// Never fails: each field falls back to its sentinel when the expected
/// markup is absent.
pub fn extract_article(html: &Html, url: &Url) -> ArticleDraft {
    let title = select_first(html, "div.post-header-intro h1")
        .map(element_text)
        .unwrap_or_else(|| TITLE_MISSING.to_string());

    let author = select_first(html, "div.post-author-name a")
        .map(|el| element_text(el).trim_start_matches("by ").to_string())
        .unwrap_or_else(|| AUTHOR_MISSING.to_string());

    let publication_date = select_first(html, "div.post-date-read div")
        .map(element_text)
        .unwrap_or_else(|| DATE_MISSING.to_string());

    let body_text = select_all(html, "div.post-entry p")
        .into_iter()
        .map(element_text)
        .collect::<Vec<_>>()
        .join(" ");

    let mut sources = harvest_bookmark_cards(html);
    sources.extend(harvest_custom_bookmarks(html));

    ArticleDraft {
        title,
        author,
        publication_date,
        url: url.to_string(),
        body_text,
        sources,
    }
}

/// Harvests `figure.kg-bookmark-card` references from the content body
///
/// Duplicates are kept; the result preserves document order.
fn harvest_bookmark_cards(html: &Html) -> Vec<SourceRef> {
    let mut sources = Vec::new();

    for card in select_all(html, "div.post-entry figure.kg-bookmark-card") {
        let container = match select_first_in(card, "a.kg-bookmark-container") {
            Some(c) => c,
            None => continue,
        };

        let url = container
            .value()
            .attr("href")
            .unwrap_or(SOURCE_URL_MISSING)
            .to_string();

        let title = select_first_in(container, "div.kg-bookmark-title")
            .map(element_text)
            .unwrap_or_else(|| SOURCE_TITLE_MISSING.to_string());

        let author = Some(
            select_first_in(container, "span.kg-bookmark-author")
                .map(element_text)
                .unwrap_or_else(|| SOURCE_AUTHOR_MISSING.to_string()),
        );

        sources.push(SourceRef { title, author, url });
    }

    sources
}

/// Harvests `a.custom-bookmark` references from the content body
fn harvest_custom_bookmarks(html: &Html) -> Vec<SourceRef> {
    let mut sources = Vec::new();

    for anchor in select_all(html, "div.post-entry a.custom-bookmark") {
        let url = anchor
            .value()
            .attr("href")
            .unwrap_or(SOURCE_URL_MISSING)
            .to_string();

        let title = select_first_in(anchor, "strong")
            .map(element_text)
            .unwrap_or_else(|| SOURCE_TITLE_MISSING.to_string());

        sources.push(SourceRef {
            title,
            author: None,
            url,
        });
    }

    sources
}

fn select_first<'a>(html: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    html.select(&selector).next()
}

fn select_first_in<'a>(element: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    element.select(&selector).next()
}

fn select_all<'a>(html: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(selector) => html.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_url() -> Url {
        Url::parse("https://example.com/my-article/").unwrap()
    }

    const FULL_ARTICLE: &str = r#"
        <html><body>
        <div class="post-header-intro"><h1>AI Policy Outlook</h1></div>
        <div class="post-author-name"><a href="/author/jane/">by Jane Doe</a></div>
        <div class="post-date-read"><div>12 May 2025</div></div>
        <div class="post-entry">
            <p>First paragraph about regulation.</p>
            <p>Second paragraph.</p>
            <figure class="kg-bookmark-card">
                <a class="kg-bookmark-container" href="https://source.example.net/report">
                    <div class="kg-bookmark-title">Annual Report</div>
                    <span class="kg-bookmark-author">Research Lab</span>
                </a>
            </figure>
            <a class="custom-bookmark" href="https://other.example.net/brief">
                <strong>Policy Brief</strong>
            </a>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_is_article_page() {
        let html = Html::parse_document(FULL_ARTICLE);
        assert!(is_article_page(&html));

        let listing = Html::parse_document("<html><body><div class='post-card'></div></body></html>");
        assert!(!is_article_page(&listing));
    }

    #[test]
    fn test_extract_full_article() {
        let html = Html::parse_document(FULL_ARTICLE);
        let draft = extract_article(&html, &article_url());

        assert_eq!(draft.title, "AI Policy Outlook");
        assert_eq!(draft.author, "Jane Doe");
        assert_eq!(draft.publication_date, "12 May 2025");
        assert_eq!(draft.url, "https://example.com/my-article/");
        assert_eq!(
            draft.body_text,
            "First paragraph about regulation. Second paragraph."
        );
    }

    #[test]
    fn test_extract_sources_in_order() {
        let html = Html::parse_document(FULL_ARTICLE);
        let draft = extract_article(&html, &article_url());

        assert_eq!(draft.sources.len(), 2);
        assert_eq!(
            draft.sources[0],
            SourceRef {
                title: "Annual Report".to_string(),
                author: Some("Research Lab".to_string()),
                url: "https://source.example.net/report".to_string(),
            }
        );
        assert_eq!(
            draft.sources[1],
            SourceRef {
                title: "Policy Brief".to_string(),
                author: None,
                url: "https://other.example.net/brief".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_fields_yield_sentinels() {
        let html = Html::parse_document(
            r#"<html><body><div class="post-entry"><p>Only a body.</p></div></body></html>"#,
        );
        let draft = extract_article(&html, &article_url());

        assert_eq!(draft.title, TITLE_MISSING);
        assert_eq!(draft.author, AUTHOR_MISSING);
        assert_eq!(draft.publication_date, DATE_MISSING);
        assert_eq!(draft.body_text, "Only a body.");
        assert!(draft.sources.is_empty());
    }

    #[test]
    fn test_bookmark_without_author_gets_sentinel() {
        let html = Html::parse_document(
            r#"<html><body><div class="post-entry">
            <figure class="kg-bookmark-card">
                <a class="kg-bookmark-container" href="https://src.net/x">
                    <div class="kg-bookmark-title">A Report</div>
                </a>
            </figure>
            </div></body></html>"#,
        );
        let draft = extract_article(&html, &article_url());

        assert_eq!(draft.sources.len(), 1);
        assert_eq!(
            draft.sources[0].author.as_deref(),
            Some(SOURCE_AUTHOR_MISSING)
        );
    }

    #[test]
    fn test_duplicate_sources_not_collapsed() {
        let html = Html::parse_document(
            r#"<html><body><div class="post-entry">
            <a class="custom-bookmark" href="https://src.net/x"><strong>Same</strong></a>
            <a class="custom-bookmark" href="https://src.net/x"><strong>Same</strong></a>
            </div></body></html>"#,
        );
        let draft = extract_article(&html, &article_url());
        assert_eq!(draft.sources.len(), 2);
    }

    #[test]
    fn test_source_display() {
        let with_author = SourceRef {
            title: "A".to_string(),
            author: Some("B".to_string()),
            url: "https://c.net/".to_string(),
        };
        assert_eq!(with_author.to_string(), "Title: A, Author: B, URL: https://c.net/");

        let without_author = SourceRef {
            title: "A".to_string(),
            author: None,
            url: "https://c.net/".to_string(),
        };
        assert_eq!(without_author.to_string(), "Title: A, URL: https://c.net/");
    }

    #[test]
    fn test_empty_body_is_empty_string() {
        let html = Html::parse_document(
            r#"<html><body><div class="post-entry"></div></body></html>"#,
        );
        let draft = extract_article(&html, &article_url());
        assert_eq!(draft.body_text, "");
    }
}
