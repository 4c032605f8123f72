//! URL shape rules for the crawled site
//!
//! The site publishes articles at exactly one path segment below the root
//! with a trailing slash (`/some-article/`), while listing pages live under
//! `/tag/...` and `/page/...`. These rules are the data behind the third
//! link-discovery strategy.

use url::Url;

/// File extensions that mark a URL as a static asset rather than a page
const STATIC_ASSET_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".svg", ".css", ".js", ".xml", ".ico",
];

/// Path prefixes of tag/category and pagination index pages
const INDEX_PATH_PREFIXES: &[&str] = &["/tag/", "/page/"];

/// Returns true if the URL path ends in a known static-asset extension
pub fn is_static_asset(url: &Url) -> bool {
    let path = url.path().to_ascii_lowercase();
    STATIC_ASSET_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Returns true if the URL is a tag/category or pagination index page
pub fn is_index_path(url: &Url) -> bool {
    INDEX_PATH_PREFIXES
        .iter()
        .any(|prefix| url.path().starts_with(prefix))
}

/// Returns true if the URL has the article shape: exactly one path segment
/// below the site root, with a trailing slash, no query string, and not an
/// index path
///
/// Rejecting queries keeps `/a/` and `/a/?ref=x` from entering the
/// frontier as distinct URLs.
pub fn is_article_shape(url: &Url) -> bool {
    if is_index_path(url) || url.query().is_some() {
        return false;
    }

    let path = url.path();
    match path.strip_prefix('/').and_then(|p| p.strip_suffix('/')) {
        Some(segment) => !segment.is_empty() && !segment.contains('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_article_shape_single_segment() {
        assert!(is_article_shape(&url("https://example.com/my-article/")));
    }

    #[test]
    fn test_article_shape_requires_trailing_slash() {
        assert!(!is_article_shape(&url("https://example.com/my-article")));
    }

    #[test]
    fn test_root_is_not_article() {
        assert!(!is_article_shape(&url("https://example.com/")));
    }

    #[test]
    fn test_query_string_is_not_article() {
        assert!(!is_article_shape(&url("https://example.com/my-article/?ref=x")));
    }

    #[test]
    fn test_nested_path_is_not_article() {
        assert!(!is_article_shape(&url("https://example.com/a/b/")));
    }

    #[test]
    fn test_index_paths_are_not_articles() {
        assert!(!is_article_shape(&url("https://example.com/tag/ai/")));
        assert!(!is_article_shape(&url("https://example.com/page/2/")));
    }

    #[test]
    fn test_index_path_detection() {
        assert!(is_index_path(&url("https://example.com/tag/ai/")));
        assert!(is_index_path(&url("https://example.com/page/3/")));
        assert!(!is_index_path(&url("https://example.com/my-article/")));
    }

    #[test]
    fn test_static_assets() {
        assert!(is_static_asset(&url("https://example.com/logo.png")));
        assert!(is_static_asset(&url("https://example.com/style.CSS")));
        assert!(is_static_asset(&url("https://example.com/sitemap.xml")));
        assert!(!is_static_asset(&url("https://example.com/my-article/")));
    }
}
