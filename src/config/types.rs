use serde::Deserialize;

/// Main configuration structure for Policy-Sift
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub fetch: FetchConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    pub output: OutputConfig,
}

/// The site to crawl and the relevance keywords
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Root URL of the site; crawling never leaves this origin
    pub root: String,

    /// Ordered keyword list; matches are reported in this order
    pub keywords: Vec<String>,
}

/// HTTP fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Fixed pause between successive requests (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("policy-sift/{}", env!("CARGO_PKG_VERSION"))
}

/// Optional crawl bounds; the default is to exhaust the reachable
/// same-origin graph
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitsConfig {
    /// Stop after fetching this many pages
    #[serde(rename = "max-pages")]
    pub max_pages: Option<u64>,

    /// Do not enqueue links discovered deeper than this
    #[serde(rename = "max-depth")]
    pub max_depth: Option<u32>,

    /// Path substrings that are never enqueued
    #[serde(rename = "deny-paths", default)]
    pub deny_paths: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the CSV file holding the matched articles
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}
