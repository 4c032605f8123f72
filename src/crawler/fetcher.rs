//! HTTP fetcher
//!
//! A thin GET-only wrapper around `reqwest`. There is no retry logic: a
//! failed fetch is reported once and the engine permanently skips the URL.
//! Redirects follow the client default policy.

use crate::config::FetchConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the shared HTTP client from the fetch configuration
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body with a single GET request
///
/// Non-2xx statuses and transport failures are classified into
/// [`FetchError`]; the caller decides what a failure means for the crawl.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client.get(url.clone()).send().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(e.to_string())
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(e.to_string())
        }
    })
}
