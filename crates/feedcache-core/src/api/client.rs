//! HTTP client for the remote feed provider.
//!
//! The provider is not a true paginated endpoint: one GET returns the full
//! post collection, and the page window is cut client-side. This caps the
//! feed at the provider's collection size but keeps the remote contract a
//! single request per load.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::models::{FeedItem, RawPost};
use crate::sync::FeedSource;

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Feed API client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
    feed_url: String,
    page_size: usize,
}

impl FeedClient {
    /// Create a client against the default endpoint.
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    /// Create a client for the endpoint and page size in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            feed_url: config.feed_url.clone(),
            page_size: config.page_size,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }
}

impl FeedSource for FeedClient {
    /// Fetch one page of feed items.
    ///
    /// A page past the end of the collection is an empty success, distinct
    /// from a failed request. One attempt per call; retry is the caller's
    /// decision.
    async fn fetch_page(&self, page: u32) -> Result<Vec<FeedItem>> {
        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", self.feed_url))?;

        let response = Self::check_response(response).await?;

        let posts: Vec<RawPost> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", self.feed_url))?;

        let window = page_slice(&posts, page, self.page_size);
        debug!(page, total = posts.len(), count = window.len(), "Fetched feed page");

        Ok(window.iter().map(RawPost::to_feed_item).collect())
    }
}

/// The window `[(page-1)*page_size, page*page_size)` over `records`, clamped
/// to the collection. Page 0 is treated as page 1.
fn page_slice<T>(records: &[T], page: u32, page_size: usize) -> &[T] {
    let start = (page.saturating_sub(1) as usize)
        .saturating_mul(page_size)
        .min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_slice_windows() {
        let records: Vec<i64> = (1..=25).collect();

        assert_eq!(page_slice(&records, 1, 10), &(1..=10).collect::<Vec<_>>()[..]);
        assert_eq!(page_slice(&records, 2, 10), &(11..=20).collect::<Vec<_>>()[..]);
        // Final partial page
        assert_eq!(page_slice(&records, 3, 10), &(21..=25).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn test_page_slice_past_end_is_empty() {
        let records: Vec<i64> = (1..=25).collect();
        assert!(page_slice(&records, 4, 10).is_empty());
        assert!(page_slice(&records, 100, 10).is_empty());
    }

    #[test]
    fn test_page_slice_page_zero_clamps_to_first() {
        let records: Vec<i64> = (1..=5).collect();
        assert_eq!(page_slice(&records, 0, 10), page_slice(&records, 1, 10));
    }

    #[test]
    fn test_page_slice_empty_collection() {
        let records: Vec<i64> = Vec::new();
        assert!(page_slice(&records, 1, 10).is_empty());
    }
}
