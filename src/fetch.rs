//! Concurrent page fetching with per-request deadlines and failure isolation.
//!
//! Every URL is fetched as its own future and the whole set is joined, so
//! one slow or failing page never blocks its siblings. A fetch that times
//! out, fails, or yields no paragraph text resolves to an empty string for
//! that slot only. Output order always matches input order regardless of
//! completion order, so callers can zip results back onto their hits.

use std::time::Duration;

use crate::error::{Result, SearchError};
use crate::extract;

/// Fetch and extract text for every URL, preserving input order.
///
/// The returned vector has exactly the same length as `urls`; slot `i`
/// holds the extracted paragraph text for `urls[i]`, or an empty string
/// if that fetch timed out, failed, returned a non-success status, or
/// produced no extractable text. The call completes once every fetch has
/// settled; there is no overall deadline beyond the per-request one.
pub async fn fetch_all(client: &reqwest::Client, urls: &[String], timeout: Duration) -> Vec<String> {
    let futures: Vec<_> = urls
        .iter()
        .map(|url| fetch_one(client, url, timeout))
        .collect();

    // join_all preserves the order of the input futures, not completion order.
    futures::future::join_all(futures).await
}

/// Fetch one page, resolving every failure mode to an empty string.
async fn fetch_one(client: &reqwest::Client, url: &str, timeout: Duration) -> String {
    match tokio::time::timeout(timeout, fetch_text(client, url)).await {
        Ok(Ok(text)) => text,
        Ok(Err(err)) => {
            tracing::warn!(url, error = %err, "page fetch failed");
            String::new()
        }
        Err(_) => {
            tracing::warn!(url, "page fetch timed out");
            String::new()
        }
    }
}

/// Download a page and extract its paragraph text.
async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("request failed: {e}")))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("status error: {e}")))?;

    let html = response
        .text()
        .await
        .map_err(|e| SearchError::Http(format!("body read failed: {e}")))?;

    Ok(extract::paragraph_text(&html))
}
