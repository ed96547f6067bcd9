//! Fetch executor trait
//!
//! The narrow contract between the coordinator and whatever performs the
//! actual network retrieval. Transport details — connection pooling,
//! politeness, retries, redirect handling — live behind this seam.

use crate::fetch::{CrawlRequest, CrawlResponse, FetchFailure};
use async_trait::async_trait;

/// Executes crawl requests
///
/// Implementations must eventually resolve or fail every submitted request,
/// and must return the request's carried metadata unmodified on a success
/// response.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches one request, resolving to its response or a failure
    async fn fetch(&self, request: CrawlRequest) -> Result<CrawlResponse, FetchFailure>;
}
