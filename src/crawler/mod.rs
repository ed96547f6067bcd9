//! Crawl orchestration
//!
//! This module contains the core crawling logic:
//! - The coordinator that drives the listing/detail state machine
//! - The emitter that merges both phases into output records
//!
//! The pieces it delegates to — fetching, extraction, output — live in
//! their own modules behind narrow seams.

mod coordinator;
mod emitter;

pub use coordinator::Coordinator;
pub use emitter::Emitter;

use crate::config::Config;
use crate::fetch::HttpFetcher;
use crate::output::JsonlSink;
use crate::stats::CrawlStats;
use crate::BoardwalkError;
use std::path::Path;
use url::Url;

/// Runs a complete crawl from configuration
///
/// This is the main entry point for embedding Boardwalk. It will:
/// 1. Parse the seed listing URL
/// 2. Build the HTTP fetch executor
/// 3. Open the JSON Lines sink
/// 4. Walk listing pages and their detail pages until the frontier drains
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlStats)` - Counters for the completed run
/// * `Err(BoardwalkError)` - Setup failed; fetch-level failures are counted
///   in the stats instead
pub async fn crawl(config: Config) -> Result<CrawlStats, BoardwalkError> {
    let seed = Url::parse(&config.crawler.seed_url)?;

    let fetcher = HttpFetcher::new(&config.crawler)?;
    let sink = JsonlSink::create(Path::new(&config.output.records_path))?;

    let coordinator = Coordinator::new(&config, fetcher, sink);
    coordinator.run(seed).await
}
