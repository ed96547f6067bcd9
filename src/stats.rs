//! Crawl run statistics
//!
//! Counters for everything a run did: pages walked, stubs found, records
//! emitted, and every class of failure. Failures are counted rather than
//! propagated so one bad fetch never takes down the rest of the frontier.

use chrono::{DateTime, Utc};

/// Observable counters for a single crawl run
#[derive(Debug, Clone)]
pub struct CrawlStats {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Listing pages successfully fetched and extracted
    pub listing_pages: u64,

    /// Listing fetches that failed (each halts pagination past it)
    pub listing_failures: u64,

    /// Stub entries discovered across all listing pages
    pub stubs_discovered: u64,

    /// Detail fetches that failed after retries
    pub detail_failures: u64,

    /// Stub or next-page hrefs that could not be resolved to a URL
    pub resolve_failures: u64,

    /// Records handed to the sink
    pub records_emitted: u64,

    /// Records suppressed because their URL was already emitted
    pub duplicates_skipped: u64,
}

impl CrawlStats {
    /// Creates zeroed counters stamped with the current time
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            listing_pages: 0,
            listing_failures: 0,
            stubs_discovered: 0,
            detail_failures: 0,
            resolve_failures: 0,
            records_emitted: 0,
            duplicates_skipped: 0,
        }
    }

    /// Total failed requests across both phases
    pub fn failed_requests(&self) -> u64 {
        self.listing_failures + self.detail_failures
    }

    /// Logs a one-shot summary of the run
    pub fn log_summary(&self) {
        tracing::info!(
            "Crawl started {}: {} listing pages, {} stubs, {} records emitted, \
             {} duplicates skipped, {} failed requests ({} listing / {} detail), \
             {} unresolvable links",
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.listing_pages,
            self.stubs_discovered,
            self.records_emitted,
            self.duplicates_skipped,
            self.failed_requests(),
            self.listing_failures,
            self.detail_failures,
            self.resolve_failures,
        );
    }
}

impl Default for CrawlStats {
    fn default() -> Self {
        Self::new()
    }
}
