//! Crawl coordinator - the two-phase state machine
//!
//! The coordinator drives the whole crawl: it walks listing pages in
//! sequence, spawns one detail fetch per stub, and merges each detail
//! response with its carried stub into an output record. Pagination and
//! detail resolution are independent branches of the same frontier — the
//! detail fetches for page N run while page N+1 is in flight — but listing
//! pages themselves are strictly ordered, since page N+1 is only
//! discoverable from page N's next-link.
//!
//! All frontier bookkeeping happens on the coordinator itself: detail tasks
//! only perform the fetch and hand their outcome back through the task set,
//! so extraction, emission and stats have a single writer.

use crate::config::Config;
use crate::crawler::emitter::Emitter;
use crate::extract::{extract_detail, extract_listing};
use crate::fetch::{CrawlRequest, CrawlResponse, FetchFailure, Fetcher};
use crate::output::RecordSink;
use crate::record::ListingStub;
use crate::stats::CrawlStats;
use crate::url::resolve;
use crate::BoardwalkError;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// What a detail task hands back to the coordinator
type DetailOutcome = Result<CrawlResponse, FetchFailure>;

/// Main crawler coordinator structure
pub struct Coordinator<F: Fetcher + 'static, S: RecordSink> {
    fetcher: Arc<F>,
    emitter: Emitter<S>,
    detail_permits: Arc<Semaphore>,
    details: JoinSet<DetailOutcome>,
    stats: CrawlStats,
}

impl<F, S> Coordinator<F, S>
where
    F: Fetcher + 'static,
    S: RecordSink,
{
    /// Creates a coordinator over a fetch executor and a record sink
    pub fn new(config: &Config, fetcher: F, sink: S) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            emitter: Emitter::new(sink),
            detail_permits: Arc::new(Semaphore::new(
                config.crawler.max_concurrent_details as usize,
            )),
            details: JoinSet::new(),
            stats: CrawlStats::new(),
        }
    }

    /// Runs the crawl from the seed listing URL until the frontier drains
    ///
    /// Terminates when a listing page yields no next-link (or a listing
    /// fetch fails) and every spawned detail fetch has resolved, one way or
    /// the other.
    pub async fn run(mut self, seed: Url) -> Result<CrawlStats, BoardwalkError> {
        tracing::info!("Starting crawl at {}", seed);

        let mut next_listing = Some(seed);

        while let Some(listing_url) = next_listing.take() {
            // Emit details that resolved while the previous page was in
            // flight, so records stream out instead of piling up.
            while let Some(joined) = self.details.try_join_next() {
                self.finish_detail(joined)?;
            }

            next_listing = self.process_listing(listing_url).await?;
        }

        tracing::info!(
            "Pagination complete, draining {} outstanding detail fetches",
            self.details.len()
        );

        while let Some(joined) = self.details.join_next().await {
            self.finish_detail(joined)?;
        }

        self.emitter.finalize()?;
        self.stats.log_summary();

        Ok(self.stats)
    }

    /// Fetches one listing page, spawns its detail fetches, and returns the
    /// next listing URL if one is discoverable
    async fn process_listing(&mut self, url: Url) -> Result<Option<Url>, BoardwalkError> {
        tracing::debug!("Fetching listing page {}", url);

        let response = match self.fetcher.fetch(CrawlRequest::listing(url.clone())).await {
            Ok(response) => response,
            Err(failure) => {
                // Pagination cannot continue past a page we never saw; the
                // already-spawned detail fetches still drain.
                tracing::warn!("Listing fetch failed, halting pagination: {}", failure);
                self.stats.listing_failures += 1;
                return Ok(None);
            }
        };

        let page = extract_listing(&response.body);
        self.stats.listing_pages += 1;
        self.stats.stubs_discovered += page.entries.len() as u64;
        tracing::info!("{}: {} entries", url, page.entries.len());

        for entry in page.entries {
            // Hrefs are resolved against the listing page they came from.
            match resolve(&url, &entry.href) {
                Ok(detail_url) => self.spawn_detail(ListingStub {
                    url: detail_url,
                    title: entry.title,
                    address: entry.address,
                }),
                Err(e) => {
                    tracing::warn!("Skipping entry with unresolvable href {}: {}", entry.href, e);
                    self.stats.resolve_failures += 1;
                }
            }
        }

        match page.next_page {
            Some(href) => match resolve(&url, &href) {
                Ok(next) => Ok(Some(next)),
                Err(e) => {
                    tracing::warn!("Unresolvable next-page href {}: {}", href, e);
                    self.stats.resolve_failures += 1;
                    Ok(None)
                }
            },
            None => {
                tracing::info!("No next-page link on {}, pagination complete", url);
                Ok(None)
            }
        }
    }

    /// Spawns a detail fetch carrying its stub, bounded by the permit pool
    fn spawn_detail(&mut self, stub: ListingStub) {
        let fetcher = Arc::clone(&self.fetcher);
        let permits = Arc::clone(&self.detail_permits);
        let request = CrawlRequest::detail(stub);

        self.details.spawn(async move {
            let _permit = match permits.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    // Semaphore closed: the coordinator is gone and the
                    // fetch is abandoned rather than attempted.
                    return Err(FetchFailure::Network {
                        url: request.url.to_string(),
                        message: "crawl shut down".to_string(),
                    });
                }
            };

            fetcher.fetch(request).await
        });
    }

    /// Handles one completed detail task: extract, merge, emit
    fn finish_detail(
        &mut self,
        joined: Result<DetailOutcome, tokio::task::JoinError>,
    ) -> Result<(), BoardwalkError> {
        match joined {
            Ok(Ok(response)) => match response.carried {
                Some(stub) => {
                    let fields = extract_detail(&response.body);
                    if self.emitter.emit(stub, fields)? {
                        self.stats.records_emitted += 1;
                    } else {
                        self.stats.duplicates_skipped += 1;
                    }
                }
                None => {
                    // The executor broke the carried-metadata contract; the
                    // record cannot be rebuilt from the response alone.
                    tracing::error!(
                        "Detail response for {} came back without its stub",
                        response.url
                    );
                    self.stats.detail_failures += 1;
                }
            },
            Ok(Err(failure)) => {
                tracing::warn!("Detail fetch failed for {}: {}", failure.url(), failure);
                self.stats.detail_failures += 1;
            }
            Err(join_error) => {
                tracing::error!("Detail task aborted: {}", join_error);
                self.stats.detail_failures += 1;
            }
        }

        Ok(())
    }
}
