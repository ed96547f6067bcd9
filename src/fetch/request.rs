//! Request and response types exchanged with the fetch executor

use crate::record::ListingStub;
use thiserror::Error;
use url::Url;

/// Which half of the crawl a request belongs to
///
/// The coordinator dispatches on this tag when a response arrives: listing
/// responses feed the listing extractor and pagination, detail responses
/// feed the detail extractor and the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A paginated search-results page
    Listing,

    /// A single posting's page
    Detail,
}

/// The unit of work handed to the fetch executor
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    /// Absolute URL to fetch
    pub url: Url,

    /// Crawl phase this request belongs to
    pub phase: Phase,

    /// Stub metadata riding along with a detail request; opaque to the
    /// executor, returned unmodified on the response
    pub carried: Option<ListingStub>,
}

impl CrawlRequest {
    /// Builds a listing-phase request
    pub fn listing(url: Url) -> Self {
        Self {
            url,
            phase: Phase::Listing,
            carried: None,
        }
    }

    /// Builds a detail-phase request carrying the stub that spawned it
    pub fn detail(stub: ListingStub) -> Self {
        Self {
            url: stub.url.clone(),
            phase: Phase::Detail,
            carried: Some(stub),
        }
    }
}

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct CrawlResponse {
    /// Final URL after redirects
    pub url: Url,

    /// HTTP status code
    pub status: u16,

    /// Page body
    pub body: String,

    /// Phase of the originating request
    pub phase: Phase,

    /// Carried metadata from the originating request, unmodified
    pub carried: Option<ListingStub>,
}

/// Why a fetch did not produce a page
///
/// Failures terminate the request's lifecycle: a failed detail fetch emits
/// no record, a failed listing fetch halts pagination past that point. Both
/// are counted, neither stops the rest of the frontier.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("HTTP {status} for {url}")]
    Http { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("Expected HTML from {url}, got {content_type}")]
    ContentMismatch { url: String, content_type: String },
}

impl FetchFailure {
    /// Returns true for transient failures worth another attempt
    ///
    /// Server errors and timeouts retry; client errors and non-HTML
    /// responses will not improve on a second try.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => *status >= 500,
            Self::Timeout { .. } => true,
            Self::Network { .. } => true,
            Self::ContentMismatch { .. } => false,
        }
    }

    /// The URL the failed request targeted
    pub fn url(&self) -> &str {
        match self {
            Self::Http { url, .. }
            | Self::Timeout { url }
            | Self::Network { url, .. }
            | Self::ContentMismatch { url, .. } => url,
        }
    }
}
