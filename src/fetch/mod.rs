//! Fetch executor for Boardwalk
//!
//! The coordinator never touches HTTP directly: it submits [`CrawlRequest`]s
//! to a [`Fetcher`] and resumes when the matching [`CrawlResponse`] (or a
//! [`FetchFailure`]) comes back. Carried metadata on a request must be
//! returned unmodified on its response; that round trip is the contract that
//! lets the coordinator rebuild a record without re-querying state.
//!
//! [`HttpFetcher`] is the shipped implementation: a reqwest client with a
//! configured user agent, a politeness delay before every request, and
//! bounded retries for transient failures.

mod http;
mod request;
mod traits;

pub use http::{build_http_client, HttpFetcher};
pub use request::{CrawlRequest, CrawlResponse, FetchFailure, Phase};
pub use traits::Fetcher;
