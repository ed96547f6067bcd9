//! HTML extraction for the two crawl phases
//!
//! `listing` reads a search-results page into stub entries plus the
//! next-page href; `detail` reads a posting page into its description and
//! attribute fields. Both are best-effort: a missing node degrades to an
//! empty value, never an error.

mod detail;
mod listing;

pub use detail::extract_detail;
pub use listing::{extract_listing, strip_address, ListingEntry, ListingPage};
