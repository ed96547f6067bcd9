//! URL handling for Boardwalk
//!
//! Listing entries and next-page links carry hrefs that may be relative to
//! the page they were found on; this module turns them into absolute URLs.

mod resolve;

pub use resolve::resolve;
