//! Listing page extraction
//!
//! A listing page is a sequence of result entries plus (on every page but
//! the last) a next-page navigation link. Each entry contributes a raw href,
//! a title and a neighborhood; URL resolution happens upstream against the
//! page the entry was found on.

use scraper::{ElementRef, Html, Selector};

/// Per-result container element on a listing page
const ENTRY_SELECTOR: &str = "p.result-info";

/// Neighborhood node, nested two levels inside the entry
const ADDRESS_SELECTOR: &str = "span.result-meta > span.result-hood";

/// Next-page navigation link
const NEXT_SELECTOR: &str = "a.button.next";

/// One entry on a listing page, fields still raw
///
/// The href may be relative; the address has already had its wrapping
/// delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Raw link target of the entry
    pub href: String,

    /// Link text (empty when absent)
    pub title: String,

    /// Bare neighborhood value (empty when absent)
    pub address: String,
}

/// Everything harvested from one listing page
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    /// Entries in document order
    pub entries: Vec<ListingEntry>,

    /// Raw href of the next-page link; `None` is the pagination
    /// termination signal
    pub next_page: Option<String>,
}

/// Extracts stub entries and the next-page link from a listing page
///
/// Entries are returned in document order. An entry without a link target
/// cannot be followed and is skipped. A missing next-page link — or one
/// with an empty href, which the site emits on its last page — yields
/// `next_page == None`.
pub fn extract_listing(html: &str) -> ListingPage {
    let document = Html::parse_document(html);

    let mut entries = Vec::new();

    if let Ok(entry_selector) = Selector::parse(ENTRY_SELECTOR) {
        for element in document.select(&entry_selector) {
            match extract_entry(&element) {
                Some(entry) => entries.push(entry),
                None => tracing::debug!("Skipping listing entry without a link"),
            }
        }
    }

    ListingPage {
        entries,
        next_page: extract_next_page(&document),
    }
}

/// Extracts a single entry, or `None` if it has no link
fn extract_entry(entry: &ElementRef) -> Option<ListingEntry> {
    let link_selector = Selector::parse("a").ok()?;
    let link = entry.select(&link_selector).next()?;

    let href = link.value().attr("href")?.to_string();
    let title = link.text().collect::<String>().trim().to_string();

    let address = Selector::parse(ADDRESS_SELECTOR)
        .ok()
        .and_then(|selector| {
            entry
                .select(&selector)
                .next()
                .map(|node| strip_address(&node.text().collect::<String>()))
        })
        .unwrap_or_default();

    Some(ListingEntry {
        href,
        title,
        address,
    })
}

/// Extracts the next-page href, treating an empty href as absent
fn extract_next_page(document: &Html) -> Option<String> {
    let selector = Selector::parse(NEXT_SELECTOR).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|node| node.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

/// Strips the wrapping delimiter characters from a raw address
///
/// The site renders neighborhoods wrapped in a single delimiter on each
/// side, e.g. `"(Brooklyn)"`. Surrounding whitespace is trimmed first, then
/// exactly one character is removed from each end. Input shorter than two
/// characters yields the empty string rather than an out-of-bounds slice.
pub fn strip_address(raw: &str) -> String {
    let trimmed = raw.trim();

    let mut chars = trimmed.chars();
    match (chars.next(), chars.next_back()) {
        (Some(_), Some(_)) => chars.as_str().to_string(),
        _ => String::new(),
    }
}
