//! Detail page extraction

use crate::record::DetailFields;
use scraper::{Html, Selector};

/// Posting body container on a detail page
const BODY_SELECTOR: &str = "#postingbody";

/// Attribute-group entries; the first is compensation, the second the
/// employment type
const ATTR_SELECTOR: &str = "p.attrgroup > span";

/// Extracts the description and attribute fields from a detail page
///
/// The description is the concatenation of every text node under the
/// posting body, in document order, with no separator inserted. The
/// attribute group contributes compensation and employment type from its
/// first and second entries. Absence of any node degrades that field to an
/// empty string; this function cannot fail.
pub fn extract_detail(html: &str) -> DetailFields {
    let document = Html::parse_document(html);

    let description = extract_description(&document);
    let (compensation, employment_type) = extract_attributes(&document);

    DetailFields {
        description,
        compensation,
        employment_type,
    }
}

fn extract_description(document: &Html) -> String {
    let selector = match Selector::parse(BODY_SELECTOR) {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    document
        .select(&selector)
        .next()
        .map(|body| body.text().collect::<String>())
        .unwrap_or_default()
}

fn extract_attributes(document: &Html) -> (String, String) {
    let span_selector = match Selector::parse(ATTR_SELECTOR) {
        Ok(s) => s,
        Err(_) => return (String::new(), String::new()),
    };
    let bold_selector = match Selector::parse("b") {
        Ok(s) => s,
        Err(_) => return (String::new(), String::new()),
    };

    let spans: Vec<_> = document.select(&span_selector).collect();

    let entry_value = |index: usize| {
        spans
            .get(index)
            .and_then(|span| span.select(&bold_selector).next())
            .map(|value| value.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    };

    (entry_value(0), entry_value(1))
}
