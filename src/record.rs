//! Record types for the two crawl phases
//!
//! A listing page yields [`ListingStub`]s, each stub's detail page yields
//! [`DetailFields`], and the two merge into the [`JobRecord`] handed to the
//! output sink.

use serde::Serialize;
use url::Url;

/// Partial record harvested from a listing page entry
///
/// A stub is immutable once created: it rides along with the detail-phase
/// request for its URL and is consumed exactly once when that request
/// resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingStub {
    /// Absolute URL of the posting's detail page
    pub url: Url,

    /// Link text of the entry (empty when absent)
    pub title: String,

    /// Neighborhood with the wrapping delimiters already stripped
    /// (empty when absent)
    pub address: String,
}

/// Fields extracted from a single detail page
///
/// All fields are best-effort: a missing node degrades to an empty string,
/// never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFields {
    /// Concatenated text of the posting body
    pub description: String,

    /// First attribute-group entry (empty when absent)
    pub compensation: String,

    /// Second attribute-group entry (empty when absent)
    pub employment_type: String,
}

/// The merged output record for one job posting
///
/// Serialized field names follow the feed schema consumed downstream:
/// `URL`, `Title`, `Address`, `Compensation`, `Employment Type`,
/// `Description`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JobRecord {
    #[serde(rename = "URL")]
    pub url: String,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "Compensation")]
    pub compensation: String,

    #[serde(rename = "Employment Type")]
    pub employment_type: String,

    #[serde(rename = "Description")]
    pub description: String,
}

impl JobRecord {
    /// Merges a stub and its detail fields into one record
    ///
    /// This is a pure union of the two halves: the stub contributes the URL,
    /// title and address, the detail fetch contributes the rest. No field is
    /// renamed or rewritten.
    pub fn merge(stub: ListingStub, fields: DetailFields) -> Self {
        Self {
            url: stub.url.to_string(),
            title: stub.title,
            address: stub.address,
            compensation: fields.compensation,
            employment_type: fields.employment_type,
            description: fields.description,
        }
    }
}
