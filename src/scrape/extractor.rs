//! Per-listing field extraction

use crate::scrape::selector;
use crate::{RelayError, Result};
use scraper::ElementRef;
use serde::{Deserialize, Serialize};

/// The metadata forwarded for one listing
///
/// Serializes to `{"href", "data_id", "posted_at", "repost_of"}`, with
/// `repost_of` as `null` when the listing is not a repost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Link to the listing detail page
    pub href: String,

    /// Listing identifier from the title anchor
    pub data_id: String,

    /// Posting time exactly as written in the page
    pub posted_at: String,

    /// Identifier of the original listing when this one is a repost
    pub repost_of: Option<String>,
}

/// Extracts the forwardable fields from one listing node
///
/// # Lookup Rules
///
/// | Field | Source |
/// |-------|--------|
/// | `href` | `a.result-title.hdrlnk[href]` |
/// | `data_id` | `a.result-title.hdrlnk[data-id]` |
/// | `posted_at` | `time.result-date[datetime]` |
/// | `repost_of` | `data-repost-of` on the listing itself (optional) |
///
/// # Returns
///
/// * `Ok(ExtractedRecord)` - All required fields were found
/// * `Err(RelayError::Lookup)` - The title anchor, the date element or one of
///   their required attributes is missing
pub fn extract_record(listing: &ElementRef<'_>) -> Result<ExtractedRecord> {
    let title_selector = selector("a.result-title.hdrlnk")?;
    let date_selector = selector("time.result-date")?;

    let title = listing
        .select(&title_selector)
        .next()
        .ok_or_else(|| RelayError::Lookup("a.result-title.hdrlnk".to_string()))?;
    let date = listing
        .select(&date_selector)
        .next()
        .ok_or_else(|| RelayError::Lookup("time.result-date".to_string()))?;

    Ok(ExtractedRecord {
        href: required_attr(&title, "href")?,
        data_id: required_attr(&title, "data-id")?,
        posted_at: required_attr(&date, "datetime")?,
        repost_of: listing.value().attr("data-repost-of").map(str::to_string),
    })
}

fn required_attr(element: &ElementRef<'_>, name: &str) -> Result<String> {
    element
        .value()
        .attr(name)
        .map(str::to_string)
        .ok_or_else(|| RelayError::Lookup(format!("{}[{}]", element.value().name(), name)))
}
