//! HTML parser for search result pages
//!
//! A results page lists each posting as an `<li class="result-row">`. This
//! module turns a parsed document into those listing nodes and reads the
//! posting time used by the window filter.

use crate::scrape::selector;
use crate::window::parse_custom_datetime;
use crate::{RelayError, Result};
use chrono::NaiveDateTime;
use scraper::{ElementRef, Html};

/// Returns every listing node in the document, in page order
///
/// An empty or non-listing document yields an empty list.
///
/// # Example
///
/// ```
/// use listing_relay::scrape::parse_listings;
/// use scraper::Html;
///
/// let document = Html::parse_document(r#"<ul><li class="result-row"></li></ul>"#);
/// assert_eq!(parse_listings(&document).unwrap().len(), 1);
/// ```
pub fn parse_listings(document: &Html) -> Result<Vec<ElementRef<'_>>> {
    let row_selector = selector("li.result-row")?;
    Ok(document.select(&row_selector).collect())
}

/// Reads and parses the posting time of a listing
///
/// The timestamp comes from the `datetime` attribute of the first `<time>`
/// element inside the listing.
///
/// # Returns
///
/// * `Ok(NaiveDateTime)` - The posting time
/// * `Err(RelayError::Lookup)` - The listing has no `<time datetime>`
/// * `Err(RelayError::Format)` - The attribute is not `YYYY-MM-DD HH:MM`
pub fn listing_posted_at(listing: &ElementRef<'_>) -> Result<NaiveDateTime> {
    let time_selector = selector("time")?;

    let datetime = listing
        .select(&time_selector)
        .next()
        .and_then(|time| time.value().attr("datetime"))
        .ok_or_else(|| RelayError::Lookup("time[datetime]".to_string()))?;

    parse_custom_datetime(datetime)
}
