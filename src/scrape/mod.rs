//! Scrape module for the search results page
//!
//! This module contains everything between the network and a list of
//! forwardable records:
//! - HTTP fetching with templated headers and error reporting
//! - User agent rotation with a constant fallback
//! - HTML parsing into listing nodes
//! - Per-listing field extraction

mod extractor;
mod fetcher;
mod parser;
mod user_agent;

pub use extractor::{extract_record, ExtractedRecord};
pub use fetcher::{build_headers, build_http_client, fetch_page, DEFAULT_REFERER};
pub use parser::{listing_posted_at, parse_listings};
pub use user_agent::{
    pick_user_agent, UserAgentError, UserAgentPool, UserAgentSource, DEFAULT_USER_AGENT,
};

use scraper::Selector;

use crate::{RelayError, Result};

/// Compiles a CSS selector, turning a syntax error into a lookup failure
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| RelayError::Lookup(format!("invalid selector '{}': {}", css, e)))
}
