//! HTTP fetcher for the search results page
//!
//! This module handles the single GET request of a run, including:
//! - Building the HTTP client
//! - Templating request headers with a rotated user agent
//! - Reporting failures instead of raising them
//!
//! A failed fetch is never fatal. The failure is reported and the caller
//! receives an empty page, which parses into zero listings.

use crate::config::RequestTemplate;
use crate::report::{ErrorReport, ErrorReporter};
use crate::{RelayError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, HOST, REFERER, USER_AGENT};
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;

/// Referer sent with every search request
pub const DEFAULT_REFERER: &str = "https://www.google.com";

/// Builds the HTTP client shared by the fetcher, forwarder and reporter
///
/// The user agent is not set here; it is rotated per request through the
/// templated headers.
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the search request headers
///
/// Starts from the template headers, then sets `Host` to the city
/// subdomain, `Referer` to [`DEFAULT_REFERER`] and `User-Agent` to the
/// given agent.
///
/// # Returns
///
/// * `Ok(HeaderMap)` - The request headers
/// * `Err(RelayError::Header)` - A template header or the location is not a
///   valid header name or value
pub fn build_headers(
    template: &RequestTemplate,
    location: &str,
    user_agent: &str,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    for (name, value) in &template.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| RelayError::Header(format!("invalid header name '{}'", name)))?;
        headers.insert(name, header_value(value)?);
    }

    headers.insert(HOST, header_value(&format!("{}.craigslist.org", location))?);
    headers.insert(REFERER, HeaderValue::from_static(DEFAULT_REFERER));
    headers.insert(USER_AGENT, header_value(user_agent)?);

    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| RelayError::Header(format!("invalid header value '{}'", value)))
}

/// Fetches a page, returning its body or an empty string on failure
///
/// # Failure Handling
///
/// | Condition | Reported status | Result |
/// |-----------|-----------------|--------|
/// | Connection or timeout error | none | `""` |
/// | HTTP 4xx / 5xx | the status code | `""` |
/// | Body could not be read | the status code | `""` |
///
/// Every failure is sent to `reporter` with the request's method, URL,
/// user agent and referer.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page URL
/// * `headers` - Request headers, usually from [`build_headers`]
/// * `params` - Query parameters
/// * `reporter` - Receives a report for any failure
pub async fn fetch_page(
    client: &Client,
    url: &str,
    headers: &HeaderMap,
    params: &BTreeMap<String, String>,
    reporter: &dyn ErrorReporter,
) -> String {
    tracing::debug!("GET {}", url);

    let response = match client
        .get(url)
        .headers(headers.clone())
        .query(params)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            report_failure(reporter, url, headers, None, &e).await;
            return String::new();
        }
    };

    let status = response.status();

    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(e) => {
            report_failure(reporter, url, headers, Some(status.as_u16()), &e).await;
            return String::new();
        }
    };

    match response.text().await {
        Ok(body) => {
            tracing::info!("Fetched {} ({} bytes)", url, body.len());
            body
        }
        Err(e) => {
            report_failure(reporter, url, headers, Some(status.as_u16()), &e).await;
            String::new()
        }
    }
}

async fn report_failure(
    reporter: &dyn ErrorReporter,
    url: &str,
    headers: &HeaderMap,
    status_code: Option<u16>,
    error: &reqwest::Error,
) {
    let header_str = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string()
    };

    let report = ErrorReport {
        method: "GET".to_string(),
        url: url.to_string(),
        user_agent: header_str(USER_AGENT),
        referrer: header_str(REFERER),
        response_status_code: status_code,
        message: error.to_string(),
    };

    tracing::warn!("Fetch of {} failed, continuing with an empty page", url);
    reporter.report(&report).await;
}
