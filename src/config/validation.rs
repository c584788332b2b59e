use crate::config::types::RequestTemplate;
use crate::{ConfigError, RelayError};
use regex::Regex;
use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

const SEARCH_URL_PATTERN: &str = r"^https://\w+\.craigslist\.org/search/apa$";

/// Validates the search page URL built from the location argument
///
/// Only `https://<word characters>.craigslist.org/search/apa` is accepted,
/// which rejects locations containing dots, slashes or other punctuation.
///
/// # Example
///
/// ```
/// use listing_relay::config::validate_search_url;
///
/// assert!(validate_search_url("https://vancouver.craigslist.org/search/apa").is_ok());
/// assert!(validate_search_url("https://comox.valley.craigslist.org/search/apa").is_err());
/// ```
pub fn validate_search_url(url_to_check: &str) -> Result<(), RelayError> {
    let pattern = Regex::new(SEARCH_URL_PATTERN)
        .map_err(|e| RelayError::Validation(format!("invalid search URL pattern: {}", e)))?;

    if !pattern.is_match(url_to_check) {
        return Err(RelayError::Validation(format!(
            "{} is not valid. Please check formatting of location argument.",
            url_to_check
        )));
    }

    Ok(())
}

/// Validates an endpoint URL given on the command line
pub fn validate_endpoint(name: &str, endpoint: &str) -> Result<(), ConfigError> {
    let url = Url::parse(endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, endpoint, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            name, endpoint
        )));
    }

    Ok(())
}

/// Validates a request template
pub fn validate_template(template: &RequestTemplate) -> Result<(), ConfigError> {
    for (name, value) in &template.headers {
        HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            ConfigError::Validation(format!("Invalid header name '{}'", name))
        })?;
        HeaderValue::from_str(value).map_err(|_| {
            ConfigError::Validation(format!("Invalid value for header '{}'", name))
        })?;
    }

    for name in template.params.keys() {
        if name.is_empty() {
            return Err(ConfigError::Validation(
                "Query parameter name cannot be empty".to_string(),
            ));
        }
    }

    for agent in &template.user_agents {
        HeaderValue::from_str(agent).map_err(|_| {
            ConfigError::Validation(format!("Invalid user agent '{}'", agent))
        })?;
    }

    Ok(())
}
