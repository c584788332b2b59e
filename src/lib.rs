//! Listing-Relay: forwards fresh classifieds listings to a remote endpoint
//!
//! This crate fetches a craigslist apartment search page for one city, keeps
//! the listings posted inside a time window, and POSTs each listing's
//! metadata to a forwarding endpoint with a randomized pause between calls.

pub mod config;
pub mod forward;
pub mod pipeline;
pub mod report;
pub mod scrape;
pub mod window;

use thiserror::Error;

/// Main error type for Listing-Relay operations
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Format(String),

    #[error("Listing is missing expected element: {0}")]
    Lookup(String),

    #[error("HTTP error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid header: {0}")]
    Header(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read template file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in arguments: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Listing-Relay operations
pub type Result<T> = std::result::Result<T, RelayError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{RequestTemplate, RunConfig};
pub use pipeline::Pipeline;
pub use scrape::ExtractedRecord;
pub use window::Window;
