//! Configuration module for Listing-Relay
//!
//! This module turns the command line arguments into a validated
//! [`RunConfig`], optionally loading a TOML request template that controls
//! the headers, query parameters and user agent pool of the search request.
//!
//! # Example
//!
//! ```no_run
//! use listing_relay::config::{build_run_config, RunArgs};
//!
//! let args = RunArgs {
//!     location: "vancouver".to_string(),
//!     window_datetime_start: "2020-05-24 19:00".to_string(),
//!     window_length_hours: 1,
//!     cloud_function_endpoint: "https://example.com/ingest".to_string(),
//!     templates: None,
//!     error_report_endpoint: None,
//! };
//! let config = build_run_config(&args).unwrap();
//! println!("Searching {}", config.search_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{RequestTemplate, RunArgs, RunConfig};

// Re-export parser and validation functions
pub use parser::{build_run_config, load_template, search_url_for};
pub use validation::validate_search_url;
