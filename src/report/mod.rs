//! Error reporting module
//!
//! Failed search page fetches are not fatal. Instead a structured report is
//! handed to an [`ErrorReporter`] and the run continues with an empty page.
//!
//! Two reporters are provided:
//! - [`LogReporter`]: writes the report as a `tracing` error event
//! - [`HttpReporter`]: POSTs the report as JSON to a collector endpoint

mod http;
mod log;
mod traits;

pub use http::HttpReporter;
pub use log::LogReporter;
pub use traits::{ErrorReport, ErrorReporter};
