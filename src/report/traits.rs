//! Error reporter trait and report payload

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Context of one failed HTTP request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// HTTP method of the failed request
    pub method: String,

    /// Requested URL
    pub url: String,

    /// User agent the request was sent with
    pub user_agent: String,

    /// Referer the request was sent with
    pub referrer: String,

    /// Status code, when a response was received at all
    pub response_status_code: Option<u16>,

    /// Human readable failure description
    pub message: String,
}

/// Sink for failure reports
///
/// Reporting never fails from the caller's point of view. Implementations
/// that talk to remote services must log and swallow their own errors.
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    /// Records one failure report
    async fn report(&self, report: &ErrorReport);
}
