//! Forwarder and pause traits

use crate::scrape::ExtractedRecord;
use crate::Result;
use async_trait::async_trait;

/// Raw outcome of one forwarding call
///
/// Non-success statuses are recorded here rather than raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardResponse {
    /// Response body text, unparsed
    pub body: String,

    /// HTTP status code
    pub status: u16,
}

impl ForwardResponse {
    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Destination for extracted records
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// Sends one record, returning the endpoint's raw response
    async fn forward(&self, record: &ExtractedRecord) -> Result<ForwardResponse>;
}

/// Delay applied before each forwarding call
#[async_trait]
pub trait Pause: Send + Sync {
    /// Waits before the next send
    async fn pause(&self);
}
