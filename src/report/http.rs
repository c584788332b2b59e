//! Remote error collector

use crate::report::{ErrorReport, ErrorReporter};
use async_trait::async_trait;
use reqwest::Client;

/// Reporter that POSTs each report as JSON to a collector endpoint
///
/// A report that cannot be delivered is logged locally and dropped.
#[derive(Debug, Clone)]
pub struct HttpReporter {
    client: Client,
    endpoint: String,
}

impl HttpReporter {
    /// Creates a reporter sending to `endpoint` through `client`
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ErrorReporter for HttpReporter {
    async fn report(&self, report: &ErrorReport) {
        let result = self
            .client
            .post(&self.endpoint)
            .json(report)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        match result {
            Ok(response) => {
                tracing::debug!(
                    "Delivered error report for {} ({})",
                    report.url,
                    response.status()
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Could not deliver error report to {}: {} (original failure: {})",
                    self.endpoint,
                    e,
                    report.message
                );
            }
        }
    }
}
