//! HTTP forwarder

use crate::forward::{ForwardResponse, Forwarder, Pause};
use crate::scrape::ExtractedRecord;
use crate::{RelayError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Forwards records as JSON POST requests to one endpoint
pub struct HttpForwarder {
    client: Client,
    endpoint: String,
    pause: Box<dyn Pause>,
}

impl HttpForwarder {
    /// Creates a forwarder for `endpoint`, waiting on `pause` before each send
    pub fn new(client: Client, endpoint: impl Into<String>, pause: Box<dyn Pause>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            pause,
        }
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    /// Pauses, then POSTs the record
    ///
    /// # Returns
    ///
    /// * `Ok(ForwardResponse)` - Any HTTP response, including error statuses
    /// * `Err(RelayError::Transport)` - No response was received
    async fn forward(&self, record: &ExtractedRecord) -> Result<ForwardResponse> {
        self.pause.pause().await;

        let transport = |source| RelayError::Transport {
            url: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;

        tracing::debug!("Forwarded {} -> {}", record.data_id, status);

        Ok(ForwardResponse { body, status })
    }
}
