//! Pipeline - main run orchestration logic
//!
//! This module wires the run together in strict downstream order:
//! - Fetching the search page with rotated headers
//! - Parsing it into listing nodes
//! - Keeping the listings inside the window
//! - Extracting their records
//! - Forwarding each record, one at a time

use crate::config::RunConfig;
use crate::forward::{ForwardResponse, Forwarder, HttpForwarder, RandomPause};
use crate::report::{ErrorReporter, HttpReporter, LogReporter};
use crate::scrape::{
    build_headers, build_http_client, extract_record, fetch_page, listing_posted_at,
    parse_listings, pick_user_agent, ExtractedRecord, UserAgentPool, UserAgentSource,
};
use crate::window::{filter_in_window, Window};
use crate::Result;
use reqwest::Client;
use scraper::Html;

/// Main pipeline structure
pub struct Pipeline {
    config: RunConfig,
    client: Client,
    user_agents: Box<dyn UserAgentSource>,
    reporter: Box<dyn ErrorReporter>,
    forwarder: Box<dyn Forwarder>,
}

impl Pipeline {
    /// Creates a pipeline with the production collaborators
    ///
    /// * user agents rotate through the template's pool
    /// * errors go to the configured collector, or to the log
    /// * records are POSTed to the forwarding endpoint after a 5-20s pause
    ///
    /// # Returns
    ///
    /// * `Ok(Pipeline)` - Successfully created pipeline
    /// * `Err(RelayError)` - The HTTP client could not be built
    pub fn new(config: RunConfig) -> Result<Self> {
        let client = build_http_client()?;

        let user_agents = Box::new(UserAgentPool::new(config.template.user_agents.clone()));

        let reporter: Box<dyn ErrorReporter> = match &config.error_report_endpoint {
            Some(endpoint) => Box::new(HttpReporter::new(client.clone(), endpoint.clone())),
            None => Box::new(LogReporter),
        };

        let forwarder = Box::new(HttpForwarder::new(
            client.clone(),
            config.forward_endpoint.clone(),
            Box::new(RandomPause::default()),
        ));

        Ok(Self::with_collaborators(
            config,
            client,
            user_agents,
            reporter,
            forwarder,
        ))
    }

    /// Creates a pipeline with caller-supplied collaborators
    pub fn with_collaborators(
        config: RunConfig,
        client: Client,
        user_agents: Box<dyn UserAgentSource>,
        reporter: Box<dyn ErrorReporter>,
        forwarder: Box<dyn Forwarder>,
    ) -> Self {
        Self {
            config,
            client,
            user_agents,
            reporter,
            forwarder,
        }
    }

    /// Runs the pipeline once
    ///
    /// A failed page fetch has already been reported by the time this
    /// returns, and results in zero forwarded records. Any other failure
    /// aborts the run.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ForwardResponse>)` - One response per forwarded record, in page order
    /// * `Err(RelayError)` - A header, timestamp, listing lookup or forwarding failure
    pub async fn run(&self) -> Result<Vec<ForwardResponse>> {
        let user_agent = pick_user_agent(self.user_agents.as_ref());
        let headers = build_headers(&self.config.template, &self.config.location, &user_agent)?;

        let page = fetch_page(
            &self.client,
            &self.config.search_url,
            &headers,
            &self.config.template.params,
            self.reporter.as_ref(),
        )
        .await;

        let records = collect_records(&page, &self.config.window)?;
        tracing::info!(
            "{} listings posted between {} and {}",
            records.len(),
            self.config.window.start,
            self.config.window.end
        );

        let mut results = Vec::with_capacity(records.len());
        for record in &records {
            let response = self.forwarder.forward(record).await?;
            if response.is_success() {
                tracing::info!("Forwarded listing {} ({})", record.data_id, response.status);
            } else {
                tracing::warn!(
                    "Endpoint answered {} for listing {}: {}",
                    response.status,
                    record.data_id,
                    response.body
                );
            }
            results.push(response);
        }

        Ok(results)
    }
}

/// Parses a results page and extracts the records posted inside the window
///
/// Records come back in page order. The parsed document does not outlive
/// this call.
pub fn collect_records(page: &str, window: &Window) -> Result<Vec<ExtractedRecord>> {
    let document = Html::parse_document(page);
    let listings = parse_listings(&document)?;
    tracing::debug!("Parsed {} listings", listings.len());

    let in_window = filter_in_window(listings, window, listing_posted_at)?;

    in_window.iter().map(extract_record).collect()
}

/// Runs a complete relay operation with the production collaborators
pub async fn run_pipeline(config: RunConfig) -> Result<Vec<ForwardResponse>> {
    Pipeline::new(config)?.run().await
}
