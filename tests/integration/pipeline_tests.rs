//! End-to-end pipeline runs against mock servers

use crate::SAMPLE_PAGE;
use async_trait::async_trait;
use listing_relay::config::{RequestTemplate, RunConfig};
use listing_relay::forward::{HttpForwarder, RandomPause};
use listing_relay::pipeline::Pipeline;
use listing_relay::report::{ErrorReport, ErrorReporter};
use listing_relay::scrape::{build_http_client, UserAgentPool, DEFAULT_USER_AGENT};
use listing_relay::window::{parse_custom_datetime, Window};
use listing_relay::{ExtractedRecord, RelayError};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_partial_json, header, headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/search/apa";
const FORWARD_PATH: &str = "/function-name";

#[derive(Default, Clone)]
struct SharedReporter {
    reports: Arc<Mutex<Vec<ErrorReport>>>,
}

#[async_trait]
impl ErrorReporter for SharedReporter {
    async fn report(&self, report: &ErrorReport) {
        self.reports.lock().unwrap().push(report.clone());
    }
}

/// Creates a run configuration pointed at the mock servers
fn create_test_config(search: &MockServer, forward: &MockServer, start: &str) -> RunConfig {
    RunConfig {
        location: "vancouver".to_string(),
        search_url: format!("{}{}", search.uri(), SEARCH_PATH),
        window: Window::new(parse_custom_datetime(start).unwrap(), 1).unwrap(),
        forward_endpoint: format!("{}{}", forward.uri(), FORWARD_PATH),
        error_report_endpoint: None,
        template: RequestTemplate {
            user_agents: vec!["TestAgent/1.0".to_string()],
            ..RequestTemplate::default()
        },
    }
}

fn create_pipeline(config: RunConfig, reporter: SharedReporter) -> Pipeline {
    let client = build_http_client().expect("Failed to build client");
    let forwarder = HttpForwarder::new(
        client.clone(),
        config.forward_endpoint.clone(),
        Box::new(RandomPause::new(0, 0)),
    );
    let user_agents = UserAgentPool::new(config.template.user_agents.clone());

    Pipeline::with_collaborators(
        config,
        client,
        Box::new(user_agents),
        Box::new(reporter),
        Box::new(forwarder),
    )
}

#[tokio::test]
async fn test_full_run_forwards_listings_in_window() {
    let search_server = MockServer::start().await;
    let forward_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(header("user-agent", "TestAgent/1.0"))
        .and(header("referer", "https://www.google.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(SAMPLE_PAGE)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&search_server)
        .await;

    Mock::given(method("POST"))
        .and(path(FORWARD_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_string("\"\""))
        .expect(4)
        .mount(&forward_server)
        .await;

    let reporter = SharedReporter::default();
    let config = create_test_config(&search_server, &forward_server, "2020-05-24 19:00");
    let pipeline = create_pipeline(config, reporter.clone());

    let results = pipeline.run().await.expect("Run failed");

    assert_eq!(results.len(), 4);
    for response in &results {
        assert_eq!((response.body.as_str(), response.status), ("\"\"", 201));
    }
    assert!(reporter.reports.lock().unwrap().is_empty());

    // Records arrive in page order
    let received = forward_server
        .received_requests()
        .await
        .expect("Request recording disabled");
    let ids: Vec<_> = received
        .iter()
        .map(|request| {
            serde_json::from_slice::<ExtractedRecord>(&request.body)
                .expect("Body is not a record")
                .data_id
        })
        .collect();
    assert_eq!(
        ids,
        vec!["7129915588", "7129912740", "7129906321", "7129901002"]
    );
}

#[tokio::test]
async fn test_error_statuses_from_endpoint_are_collected() {
    let search_server = MockServer::start().await;
    let forward_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_PAGE))
        .mount(&search_server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(4)
        .mount(&forward_server)
        .await;

    let config = create_test_config(&search_server, &forward_server, "2020-05-24 19:00");
    let pipeline = create_pipeline(config, SharedReporter::default());

    let results = pipeline.run().await.expect("Run failed");

    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r.status == 429 && r.body == "slow down"));
}

#[tokio::test]
async fn test_fetch_failure_is_reported_and_forwards_nothing() {
    let search_server = MockServer::start().await;
    let forward_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&search_server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&forward_server)
        .await;

    let reporter = SharedReporter::default();
    let config = create_test_config(&search_server, &forward_server, "2020-05-24 19:00");
    let search_url = config.search_url.clone();
    let pipeline = create_pipeline(config, reporter.clone());

    let results = pipeline.run().await.expect("Fetch failure should not abort");
    assert!(results.is_empty());

    let reports = reporter.reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].method, "GET");
    assert_eq!(reports[0].url, search_url);
    assert_eq!(reports[0].user_agent, "TestAgent/1.0");
    assert_eq!(reports[0].referrer, "https://www.google.com");
    assert_eq!(reports[0].response_status_code, Some(503));
}

#[tokio::test]
async fn test_malformed_listing_aborts_before_forwarding() {
    let search_server = MockServer::start().await;
    let forward_server = MockServer::start().await;

    let page = r#"<ul class="rows">
        <li class="result-row" data-pid="1">
            <time class="result-date" datetime="2020-05-24 19:30">May 24</time>
            <a href="https://vancouver.craigslist.org/van/apa/d/ok/1.html" data-id="1" class="result-title hdrlnk">ok</a>
        </li>
        <li class="result-row" data-pid="2">
            <time class="result-date" datetime="2020-05-24 19:20">May 24</time>
        </li>
    </ul>"#;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&search_server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&forward_server)
        .await;

    let config = create_test_config(&search_server, &forward_server, "2020-05-24 19:00");
    let pipeline = create_pipeline(config, SharedReporter::default());

    let result = pipeline.run().await;
    assert!(matches!(result, Err(RelayError::Lookup(_))));
}

#[tokio::test]
async fn test_empty_user_agent_pool_uses_default_agent() {
    let search_server = MockServer::start().await;
    let forward_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(headers(
            "user-agent",
            // The matcher splits header values on commas
            DEFAULT_USER_AGENT.split(',').map(str::trim).collect::<Vec<_>>(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&search_server)
        .await;

    let mut config = create_test_config(&search_server, &forward_server, "2020-05-24 19:00");
    config.template.user_agents.clear();
    let pipeline = create_pipeline(config, SharedReporter::default());

    let results = pipeline.run().await.expect("Run failed");
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_fetch_failure_is_sent_to_error_collector() {
    let search_server = MockServer::start().await;
    let forward_server = MockServer::start().await;
    let collector = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&search_server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&forward_server)
        .await;

    let mut config = create_test_config(&search_server, &forward_server, "2020-05-24 19:00");
    let search_url = config.search_url.clone();

    Mock::given(method("POST"))
        .and(path("/errors"))
        .and(body_partial_json(serde_json::json!({
            "method": "GET",
            "url": search_url,
            "user_agent": "TestAgent/1.0",
            "referrer": "https://www.google.com",
            "response_status_code": 500,
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&collector)
        .await;

    config.error_report_endpoint = Some(format!("{}/errors", collector.uri()));
    let pipeline = Pipeline::new(config).expect("Failed to create pipeline");

    let results = pipeline.run().await.expect("Fetch failure should not abort");
    assert!(results.is_empty());
}
