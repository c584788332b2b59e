use crate::window::Window;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Raw run arguments, as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    /// City subdomain, e.g. "vancouver"
    pub location: String,

    /// Window start in `YYYY-MM-DD HH:MM`
    pub window_datetime_start: String,

    /// Window length in hours
    pub window_length_hours: i64,

    /// Endpoint that receives the extracted records
    pub cloud_function_endpoint: String,

    /// Optional TOML request template file
    pub templates: Option<PathBuf>,

    /// Optional collector that receives error reports over HTTP
    pub error_report_endpoint: Option<String>,
}

/// Validated configuration for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// City subdomain
    pub location: String,

    /// Search results page to fetch
    pub search_url: String,

    /// Posting time window
    pub window: Window,

    /// Endpoint that receives the extracted records
    pub forward_endpoint: String,

    /// Collector for error reports; reports are only logged when absent
    pub error_report_endpoint: Option<String>,

    /// Headers, query parameters and user agents for the search request
    pub template: RequestTemplate,
}

/// Request template for the search page fetch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestTemplate {
    /// User agents to rotate through; an empty list means the default agent
    #[serde(rename = "user-agents", default = "default_user_agents")]
    pub user_agents: Vec<String>,

    /// Base headers; `Host`, `Referer` and `User-Agent` are always overridden
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,

    /// Query parameters appended to the search URL
    #[serde(default = "default_params")]
    pub params: BTreeMap<String, String>,
}

impl Default for RequestTemplate {
    fn default() -> Self {
        Self {
            user_agents: default_user_agents(),
            headers: default_headers(),
            params: default_params(),
        }
    }
}

fn default_user_agents() -> Vec<String> {
    crate::scrape::UserAgentPool::builtin().into_agents()
}

fn default_headers() -> BTreeMap<String, String> {
    [
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
        ("Accept-Language", "en-US,en;q=0.5"),
        ("Cache-Control", "no-cache"),
        ("DNT", "1"),
        ("Upgrade-Insecure-Requests", "1"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_params() -> BTreeMap<String, String> {
    [("sort", "date"), ("availabilityMode", "0")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
