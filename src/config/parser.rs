use crate::config::types::{RequestTemplate, RunArgs, RunConfig};
use crate::config::validation::{validate_endpoint, validate_search_url, validate_template};
use crate::window::{parse_custom_datetime, Window};
use crate::{ConfigResult, Result};
use std::path::Path;

/// Loads and validates a request template file
///
/// Missing sections fall back to the built-in defaults.
///
/// # Arguments
///
/// * `path` - Path to the TOML template file
///
/// # Returns
///
/// * `Ok(RequestTemplate)` - Successfully loaded and validated template
/// * `Err(ConfigError)` - Failed to read, parse, or validate the template
pub fn load_template(path: &Path) -> ConfigResult<RequestTemplate> {
    let content = std::fs::read_to_string(path)?;
    let template: RequestTemplate = toml::from_str(&content)?;
    validate_template(&template)?;
    Ok(template)
}

/// Returns the search results URL for a city subdomain
pub fn search_url_for(location: &str) -> String {
    format!("https://{}.craigslist.org/search/apa", location)
}

/// Builds a validated run configuration from raw arguments
///
/// Validation happens before any network I/O, in this order: window start
/// format, window length, search URL, endpoints, request template.
pub fn build_run_config(args: &RunArgs) -> Result<RunConfig> {
    let start = parse_custom_datetime(&args.window_datetime_start)?;
    let window = Window::new(start, args.window_length_hours)?;

    let search_url = search_url_for(&args.location);
    validate_search_url(&search_url)?;

    validate_endpoint("cloud_function_endpoint", &args.cloud_function_endpoint)?;
    if let Some(endpoint) = &args.error_report_endpoint {
        validate_endpoint("error_report_endpoint", endpoint)?;
    }

    let template = match &args.templates {
        Some(path) => {
            tracing::info!("Loading request template from: {}", path.display());
            load_template(path)?
        }
        None => RequestTemplate::default(),
    };

    Ok(RunConfig {
        location: args.location.clone(),
        search_url,
        window,
        forward_endpoint: args.cloud_function_endpoint.clone(),
        error_report_endpoint: args.error_report_endpoint.clone(),
        template,
    })
}
