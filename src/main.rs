//! Listing-Relay main entry point
//!
//! This is the command-line interface for the Listing-Relay forwarder.

use clap::Parser;
use listing_relay::config::{build_run_config, RunArgs};
use listing_relay::pipeline::run_pipeline;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Listing-Relay: forwards fresh apartment listings
///
/// Fetches the craigslist apartment search page for a city, keeps the
/// listings posted inside the given window and POSTs each one to the
/// forwarding endpoint, pausing 5 to 20 seconds between calls.
#[derive(Parser, Debug)]
#[command(name = "listing-relay")]
#[command(version)]
#[command(about = "Forwards fresh classifieds listings to an endpoint", long_about = None)]
struct Cli {
    /// City subdomain, e.g. "vancouver"
    #[arg(long = "location")]
    location: String,

    /// Window start, formatted YYYY-MM-DD HH:MM
    #[arg(long = "window_datetime_start", value_name = "YYYY-MM-DD HH:MM")]
    window_datetime_start: String,

    /// Window length in hours
    #[arg(long = "window_length_hours", allow_negative_numbers = true)]
    window_length_hours: i64,

    /// Endpoint that receives each listing as JSON
    #[arg(long = "cloud_function_endpoint", value_name = "URL")]
    cloud_function_endpoint: String,

    /// TOML file overriding request headers, query parameters and user agents
    #[arg(long = "templates", value_name = "PATH")]
    templates: Option<PathBuf>,

    /// Collector that receives fetch error reports as JSON
    #[arg(long = "error_report_endpoint", value_name = "URL")]
    error_report_endpoint: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl From<Cli> for RunArgs {
    fn from(cli: Cli) -> Self {
        RunArgs {
            location: cli.location,
            window_datetime_start: cli.window_datetime_start,
            window_length_hours: cli.window_length_hours,
            cloud_function_endpoint: cli.cloud_function_endpoint,
            templates: cli.templates,
            error_report_endpoint: cli.error_report_endpoint,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let args = RunArgs::from(cli);
    let config = match build_run_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid arguments: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        "Relaying {} listings posted {} to {} to {}",
        config.location,
        config.window.start,
        config.window.end,
        config.forward_endpoint
    );

    match run_pipeline(config).await {
        Ok(results) => {
            tracing::info!("Run completed, {} listings forwarded", results.len());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("listing_relay=info,warn"),
            1 => EnvFilter::new("listing_relay=debug,info"),
            2 => EnvFilter::new("listing_relay=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
