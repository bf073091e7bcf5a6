//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses and validates CLI arguments
//! - loads settings and sets up logging
//! - runs the cache-or-fetch and pick pipeline
//! - prints the report

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Settings;
use crate::data::RegistrationClient;
use crate::error::AppError;

pub mod pipeline;

const DEFAULT_LOG_FILTER: &str = "rw_picker=warn";

/// Entry point for the `rw` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = Settings::from_env();
    init_logging();

    // Input errors must surface before any cache or network access.
    let config = cli.filter_config()?;
    debug!(?config, ?settings, "starting run");

    let client = RegistrationClient::new(settings.api_url.as_str());
    let output = pipeline::run_picker(&config, &settings, &client)?;

    print!(
        "{}",
        crate::report::format_report(&config, output.source, output.cache_updated, &output.suggestions)
    );

    Ok(())
}

/// Logs go to stderr; stdout carries only the report.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
