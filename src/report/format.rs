//! Formatted terminal output.
//!
//! Formatting lives here so `app` only decides *what* to print and the exact
//! layout can be tested without spawning the binary.

use chrono::{DateTime, Local};

use crate::domain::{DataSource, FilterConfig};

pub const NO_RESULTS: &str = "No restaurants found matching the given criteria.";

/// Format the full report: selected filters, data source and the suggestions.
pub fn format_report(
    config: &FilterConfig,
    source: DataSource,
    cache_updated: Option<DateTime<Local>>,
    suggestions: &[String],
) -> String {
    let mut out = String::new();

    out.push_str("\nRestaurant Week suggestions:\n");
    out.push_str(&format!("Meal: {}\n", config.meal));
    out.push_str(&format!("Menu types: {}\n", format_menu_types(config)));
    out.push_str(&format!("Data source: {}\n", format_source(source, cache_updated)));
    out.push_str("\nSuggested restaurants:\n");

    if suggestions.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
    } else {
        for (i, line) in suggestions.iter().enumerate() {
            out.push_str(&format!("{}. {line}\n", i + 1));
        }
    }

    out
}

fn format_menu_types(config: &FilterConfig) -> String {
    config
        .menu_types
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_source(source: DataSource, cache_updated: Option<DateTime<Local>>) -> String {
    match (source, cache_updated) {
        (DataSource::Cache, Some(ts)) => format!("{source} (updated {})", ts.format("%Y-%m-%d %H:%M")),
        _ => source.to_string(),
    }
}
