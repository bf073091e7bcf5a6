//! The picker workflow, independent of argument parsing and printing:
//! cache-or-fetch -> filter -> shuffle -> truncate.

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::data::{CacheStore, Fetch, load_registrations};
use crate::domain::{DataSource, FilterConfig};
use crate::error::AppError;
use crate::select::select;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub source: DataSource,
    /// Cache modification time, set only when the data came from the cache.
    pub cache_updated: Option<DateTime<Local>>,
    pub suggestions: Vec<String>,
}

pub fn run_picker<F: Fetch + ?Sized>(
    config: &FilterConfig,
    settings: &Settings,
    fetcher: &F,
) -> Result<RunOutput, AppError> {
    let cache = CacheStore::new(&settings.cache_path);
    let loaded = load_registrations(&cache, fetcher, config.force_refresh)?;

    let cache_updated = match loaded.source {
        DataSource::Cache => cache.modified(),
        DataSource::Remote => None,
    };

    let suggestions = select(&loaded.registrations, config, &settings.link_base_url);

    Ok(RunOutput {
        source: loaded.source,
        cache_updated,
        suggestions,
    })
}
