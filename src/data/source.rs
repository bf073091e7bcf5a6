//! Cache-or-fetch decision for a single run.

use tracing::info;

use crate::data::cache::CacheStore;
use crate::data::remote::Fetch;
use crate::domain::{DataSource, Registration, RegistrationFeed};
use crate::error::AppError;

/// Registrations for this run and where they came from.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub registrations: Vec<Registration>,
    pub source: DataSource,
}

/// Fetch when there is no cache yet, or when the user asked for fresh data.
pub fn should_fetch(cache_exists: bool, force_refresh: bool) -> bool {
    !cache_exists || force_refresh
}

/// Load registrations from the cache, or fetch them and refresh the cache.
///
/// The fetched list is written back even when it is empty. A failed write is
/// returned as an error.
pub fn load_registrations<F: Fetch + ?Sized>(
    cache: &CacheStore,
    fetcher: &F,
    force_refresh: bool,
) -> Result<Loaded, AppError> {
    let cache_exists = cache.exists();

    if should_fetch(cache_exists, force_refresh) {
        info!(cache_exists, force_refresh, "fetching registrations from the API");
        let feed = RegistrationFeed {
            result: fetcher.fetch(),
        };
        cache.write(&feed)?;
        return Ok(Loaded {
            registrations: feed.result,
            source: DataSource::Remote,
        });
    }

    info!(path = %cache.path().display(), "using cached registrations");
    Ok(Loaded {
        registrations: cache.read(),
        source: DataSource::Cache,
    })
}
