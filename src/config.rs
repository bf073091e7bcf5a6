//! Runtime settings: endpoint, cache location and link base.
//!
//! Defaults target the Brasília 2025 edition. Each value can be overridden from
//! the environment (or a `.env` file), which is also how the integration tests
//! point the binary at a temp cache and a local HTTP server.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.maitredigital.com.br/v2/events/256/registrations";
pub const DEFAULT_CACHE_PATH: &str = "./restaurant_week_brasilia_2025.json";
pub const DEFAULT_LINK_BASE_URL: &str = "https://maitredigital.com.br/brasiliarestaurantweek/restaurante";

pub const ENV_API_URL: &str = "RW_API_URL";
pub const ENV_CACHE_PATH: &str = "RW_CACHE_PATH";
pub const ENV_LINK_BASE_URL: &str = "RW_LINK_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Registrations endpoint, without query string.
    pub api_url: String,
    pub cache_path: PathBuf,
    /// Prefix for the per-registration link printed next to each suggestion.
    pub link_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            link_base_url: DEFAULT_LINK_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            api_url: get(ENV_API_URL).unwrap_or(defaults.api_url),
            cache_path: get(ENV_CACHE_PATH).map(PathBuf::from).unwrap_or(defaults.cache_path),
            link_base_url: get(ENV_LINK_BASE_URL)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.link_base_url),
        }
    }
}
