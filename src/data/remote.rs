//! Event API client for restaurant registrations.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::data::feed::decode_feed;
use crate::domain::Registration;

/// Fixed listing parameters: first page, 200 per page, newest first, aggregated.
const QUERY: [(&str, &str); 4] = [
    ("page", "1"),
    ("perPage", "200"),
    ("order", "created_desc"),
    ("agg", "true"),
];

/// Source of registrations fetched from somewhere other than the cache.
pub trait Fetch {
    /// Never fails: errors are logged and produce an empty list.
    fn fetch(&self) -> Vec<Registration>;
}

/// Why a fetch produced no data. Only ever logged.
#[derive(Debug)]
enum FetchError {
    Request(reqwest::Error),
    Status(StatusCode),
    Body(reqwest::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "Registrations request failed: {e}"),
            FetchError::Status(status) => write!(f, "Registrations request failed with status {status}."),
            FetchError::Body(e) => write!(f, "Failed to parse registrations response: {e}"),
        }
    }
}

pub struct RegistrationClient {
    client: Client,
    url: String,
}

impl RegistrationClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    fn try_fetch(&self) -> Result<Vec<Registration>, FetchError> {
        let resp = self
            .client
            .get(&self.url)
            .query(&QUERY)
            .send()
            .map_err(FetchError::Request)?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }

        let body: Value = resp.json().map_err(FetchError::Body)?;

        Ok(decode_feed(&body))
    }
}

impl Fetch for RegistrationClient {
    fn fetch(&self) -> Vec<Registration> {
        match self.try_fetch() {
            Ok(regs) => {
                debug!(url = %self.url, count = regs.len(), "fetched registrations");
                regs
            }
            Err(e) => {
                error!(url = %self.url, "{e}");
                Vec::new()
            }
        }
    }
}
