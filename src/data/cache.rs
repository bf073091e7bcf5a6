//! Local JSON snapshot of the last remote fetch.
//!
//! The file holds a single `{ "result": [...] }` document and is overwritten in
//! full on every fetch. Reads never fail: any problem is logged and the caller
//! sees an empty list.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::{debug, error};

use crate::data::feed::decode_feed;
use crate::domain::{Registration, RegistrationFeed};
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether anything is present and accessible at the cache path.
    ///
    /// A directory counts as present; reading it then fails and yields an empty list.
    pub fn exists(&self) -> bool {
        fs::metadata(&self.path).is_ok()
    }

    pub fn read(&self) -> Vec<Registration> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                error!(path = %self.path.display(), "failed to read cache file: {e}");
                return Vec::new();
            }
        };

        let doc: Value = match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                error!(path = %self.path.display(), "failed to parse cache file: {e}");
                return Vec::new();
            }
        };

        let regs = decode_feed(&doc);
        debug!(path = %self.path.display(), count = regs.len(), "loaded registrations from cache");
        regs
    }

    /// Overwrite the cache file with `feed`.
    pub fn write(&self, feed: &RegistrationFeed) -> Result<(), AppError> {
        let json = serde_json::to_string(feed)
            .map_err(|e| AppError::cache_write(&self.path, format!("serialization failed: {e}")))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::cache_write(&self.path, format!("cannot create '{}': {e}", parent.display()))
            })?;
        }

        fs::write(&self.path, json).map_err(|e| AppError::cache_write(&self.path, e))?;

        debug!(path = %self.path.display(), count = feed.result.len(), "wrote cache file");
        Ok(())
    }

    /// Last modification time of the cache file, if readable.
    pub fn modified(&self) -> Option<DateTime<Local>> {
        let time = fs::metadata(&self.path).and_then(|m| m.modified()).ok()?;
        Some(DateTime::<Local>::from(time))
    }
}
