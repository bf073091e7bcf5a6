//! Application error carrying the process exit code.
//!
//! Only failures that end a run become an `AppError`: rejected input and an
//! unwritable cache. Fetch and cache-read problems are logged where they happen.

use std::fmt;
use std::path::Path;

/// Exit code for rejected command-line input.
pub const EXIT_INVALID_INPUT: u8 = 1;
/// Exit code for a cache file that could not be written.
pub const EXIT_CACHE_WRITE: u8 = 2;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INVALID_INPUT, message)
    }

    pub fn cache_write(path: &Path, cause: impl fmt::Display) -> Self {
        Self::new(
            EXIT_CACHE_WRITE,
            format!("Failed to write cache file '{}': {cause}", path.display()),
        )
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
