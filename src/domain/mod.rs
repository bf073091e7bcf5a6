//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - registration records as served by the event API (`Registration`, `RegistrationFeed`)
//! - user-facing filter settings (`Meal`, `MenuTypeId`, `FilterConfig`)
//! - where a run's data came from (`DataSource`)

pub mod types;

pub use types::*;
