//! `rw-picker` library crate.
//!
//! The binary (`rw`) is a thin wrapper around this library so that:
//!
//! - the pick pipeline is testable without spawning processes
//! - data access (cache, API) sits behind small seams that tests can replace

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod report;
pub mod select;
