//! Console report for a picker run.

pub mod format;

pub use format::*;
