//! Registration data access: cache file, remote API and the choice between them.

pub mod cache;
pub mod feed;
pub mod remote;
pub mod source;

pub use cache::CacheStore;
pub use remote::{Fetch, RegistrationClient};
pub use source::{Loaded, load_registrations};
