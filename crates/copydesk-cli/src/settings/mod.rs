//! Persisted CLI settings and the capability gate.

pub mod storage;
mod types;

pub use types::{DEFAULT_API_URL, Settings};
