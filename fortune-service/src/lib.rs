//! Fortune service for the fortune checker.
//!
//! This crate wires the pure pipeline from `fortune-core` to the outside
//! world: it fetches payloads from the horoscope API, caches normalized
//! fortunes on disk, and decides for every request whether the caller gets a
//! fresh, cached, or fallback result.

pub mod cache;
pub mod fetch;
pub mod options;
pub mod service;
pub mod tracker;

use thiserror::Error;

pub use cache::{CacheEnvelope, CacheStore, FileCacheStore, FortuneCache, MemoryCacheStore};
pub use fetch::{HoroscopeSource, HttpHoroscopeSource};
pub use options::ServiceOptions;
pub use service::{Clock, Delivery, FortuneService, Origin, SystemClock, Trigger};
pub use tracker::{RequestTracker, Ticket};

/// Error type for setting up the fortune service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Could not determine a cache directory")]
    NoCacheDir,
}

/// Type alias for service results
pub type Result<T> = std::result::Result<T, ServiceError>;
