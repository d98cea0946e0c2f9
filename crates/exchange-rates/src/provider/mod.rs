//! Rate source abstractions and implementations.
//!
//! This module contains:
//! - The `RateSource` trait that all rate providers implement
//! - `SourceConfig` for per-provider settings
//! - Concrete source implementations (NBP)
//!
//! Sources expose two upstream capabilities: the currency tables backing
//! the catalog, and per-currency rate range queries. Caching, the
//! virtual-currency shortcut, and cross-rate math live above this seam,
//! so a source implementation stays a thin wire adapter.

mod traits;

pub mod nbp;

#[cfg(test)]
pub(crate) mod mock;

pub use nbp::NbpRateSource;
pub use traits::RateSource;

use serde::Deserialize;

/// Per-provider settings, typically loaded from application configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceConfig {
    /// Base URL of the upstream REST API.
    pub base_url: String,

    /// How long a fetched currency catalog stays fresh, in minutes.
    pub cache_ttl_minutes: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: nbp::DEFAULT_BASE_URL.to_string(),
            cache_ttl_minutes: nbp::DEFAULT_CACHE_TTL_MINUTES,
        }
    }
}
