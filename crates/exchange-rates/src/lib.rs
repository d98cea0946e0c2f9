//! Kantor Exchange Rates Crate
//!
//! This crate retrieves currency exchange-rate time series from national-bank
//! rate providers, caches each provider's currency catalog, and computes
//! derived cross rates between arbitrary currency pairs.
//!
//! # Overview
//!
//! The crate supports:
//! - A registry of named rate sources (NBP out of the box)
//! - TTL-cached currency catalogs with single-flight refresh
//! - Per-currency rate histories over a date range, with a synthetic
//!   home-currency shortcut
//! - Date-aligned cross-rate computation with summary statistics
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  ExchangeService | --> | ProviderRegistry |  (name -> source)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! | CurrencyCatalog  | --> |    RateSource    |  (NBP, ...)
//! +------------------+     +------------------+
//!          |                        ^
//!          v                        |
//! +-------------------+            |
//! | RateSeriesFetcher | -----------+
//! +-------------------+
//!          |
//!          v
//! +------------------+
//! |    cross_rate    |  (join + divide + stats)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Currency`] - Immutable currency value (name + code)
//! - [`CatalogEntry`] - Currency tagged with its upstream table
//! - [`RatePoint`] / [`RateSeries`] - Ordered rate history
//! - [`CrossRateResult`] - Joined cross-rate series with aggregates
//! - [`ExchangeError`] - Error taxonomy with [`FaultClass`] classification

pub mod catalog;
pub mod clock;
pub mod cross;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod provider;
pub mod registry;
pub mod service;

// Re-export all public types from models
pub use models::{CatalogEntry, CrossRateResult, Currency, RatePoint, RateSeries, SeriesStats, SourceTable};

// Re-export the operational surface
pub use catalog::CurrencyCatalog;
pub use clock::{Clock, SystemClock};
pub use cross::{cross_rate, series_stats};
pub use errors::{ExchangeError, FaultClass};
pub use fetcher::RateSeriesFetcher;
pub use provider::{NbpRateSource, RateSource, SourceConfig};
pub use registry::ProviderRegistry;
pub use service::ExchangeService;
