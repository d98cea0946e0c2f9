//! Exchange rate models
//!
//! This module contains the core data types for exchange rate operations:
//! - `currency` - Currency value type, source table tags, catalog entries
//! - `rate` - Rate series points (RatePoint, RateSeries)
//! - `result` - Cross-rate output (CrossRateResult, SeriesStats)

mod currency;
mod rate;
mod result;

pub use currency::{CatalogEntry, Currency, SourceTable};
pub use rate::{RatePoint, RateSeries};
pub use result::{CrossRateResult, SeriesStats};
