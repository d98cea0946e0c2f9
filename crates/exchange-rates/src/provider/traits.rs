//! Rate source trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

use crate::errors::ExchangeError;
use crate::models::{CatalogEntry, Currency, RateSeries, SourceTable};

/// Trait for exchange rate sources.
///
/// Implement this trait to add support for a new rate provider. The
/// registry matches requests to sources by [`id`](Self::id), and the
/// catalog drives [`fetch_table`](Self::fetch_table) for both upstream
/// tables before appending the synthetic home-currency entry.
///
/// Implementations translate their own "no data for this range" signal
/// into an empty series; only genuine transport or protocol failures
/// surface as errors.
#[async_trait]
pub trait RateSource: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source, e.g. "NBP".
    ///
    /// Matched case-insensitively against caller-supplied provider names.
    fn id(&self) -> &'static str;

    /// The provider's home currency.
    ///
    /// Listed in the catalog as a `Virtual` entry; it trades at 1.0
    /// against itself on every date and needs no upstream call.
    fn home_currency(&self) -> Currency;

    /// How long a fetched currency catalog stays fresh.
    fn catalog_ttl(&self) -> Duration;

    /// Fetch one upstream currency table, flattened into catalog entries
    /// tagged with `table`.
    ///
    /// Calling this with [`SourceTable::Virtual`] is a contract violation
    /// and yields a provider error; the virtual entry is synthesized by
    /// the catalog, not fetched.
    async fn fetch_table(&self, table: SourceTable) -> Result<Vec<CatalogEntry>, ExchangeError>;

    /// Fetch the rate history for one currency over `[date_from, date_to]`,
    /// both bounds inclusive.
    ///
    /// Returns points in ascending date order, preserving upstream
    /// ordering. An upstream "nothing found" response is an empty series,
    /// not an error.
    async fn fetch_rates(
        &self,
        table: SourceTable,
        code: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<RateSeries, ExchangeError>;
}
