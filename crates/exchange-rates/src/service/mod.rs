//! Exchange orchestration.
//!
//! `ExchangeService` is the crate's public operation surface: it validates
//! a request before any I/O, resolves the provider and both currency
//! codes, drives the two leg fetches concurrently, and assembles the
//! final cross-rate result.

use log::{debug, info};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::catalog::CurrencyCatalog;
use crate::clock::{Clock, SystemClock};
use crate::cross::{cross_rate, series_stats};
use crate::errors::ExchangeError;
use crate::fetcher::{validate_range, RateSeriesFetcher};
use crate::models::{CrossRateResult, Currency};
use crate::registry::ProviderRegistry;

/// Orchestrates catalog lookups, rate fetches, and cross-rate computation.
pub struct ExchangeService {
    registry: ProviderRegistry,
    catalog: CurrencyCatalog,
    fetcher: RateSeriesFetcher,
    clock: Arc<dyn Clock>,
}

impl ExchangeService {
    /// Create a service over the given registry, using the system clock.
    pub fn new(registry: ProviderRegistry) -> Self {
        Self::with_clock(registry, Arc::new(SystemClock))
    }

    /// Create a service with an explicit clock, for deterministic date
    /// validation.
    pub fn with_clock(registry: ProviderRegistry, clock: Arc<dyn Clock>) -> Self {
        Self {
            registry,
            catalog: CurrencyCatalog::new(),
            fetcher: RateSeriesFetcher::new(clock.clone()),
            clock,
        }
    }

    /// Compute the cross rate between two currencies over a date range.
    ///
    /// Both leg fetches run concurrently; their results are joined by date
    /// and divided, with summary statistics over the joined series. All
    /// validation happens before any upstream call.
    pub async fn cross_rate(
        &self,
        provider: &str,
        from_code: &str,
        to_code: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<CrossRateResult, ExchangeError> {
        debug!(
            "Cross rate requested: {}/{} via {} for {} - {}",
            from_code, to_code, provider, date_from, date_to
        );

        require_identifier(provider, "provider name")?;
        require_identifier(from_code, "from currency code")?;
        require_identifier(to_code, "to currency code")?;
        validate_range(self.clock.today(), date_from, date_to)?;

        let source = self.registry.resolve(provider)?;
        let from_entry = self.catalog.resolve_code(source.as_ref(), from_code).await?;
        let to_entry = self.catalog.resolve_code(source.as_ref(), to_code).await?;

        let (from_series, to_series) = tokio::try_join!(
            self.fetcher
                .fetch(source.as_ref(), &from_entry, date_from, date_to),
            self.fetcher
                .fetch(source.as_ref(), &to_entry, date_from, date_to),
        )?;

        let rates = cross_rate(&from_series, &to_series)?;
        let stats = series_stats(&rates);

        info!(
            "Cross rate {}/{} via {}: {} joined points",
            from_entry.currency.code(),
            to_entry.currency.code(),
            source.id(),
            rates.len()
        );

        Ok(CrossRateResult {
            from: from_entry.currency,
            to: to_entry.currency,
            rates,
            stats,
        })
    }

    /// List the currencies a provider supports, in catalog order.
    pub async fn list_currencies(&self, provider: &str) -> Result<Vec<Currency>, ExchangeError> {
        require_identifier(provider, "provider name")?;

        let source = self.registry.resolve(provider)?;
        let currencies = self.catalog.currencies(source.as_ref()).await?;

        debug!(
            "Listed {} currencies for provider {}",
            currencies.len(),
            source.id()
        );
        Ok(currencies)
    }

    /// The registered provider ids.
    pub fn source_ids(&self) -> Vec<&'static str> {
        self.registry.source_ids()
    }
}

fn require_identifier(value: &str, what: &str) -> Result<(), ExchangeError> {
    if value.trim().is_empty() {
        return Err(ExchangeError::invalid_request(format!(
            "{what} must not be empty"
        )));
    }
    Ok(())
}
