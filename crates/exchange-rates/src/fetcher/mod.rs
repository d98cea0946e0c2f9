//! Per-currency rate series fetching.
//!
//! Validates the requested date range against the injected clock, applies
//! the virtual-currency shortcut, and otherwise delegates the range query
//! to the rate source.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::clock::Clock;
use crate::errors::ExchangeError;
use crate::models::{CatalogEntry, RatePoint, RateSeries, SourceTable};
use crate::provider::RateSource;

/// Reject inverted ranges and ranges extending past today.
pub(crate) fn validate_range(
    today: NaiveDate,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> Result<(), ExchangeError> {
    if date_from > date_to {
        return Err(ExchangeError::invalid_request(format!(
            "date range is inverted: {date_from} > {date_to}"
        )));
    }
    if date_from > today || date_to > today {
        return Err(ExchangeError::invalid_request(format!(
            "date range extends past today ({today})"
        )));
    }
    Ok(())
}

/// Fetches the ordered rate history for one catalog entry.
pub struct RateSeriesFetcher {
    clock: Arc<dyn Clock>,
}

impl RateSeriesFetcher {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// The rate series for `entry` over `[date_from, date_to]`, inclusive.
    ///
    /// The virtual home currency is synthesized locally: one point per
    /// calendar day, each at 1.0, with no upstream call. An empty upstream
    /// result passes through as an empty series.
    pub async fn fetch(
        &self,
        source: &dyn RateSource,
        entry: &CatalogEntry,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<RateSeries, ExchangeError> {
        validate_range(self.clock.today(), date_from, date_to)?;

        if entry.table == SourceTable::Virtual {
            debug!(
                "Synthesizing unit series for home currency {}",
                entry.currency.code()
            );
            return Ok(unit_series(date_from, date_to));
        }

        source
            .fetch_rates(entry.table, entry.currency.code(), date_from, date_to)
            .await
    }
}

/// One 1.0-valued point per calendar day, ascending, bounds inclusive.
fn unit_series(date_from: NaiveDate, date_to: NaiveDate) -> RateSeries {
    date_from
        .iter_days()
        .take_while(|day| *day <= date_to)
        .map(|day| RatePoint::new(day, Decimal::ONE))
        .collect()
}
