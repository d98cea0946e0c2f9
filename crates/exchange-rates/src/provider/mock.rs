//! Scripted rate source for unit tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::errors::ExchangeError;
use crate::models::{CatalogEntry, Currency, RatePoint, RateSeries, SourceTable};
use crate::provider::RateSource;

/// A `RateSource` scripted with fixed tables and rate series, counting
/// upstream calls so tests can assert cache and validation behavior.
#[derive(Debug)]
pub(crate) struct MockRateSource {
    home: Currency,
    ttl: Duration,
    table_delay: Option<Duration>,
    fail_tables: bool,
    tables: HashMap<SourceTable, Vec<CatalogEntry>>,
    rates: HashMap<String, RateSeries>,
    pub table_calls: AtomicUsize,
    pub rate_calls: AtomicUsize,
}

impl MockRateSource {
    pub fn new() -> Self {
        Self {
            home: Currency::from_static("złoty polski", "PLN"),
            ttl: Duration::from_secs(300),
            table_delay: None,
            fail_tables: false,
            tables: HashMap::new(),
            rates: HashMap::new(),
            table_calls: AtomicUsize::new(0),
            rate_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Delay every table fetch, to widen race windows in concurrency tests.
    pub fn with_table_delay(mut self, delay: Duration) -> Self {
        self.table_delay = Some(delay);
        self
    }

    pub fn failing_tables(mut self) -> Self {
        self.fail_tables = true;
        self
    }

    /// Script a currency into a table, with its rate history.
    pub fn with_currency(
        mut self,
        name: &str,
        code: &str,
        table: SourceTable,
        series: RateSeries,
    ) -> Self {
        let currency = Currency::new(name, code).unwrap();
        self.tables
            .entry(table)
            .or_default()
            .push(CatalogEntry::new(currency, table));
        self.rates.insert(code.to_uppercase(), series);
        self
    }

    pub fn table_fetches(&self) -> usize {
        self.table_calls.load(Ordering::SeqCst)
    }

    pub fn rate_fetches(&self) -> usize {
        self.rate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateSource for MockRateSource {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    fn home_currency(&self) -> Currency {
        self.home.clone()
    }

    fn catalog_ttl(&self) -> Duration {
        self.ttl
    }

    async fn fetch_table(&self, table: SourceTable) -> Result<Vec<CatalogEntry>, ExchangeError> {
        self.table_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.table_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_tables {
            return Err(ExchangeError::source_unavailable(
                "MOCK",
                "scripted table failure",
            ));
        }
        Ok(self.tables.get(&table).cloned().unwrap_or_default())
    }

    async fn fetch_rates(
        &self,
        _table: SourceTable,
        code: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<RateSeries, ExchangeError> {
        self.rate_calls.fetch_add(1, Ordering::SeqCst);
        let series = self.rates.get(&code.to_uppercase()).cloned().unwrap_or_default();
        Ok(series
            .into_iter()
            .filter(|point| point.date >= date_from && point.date <= date_to)
            .collect())
    }
}

/// Shorthand for building a scripted series.
pub(crate) fn series(points: &[(NaiveDate, rust_decimal::Decimal)]) -> RateSeries {
    points
        .iter()
        .map(|(date, value)| RatePoint::new(*date, *value))
        .collect()
}
