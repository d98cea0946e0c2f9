//! NBP (Narodowy Bank Polski) rate source.
//!
//! Fetches currency tables and per-currency rate histories from the NBP
//! public REST API. Table A carries the major (`Primary`) currencies,
//! table B the less-traded (`Secondary`) ones; PLN itself is the home
//! currency and never hits the wire.
//!
//! The API answers 404 when a rate query matches no data in the range,
//! which this source maps to an empty series.

mod models;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::errors::ExchangeError;
use crate::models::{CatalogEntry, Currency, RatePoint, RateSeries, SourceTable};
use crate::provider::{RateSource, SourceConfig};

use models::{NbpRatesDocument, NbpTableDocument, NbpTableRate};

/// Provider ID constant
const PROVIDER_ID: &str = "NBP";

/// Public NBP API root
pub const DEFAULT_BASE_URL: &str = "https://api.nbp.pl";

/// Default catalog freshness window
pub const DEFAULT_CACHE_TTL_MINUTES: u64 = 60;

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const HOME_CURRENCY_NAME: &str = "złoty polski";
const HOME_CURRENCY_CODE: &str = "PLN";

/// NBP rate source.
///
/// # Example
///
/// ```ignore
/// use kantor_exchange_rates::provider::NbpRateSource;
///
/// let source = NbpRateSource::new();
/// ```
#[derive(Debug)]
pub struct NbpRateSource {
    client: Client,
    base_url: String,
    catalog_ttl: Duration,
}

impl NbpRateSource {
    /// Create an NBP source with default configuration.
    pub fn new() -> Self {
        Self::with_config(SourceConfig::default())
    }

    /// Create an NBP source from per-provider settings.
    pub fn with_config(config: SourceConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            catalog_ttl: Duration::from_secs(config.cache_ttl_minutes * 60),
        }
    }

    /// URL path segment for an upstream table.
    ///
    /// `Virtual` has no upstream endpoint; asking for it is a contract
    /// violation by the caller.
    fn table_segment(table: SourceTable) -> Result<&'static str, ExchangeError> {
        match table {
            SourceTable::Primary => Ok("A"),
            SourceTable::Secondary => Ok("B"),
            SourceTable::Virtual => Err(ExchangeError::provider(
                PROVIDER_ID,
                "virtual table has no upstream endpoint",
            )),
        }
    }

    fn entry_from_rate(
        rate: NbpTableRate,
        table: SourceTable,
    ) -> Result<CatalogEntry, ExchangeError> {
        let currency = Currency::new(rate.currency, rate.code).map_err(|e| {
            ExchangeError::source_unavailable(PROVIDER_ID, format!("malformed table entry: {e}"))
        })?;
        Ok(CatalogEntry::new(currency, table))
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, ExchangeError> {
        // NBP answers XML unless JSON is asked for explicitly
        self.client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ExchangeError::source_unavailable(PROVIDER_ID, e))
    }
}

impl Default for NbpRateSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for NbpRateSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn home_currency(&self) -> Currency {
        Currency::from_static(HOME_CURRENCY_NAME, HOME_CURRENCY_CODE)
    }

    fn catalog_ttl(&self) -> Duration {
        self.catalog_ttl
    }

    async fn fetch_table(&self, table: SourceTable) -> Result<Vec<CatalogEntry>, ExchangeError> {
        let segment = Self::table_segment(table)?;
        let url = format!("{}/api/exchangerates/tables/{}/", self.base_url, segment);
        debug!("Fetching NBP currency table {} from {}", segment, url);

        let response = self
            .get(&url)
            .await?
            .error_for_status()
            .map_err(|e| ExchangeError::source_unavailable(PROVIDER_ID, e))?;

        let documents: Vec<NbpTableDocument> = response
            .json()
            .await
            .map_err(|e| ExchangeError::source_unavailable(PROVIDER_ID, e))?;

        let entries = documents
            .into_iter()
            .flat_map(|document| document.rates)
            .map(|rate| Self::entry_from_rate(rate, table))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Fetched {} currencies from NBP table {}", entries.len(), segment);
        Ok(entries)
    }

    async fn fetch_rates(
        &self,
        table: SourceTable,
        code: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<RateSeries, ExchangeError> {
        let segment = Self::table_segment(table)?;
        let url = format!(
            "{}/api/exchangerates/rates/{}/{}/{}/{}/",
            self.base_url,
            segment,
            code,
            date_from.format("%Y-%m-%d"),
            date_to.format("%Y-%m-%d"),
        );
        debug!("Requesting NBP rates: {}", url);

        let response = self.get(&url).await?;

        // "No data for this range" degrades to an empty series
        if response.status() == StatusCode::NOT_FOUND {
            warn!(
                "No NBP rates for {} between {} and {}",
                code, date_from, date_to
            );
            return Ok(RateSeries::new());
        }

        let response = response
            .error_for_status()
            .map_err(|e| ExchangeError::source_unavailable(PROVIDER_ID, e))?;

        let document: NbpRatesDocument = response
            .json()
            .await
            .map_err(|e| ExchangeError::source_unavailable(PROVIDER_ID, e))?;

        Ok(document
            .rates
            .into_iter()
            .map(|point| RatePoint::new(point.effective_date, point.mid))
            .collect())
    }
}
