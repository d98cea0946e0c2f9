//! TTL-cached currency catalog with single-flight refresh.
//!
//! One snapshot is held per source id. Reads clone an `Arc` under a short
//! read guard; a refresh takes a per-source mutex so that N concurrent
//! misses collapse into one upstream fetch. Snapshots are immutable and
//! replaced wholesale; the TTL is a strict cutoff, never served stale.

use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

use crate::errors::ExchangeError;
use crate::models::{CatalogEntry, Currency, SourceTable};
use crate::provider::RateSource;

struct Snapshot {
    entries: Arc<[CatalogEntry]>,
    fetched_at: Instant,
}

impl Snapshot {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Cached currency catalogs, one snapshot per rate source.
#[derive(Default)]
pub struct CurrencyCatalog {
    snapshots: RwLock<HashMap<&'static str, Snapshot>>,
    refresh_locks: Mutex<HashMap<&'static str, Arc<Mutex<()>>>>,
}

impl CurrencyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog entries for `source`, refreshed from upstream when the
    /// cached snapshot is missing or expired.
    ///
    /// Entry order is upstream insertion order (primary table, then
    /// secondary), with the synthetic home-currency entry appended last.
    /// A failed or cancelled refresh publishes nothing; the previous
    /// snapshot, if any, stays in place (and stays expired).
    pub async fn entries(
        &self,
        source: &dyn RateSource,
    ) -> Result<Arc<[CatalogEntry]>, ExchangeError> {
        let ttl = source.catalog_ttl();

        if let Some(entries) = self.cached(source.id(), ttl).await {
            debug!("Catalog cache hit for source {}", source.id());
            return Ok(entries);
        }

        let refresh_lock = {
            let mut locks = self.refresh_locks.lock().await;
            locks
                .entry(source.id())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        let _guard = refresh_lock.lock().await;

        // Another caller may have refreshed while we waited for the lock
        if let Some(entries) = self.cached(source.id(), ttl).await {
            debug!("Catalog refreshed concurrently for source {}", source.id());
            return Ok(entries);
        }

        let entries = self.refresh(source).await?;
        info!(
            "Cached {} currencies for source {} (ttl {:?})",
            entries.len(),
            source.id(),
            ttl
        );
        Ok(entries)
    }

    /// The currencies for `source`, in catalog entry order.
    pub async fn currencies(&self, source: &dyn RateSource) -> Result<Vec<Currency>, ExchangeError> {
        let entries = self.entries(source).await?;
        Ok(entries.iter().map(|entry| entry.currency.clone()).collect())
    }

    /// The catalog entry whose currency code matches `code`, case-insensitively.
    pub async fn resolve_code(
        &self,
        source: &dyn RateSource,
        code: &str,
    ) -> Result<CatalogEntry, ExchangeError> {
        let entries = self.entries(source).await?;
        entries
            .iter()
            .find(|entry| entry.currency.code_matches(code))
            .cloned()
            .ok_or_else(|| ExchangeError::UnknownCurrency(code.trim().to_string()))
    }

    async fn cached(&self, source_id: &str, ttl: Duration) -> Option<Arc<[CatalogEntry]>> {
        let snapshots = self.snapshots.read().await;
        snapshots
            .get(source_id)
            .filter(|snapshot| snapshot.is_fresh(ttl))
            .map(|snapshot| snapshot.entries.clone())
    }

    async fn refresh(&self, source: &dyn RateSource) -> Result<Arc<[CatalogEntry]>, ExchangeError> {
        debug!("Refreshing currency catalog for source {}", source.id());

        let mut entries = Vec::new();
        for table in SourceTable::UPSTREAM {
            entries.extend(source.fetch_table(table).await?);
        }
        entries.push(CatalogEntry::virtual_home(source.home_currency()));

        let entries: Arc<[CatalogEntry]> = Arc::from(entries);
        let mut snapshots = self.snapshots.write().await;
        snapshots.insert(
            source.id(),
            Snapshot {
                entries: entries.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(entries)
    }
}
