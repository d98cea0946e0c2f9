//! Provider registry: name to rate source resolution.
//!
//! The set of sources is fixed at construction; lookup is a pure
//! case-insensitive match with a closed failure case for unknown names.

use log::warn;
use std::sync::Arc;

use crate::errors::ExchangeError;
use crate::provider::{NbpRateSource, RateSource};

/// Maps provider names to registered rate sources.
pub struct ProviderRegistry {
    sources: Vec<Arc<dyn RateSource>>,
}

impl ProviderRegistry {
    /// Create a registry over a fixed set of sources.
    pub fn new(sources: Vec<Arc<dyn RateSource>>) -> Self {
        Self { sources }
    }

    /// The default registry, wiring the NBP source.
    pub fn with_defaults() -> Self {
        Self::new(vec![Arc::new(NbpRateSource::new())])
    }

    /// Resolve a provider name, case-insensitively.
    ///
    /// Blank and unknown names both fail with
    /// [`ExchangeError::UnsupportedProvider`].
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn RateSource>, ExchangeError> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Attempted to resolve a blank provider name");
            return Err(ExchangeError::UnsupportedProvider(name.to_string()));
        }

        self.sources
            .iter()
            .find(|source| source.id().eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| {
                warn!("No rate source registered for provider '{}'", name);
                ExchangeError::UnsupportedProvider(name.to_string())
            })
    }

    /// The registered provider ids, in registration order.
    pub fn source_ids(&self) -> Vec<&'static str> {
        self.sources.iter().map(|source| source.id()).collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
