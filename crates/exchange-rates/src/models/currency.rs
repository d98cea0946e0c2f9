//! Currency value type and catalog entry tagging.

use serde::Serialize;

use crate::errors::ExchangeError;

/// An immutable currency value: a display name plus an ISO-style code.
///
/// Both fields are guaranteed non-empty by construction. Code comparison
/// is case-insensitive via [`code_matches`](Self::code_matches); code
/// uniqueness is a catalog invariant, not enforced here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Currency {
    name: String,
    code: String,
}

impl Currency {
    /// Create a new currency, rejecting blank names or codes.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Result<Self, ExchangeError> {
        let name = name.into();
        let code = code.into();

        if name.trim().is_empty() {
            return Err(ExchangeError::invalid_request("currency name must not be empty"));
        }
        if code.trim().is_empty() {
            return Err(ExchangeError::invalid_request("currency code must not be empty"));
        }

        Ok(Self { name, code })
    }

    /// Infallible constructor for compile-time literals.
    ///
    /// Callers guarantee both literals are non-empty.
    pub(crate) fn from_static(name: &'static str, code: &'static str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
        }
    }

    /// Display name, e.g. "dolar amerykański".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currency code, e.g. "USD".
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Case-insensitive code comparison.
    pub fn code_matches(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }
}

/// Which upstream rate table a catalog entry originated from.
///
/// `Virtual` marks the provider's home currency: it has no upstream table
/// and always trades at 1.0 against itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceTable {
    Primary,
    Secondary,
    Virtual,
}

impl SourceTable {
    /// The tables a catalog refresh fetches from upstream, in order.
    pub const UPSTREAM: [SourceTable; 2] = [SourceTable::Primary, SourceTable::Secondary];
}

/// A currency as listed in a provider's catalog, tagged with its source table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub currency: Currency,
    pub table: SourceTable,
}

impl CatalogEntry {
    pub fn new(currency: Currency, table: SourceTable) -> Self {
        Self { currency, table }
    }

    /// The synthetic entry for a provider's home currency.
    pub fn virtual_home(currency: Currency) -> Self {
        Self::new(currency, SourceTable::Virtual)
    }

    /// Whether this entry is the synthetic home-currency entry.
    pub fn is_virtual(&self) -> bool {
        self.table == SourceTable::Virtual
    }
}
