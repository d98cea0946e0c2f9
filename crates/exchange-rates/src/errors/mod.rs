//! Error types and fault classification for the exchange rate crate.
//!
//! This module provides:
//! - [`ExchangeError`]: The main error enum for all exchange rate operations
//! - [`FaultClass`]: Classification for mapping errors at the boundary layer

mod fault;

pub use fault::FaultClass;

use chrono::NaiveDate;
use std::fmt::Display;
use thiserror::Error;

/// Errors that can occur during exchange rate operations.
///
/// Each variant is classified into a [`FaultClass`] via the
/// [`fault_class`](Self::fault_class) method, which tells the boundary layer
/// whether it is looking at a caller error, a missing resource, or a
/// dependency failure.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The request itself is malformed: missing identifiers, an inverted
    /// date range, or a range extending past today. Never retried.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The provider name is not registered. A not-found condition.
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// The currency code is absent from the resolved provider's catalog.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Upstream transport or protocol failure: timeout, unexpected status,
    /// malformed payload. Not retried by the core; the caller may retry.
    #[error("Source unavailable: {provider} - {message}")]
    SourceUnavailable {
        /// The provider whose upstream failed
        provider: String,
        /// Diagnostic message retaining the original cause
        message: String,
    },

    /// The `to` leg's rate was exactly zero on a matched date, so the
    /// cross rate is undefined there.
    #[error("Division by zero computing cross rate on {date}")]
    DivisionByZero {
        /// The date carrying the zero divisor
        date: NaiveDate,
    },

    /// A provider contract violation or otherwise unexpected failure.
    /// Propagated unchanged, never silently swallowed.
    #[error("Provider error: {provider} - {message}")]
    Provider {
        /// The provider that misbehaved
        provider: String,
        /// What went wrong
        message: String,
    },
}

impl ExchangeError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn source_unavailable(provider: impl Into<String>, cause: impl Display) -> Self {
        Self::SourceUnavailable {
            provider: provider.into(),
            message: cause.to_string(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Returns the fault classification for this error.
    ///
    /// - [`FaultClass::CallerError`]: the request was wrong, retrying the
    ///   same request cannot succeed
    /// - [`FaultClass::NotFound`]: the named resource does not exist
    /// - [`FaultClass::Dependency`]: an upstream dependency is down, the
    ///   caller may retry later
    /// - [`FaultClass::Internal`]: unexpected, surfaced for diagnostics
    pub fn fault_class(&self) -> FaultClass {
        match self {
            Self::InvalidRequest(_) | Self::UnknownCurrency(_) | Self::DivisionByZero { .. } => {
                FaultClass::CallerError
            }
            Self::UnsupportedProvider(_) => FaultClass::NotFound,
            Self::SourceUnavailable { .. } => FaultClass::Dependency,
            Self::Provider { .. } => FaultClass::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_is_caller_error() {
        let error = ExchangeError::invalid_request("Wrong dates");
        assert_eq!(error.fault_class(), FaultClass::CallerError);
    }

    #[test]
    fn test_unknown_currency_is_caller_error() {
        let error = ExchangeError::UnknownCurrency("ZZZ".to_string());
        assert_eq!(error.fault_class(), FaultClass::CallerError);
    }

    #[test]
    fn test_unsupported_provider_is_not_found() {
        let error = ExchangeError::UnsupportedProvider("unknown-bank".to_string());
        assert_eq!(error.fault_class(), FaultClass::NotFound);
    }

    #[test]
    fn test_source_unavailable_is_dependency() {
        let error = ExchangeError::source_unavailable("NBP", "connection refused");
        assert_eq!(error.fault_class(), FaultClass::Dependency);
    }

    #[test]
    fn test_division_by_zero_is_caller_error() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let error = ExchangeError::DivisionByZero { date };
        assert_eq!(error.fault_class(), FaultClass::CallerError);
    }

    #[test]
    fn test_provider_error_is_internal() {
        let error = ExchangeError::provider("NBP", "virtual table has no upstream endpoint");
        assert_eq!(error.fault_class(), FaultClass::Internal);
    }

    #[test]
    fn test_error_display() {
        let error = ExchangeError::UnknownCurrency("ZZZ".to_string());
        assert_eq!(format!("{}", error), "Unknown currency code: ZZZ");

        let error = ExchangeError::source_unavailable("NBP", "timeout");
        assert_eq!(format!("{}", error), "Source unavailable: NBP - timeout");
    }
}
