//! Cross-rate result and summary statistics.

use rust_decimal::Decimal;
use serde::Serialize;

use super::currency::Currency;
use super::rate::RateSeries;

/// Summary statistics over a joined cross-rate series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SeriesStats {
    /// Smallest rate in the series.
    pub min: Decimal,

    /// Largest rate in the series.
    pub max: Decimal,

    /// Arithmetic mean, rounded to 6 decimal places.
    pub avg: Decimal,
}

/// The derived cross-rate between two currencies over a date range.
///
/// `stats` is `None` exactly when `rates` is empty: aggregates over an
/// empty series are undefined, and a boundary layer that does not
/// tolerate empty results can reject on that. The value itself is
/// immutable and request-scoped.
#[derive(Clone, Debug, Serialize)]
pub struct CrossRateResult {
    pub from: Currency,
    pub to: Currency,
    pub rates: RateSeries,
    #[serde(flatten)]
    pub stats: Option<SeriesStats>,
}
