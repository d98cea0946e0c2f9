//! Cross-rate computation.
//!
//! Both legs of a cross rate are quoted against the provider's home
//! currency; dividing the `from` leg by the `to` leg on matching dates
//! yields the derived rate. Pure functions, no I/O.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::errors::ExchangeError;
use crate::models::{RatePoint, RateSeries, SeriesStats};

/// Decimal places kept in the reported average.
const AVG_PRECISION: u32 = 6;

/// Join two rate series by date and divide.
///
/// Inner join: points of `from_series` with no counterpart date in
/// `to_series` are dropped, not treated as errors — the two legs may have
/// different publication calendars, and partial coverage on one leg must
/// not fail the whole request. Output preserves `from_series` order.
///
/// A matched `to` value of exactly zero is corrupt upstream data and
/// yields [`ExchangeError::DivisionByZero`] rather than a thinned or
/// infinite series.
pub fn cross_rate(
    from_series: &[RatePoint],
    to_series: &[RatePoint],
) -> Result<RateSeries, ExchangeError> {
    let to_by_date: HashMap<_, _> = to_series
        .iter()
        .map(|point| (point.date, point.value))
        .collect();

    let mut joined = Vec::with_capacity(from_series.len().min(to_series.len()));
    for point in from_series {
        let Some(divisor) = to_by_date.get(&point.date) else {
            continue;
        };
        if divisor.is_zero() {
            return Err(ExchangeError::DivisionByZero { date: point.date });
        }
        joined.push(RatePoint::new(point.date, point.value / *divisor));
    }

    Ok(joined)
}

/// Summary statistics over a joined series; `None` when it is empty.
///
/// The average is rounded to 6 decimal places (midpoint to even, matching
/// the upstream convention); min and max are the series extrema.
pub fn series_stats(series: &[RatePoint]) -> Option<SeriesStats> {
    let (first, rest) = series.split_first()?;

    let mut min = first.value;
    let mut max = first.value;
    let mut sum = first.value;
    for point in rest {
        min = min.min(point.value);
        max = max.max(point.value);
        sum += point.value;
    }

    let avg = (sum / Decimal::from(series.len() as u64)).round_dp(AVG_PRECISION);
    Some(SeriesStats { min, max, avg })
}
