//! Rate series data structures.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// A single observed exchange rate on a calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RatePoint {
    /// Effective date of the rate.
    pub date: NaiveDate,

    /// Mid rate against the provider's home currency.
    pub value: Decimal,
}

impl RatePoint {
    pub fn new(date: NaiveDate, value: Decimal) -> Self {
        Self { date, value }
    }
}

/// An ordered rate history: ascending by date, at most one point per date.
///
/// Series are request-scoped values; an empty series is a valid outcome
/// (the upstream had no data for the range), never an error.
pub type RateSeries = Vec<RatePoint>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_point_new() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let point = RatePoint::new(date, dec!(3.9876));
        assert_eq!(point.date, date);
        assert_eq!(point.value, dec!(3.9876));
    }
}
