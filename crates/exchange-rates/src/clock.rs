//! Injectable clock for date validation.
//!
//! Range validation compares against "today"; injecting the clock keeps
//! that logic deterministic in tests without touching system time.

use chrono::{NaiveDate, Utc};

/// Provides the current calendar date.
pub trait Clock: Send + Sync {
    /// Today's date, UTC calendar.
    fn today(&self) -> NaiveDate;
}

/// The real clock, backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to a fixed date.
#[cfg(test)]
#[derive(Clone, Copy, Debug)]
pub(crate) struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
