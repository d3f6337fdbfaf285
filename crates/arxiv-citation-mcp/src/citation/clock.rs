//! Time source for styles that stamp an access date.

use chrono::{Local, NaiveDate};

/// Supplies "today" to the renderer.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Access-date format, e.g. `05 March 2024`.
#[must_use]
pub fn format_access_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}
