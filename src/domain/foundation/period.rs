//! Period value object - a calendar month normalized to its first instant.
//!
//! Sessions are unique per (warehouse, period, count_number). Normalizing
//! every incoming datetime to the first of its month at 00:00:00 UTC means
//! two requests for "February 2025" can never disagree on day, time, or
//! zone and silently create duplicate periods.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, stored as its first instant (day 1, 00:00:00 UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(DateTime<Utc>);

impl Period {
    /// Normalizes any instant to the period (month) it falls in.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        // with_ymd_and_hms is infallible for day 1 at midnight
        Self(
            Utc.with_ymd_and_hms(dt.year(), dt.month(), 1, 0, 0, 0)
                .unwrap(),
        )
    }

    /// Builds a period from a year and 1-based month.
    ///
    /// Returns `None` when the month is out of range.
    pub fn from_year_month(year: i32, month: u32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
            .single()
            .map(Self)
    }

    /// Returns the first instant of the month.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the 1-based calendar month.
    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Error parsing a "YYYY-MM" period string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePeriodError;

impl fmt::Display for ParsePeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected period in YYYY-MM format")
    }
}

impl std::error::Error for ParsePeriodError {}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s.trim().split_once('-').ok_or(ParsePeriodError)?;
        let year: i32 = year.parse().map_err(|_| ParsePeriodError)?;
        let month: u32 = month.parse().map_err(|_| ParsePeriodError)?;
        Period::from_year_month(year, month).ok_or(ParsePeriodError)
    }
}
