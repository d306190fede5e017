//! Calendar month key
//!
//! `YearMonth` is the "YYYY-MM" unit every report is keyed by. Construction
//! normalizes out-of-range months by carrying into the year and clamps the
//! year to 1..=9999, so every value maps to real calendar dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::calendar::days_in_month;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// A calendar month, e.g. "2025-03"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a month key, carrying month overflow into the year
    ///
    /// `YearMonth::new(2025, 13)` is January 2026 and `YearMonth::new(2025, 0)`
    /// is December 2024.
    pub fn new(year: i32, month: u32) -> Self {
        Self::from_month_index(i64::from(year) * 12 + i64::from(month) - 1)
    }

    fn from_month_index(index: i64) -> Self {
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;

        if year < i64::from(MIN_YEAR) {
            Self { year: MIN_YEAR, month: 1 }
        } else if year > i64::from(MAX_YEAR) {
            Self { year: MAX_YEAR, month: 12 }
        } else {
            Self { year: year as i32, month }
        }
    }

    fn month_index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// The month containing a date
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in this month
    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// The date on `day` of this month, clamped to the month's length
    pub fn date_on(&self, day: u32) -> NaiveDate {
        let day = day.clamp(1, self.days());
        NaiveDate::from_ymd_opt(self.year, self.month, day).unwrap_or(NaiveDate::MIN)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.date_on(1)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.date_on(self.days())
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    pub fn next(&self) -> Self {
        Self::from_month_index(self.month_index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_month_index(self.month_index() - 1)
    }

    /// Shift by a signed number of months
    pub fn offset(&self, months: i64) -> Self {
        Self::from_month_index(self.month_index().saturating_add(months))
    }

    /// Parse a strict "YYYY-MM" key
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .filter(|(y, m)| y.len() == 4 && m.len() == 2)
            .filter(|(y, m)| y.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()))
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        if year < MIN_YEAR {
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}
