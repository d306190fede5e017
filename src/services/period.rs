//! Month period service
//!
//! Resolves user-supplied month strings against an explicit "today".

use crate::error::{CardcycleError, CardcycleResult};
use crate::models::YearMonth;
use chrono::{Datelike, NaiveDate};
use tracing::warn;

/// Service for month period handling
pub struct PeriodService {
    today: NaiveDate,
}

impl PeriodService {
    /// Create a period service anchored at `today`
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// The month containing today
    pub fn current_month(&self) -> YearMonth {
        YearMonth::from_date(self.today)
    }

    /// Parse a month string or fall back to the current month
    ///
    /// Unparseable input is logged and treated as the current month.
    pub fn parse_or_current(&self, month_str: Option<&str>) -> YearMonth {
        match month_str {
            Some(s) => self.parse(s).unwrap_or_else(|err| {
                warn!(input = s, error = %err, "unrecognized month, using current month");
                self.current_month()
            }),
            None => self.current_month(),
        }
    }

    /// Parse a month string
    ///
    /// Formats supported: "2025-01", "January 2025", "Jan", "current",
    /// "last", "next".
    pub fn parse(&self, s: &str) -> CardcycleResult<YearMonth> {
        let s_lower = s.trim().to_lowercase();

        if s_lower == "current" || s_lower == "now" || s_lower == "this" {
            return Ok(self.current_month());
        }

        if s_lower == "last" || s_lower == "previous" || s_lower == "prev" {
            return Ok(self.current_month().prev());
        }

        if s_lower == "next" {
            return Ok(self.current_month().next());
        }

        if let Some(month) = self.parse_month_name(&s_lower) {
            return Ok(month);
        }

        YearMonth::parse(&s_lower)
            .map_err(|_| CardcycleError::Validation(format!("Invalid month format: {}", s)))
    }

    /// Parse month names like "January", "Jan 2025"
    ///
    /// Without a year, a month later than today's resolves to last year.
    fn parse_month_name(&self, s: &str) -> Option<YearMonth> {
        let months = [
            ("january", 1),
            ("jan", 1),
            ("february", 2),
            ("feb", 2),
            ("march", 3),
            ("mar", 3),
            ("april", 4),
            ("apr", 4),
            ("may", 5),
            ("june", 6),
            ("jun", 6),
            ("july", 7),
            ("jul", 7),
            ("august", 8),
            ("aug", 8),
            ("september", 9),
            ("sept", 9),
            ("sep", 9),
            ("october", 10),
            ("oct", 10),
            ("november", 11),
            ("nov", 11),
            ("december", 12),
            ("dec", 12),
        ];

        let (name, month) = months.into_iter().find(|(name, _)| s.starts_with(name))?;
        let rest = s[name.len()..].trim();
        let year = if rest.is_empty() {
            if month > self.today.month() {
                self.today.year() - 1
            } else {
                self.today.year()
            }
        } else {
            rest.parse().ok()?
        };

        Some(YearMonth::new(year, month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PeriodService {
        PeriodService::new(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
    }

    #[test]
    fn test_current_month() {
        assert_eq!(service().current_month(), YearMonth::new(2025, 3));
    }

    #[test]
    fn test_parse_relative() {
        let service = service();
        let current = service.current_month();

        assert_eq!(service.parse("current").unwrap(), current);
        assert_eq!(service.parse("now").unwrap(), current);
        assert_eq!(service.parse("last").unwrap(), current.prev());
        assert_eq!(service.parse("next").unwrap(), current.next());
    }

    #[test]
    fn test_parse_standard() {
        assert_eq!(service().parse("2025-01").unwrap(), YearMonth::new(2025, 1));
        assert_eq!(service().parse(" 2024-12 ").unwrap(), YearMonth::new(2024, 12));
    }

    #[test]
    fn test_parse_month_name() {
        let service = service();

        assert_eq!(service.parse("January 2025").unwrap(), YearMonth::new(2025, 1));
        assert_eq!(service.parse("Mar 2025").unwrap(), YearMonth::new(2025, 3));
        assert_eq!(service.parse("sept 2024").unwrap(), YearMonth::new(2024, 9));
        // later than today's month without a year means last year
        assert_eq!(service.parse("Dec").unwrap(), YearMonth::new(2024, 12));
        assert_eq!(service.parse("feb").unwrap(), YearMonth::new(2025, 2));
    }

    #[test]
    fn test_parse_invalid() {
        let err = service().parse("2025-13").unwrap_err();
        assert!(err.is_validation());
        assert!(service().parse("garbage").is_err());
        assert!(service().parse("2025/03").is_err());
    }

    #[test]
    fn test_parse_or_current_falls_back() {
        let service = service();
        assert_eq!(service.parse_or_current(None), YearMonth::new(2025, 3));
        assert_eq!(service.parse_or_current(Some("bogus")), YearMonth::new(2025, 3));
        assert_eq!(service.parse_or_current(Some("2024-07")), YearMonth::new(2024, 7));
    }
}
