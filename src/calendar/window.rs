//! Performance and billing windows
//!
//! A card with performance start day S accumulates spending for target month
//! M from day S of M-1 through day S-1 of M. A card with billing day B
//! charges, in month M, the spending from day B of M-1 through day B-1 of M.
//! A start or billing day of 1 collapses to whole calendar months.
//!
//! Day numbers are clamped to each month's length independently at both
//! ends of a window.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::days::{clamp_day_number, FIRST_DAY};
use crate::models::YearMonth;

/// Billing day assumed when suggesting a start day for a card without one
pub const DEFAULT_BILLING_DAY: u32 = 14;

/// An inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Smallest window covering both
    pub fn union(&self, other: &DateWindow) -> DateWindow {
        DateWindow {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// The range during which a card's spending accumulates toward its tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Clamped start day the window was built from
    pub start_day: u32,
}

impl PerformanceWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn as_date_window(&self) -> DateWindow {
        DateWindow::new(self.start, self.end)
    }
}

/// The whole calendar month
pub fn month_range(month: YearMonth) -> DateWindow {
    DateWindow::new(month.first_day(), month.last_day())
}

/// Performance window for target `month`
///
/// ```
/// use cardcycle::calendar::performance_window;
/// use cardcycle::models::YearMonth;
///
/// let w = performance_window(YearMonth::new(2025, 3), 15);
/// assert_eq!(w.start.to_string(), "2025-02-15");
/// assert_eq!(w.end.to_string(), "2025-03-14");
/// ```
pub fn performance_window(month: YearMonth, start_day: i64) -> PerformanceWindow {
    let start_day = clamp_day_number(start_day);

    let window = shifted_window(month, start_day).unwrap_or_else(|| month_range(month));
    PerformanceWindow {
        start: window.start,
        end: window.end,
        start_day,
    }
}

/// Spending covered by the statement charged in `month`
pub fn billing_window(month: YearMonth, billing_day: i64) -> DateWindow {
    let billing_day = clamp_day_number(billing_day);
    shifted_window(month, billing_day).unwrap_or_else(|| month_range(month.prev()))
}

/// Day `day` of the previous month through day `day - 1` of `month`, or
/// `None` when the cutover day is the first of the month or `month` has no
/// representable predecessor
fn shifted_window(month: YearMonth, day: u32) -> Option<DateWindow> {
    let prev = month.prev();
    (day > FIRST_DAY && prev < month)
        .then(|| DateWindow::new(prev.date_on(day), month.date_on(day - 1)))
}

/// Month whose bill includes a performance window ending on `window_end`
///
/// Ending on or after the billing day pushes the charge into the next month.
pub fn billing_month_key(window_end: NaiveDate, billing_day: i64) -> YearMonth {
    let billing_day = clamp_day_number(billing_day);
    let end_month = YearMonth::from_date(window_end);

    if window_end.day() >= billing_day {
        end_month.next()
    } else {
        end_month
    }
}

/// Calendar date the window ending on `window_end` is charged
pub fn expected_billing_date(window_end: NaiveDate, billing_day: i64) -> NaiveDate {
    billing_month_key(window_end, billing_day).date_on(clamp_day_number(billing_day))
}

/// Target month whose performance window contains `date`
pub fn performance_target_month(date: NaiveDate, start_day: i64) -> YearMonth {
    let start_day = clamp_day_number(start_day);
    let month = YearMonth::from_date(date);

    if start_day == FIRST_DAY || date.day() < start_day {
        month
    } else {
        month.next()
    }
}

/// Start day offered by default when a card's billing day is set
///
/// Issuers commonly close performance about two weeks before charging, so
/// the suggestion sits 13 days before the billing day, wrapping into the
/// previous month for early billing days.
pub fn suggested_performance_start_day(billing_day: Option<i64>) -> u32 {
    let day = billing_day.map_or(DEFAULT_BILLING_DAY, clamp_day_number);
    if day >= 14 {
        day - 13
    } else {
        day + 18
    }
}

/// Human-readable description of a performance window shape
pub fn performance_range_label(start_day: i64) -> String {
    match clamp_day_number(start_day) {
        FIRST_DAY => "day 1 to end of month".to_string(),
        day => format!("previous month day {} to this month day {}", day, day - 1),
    }
}
