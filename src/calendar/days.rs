//! Day and month arithmetic
//!
//! Configured day numbers may be anything: 0, 45, a float, NaN. Everything
//! here is total and clamps instead of failing.

use crate::models::YearMonth;

pub const FIRST_DAY: u32 = 1;
pub const LAST_POSSIBLE_DAY: u32 = 31;

/// Coerce a configured day to 1..=31
///
/// The value is rounded to the nearest integer before clamping. Non-finite
/// values yield `fallback`, which is clamped the same way.
///
/// ```
/// use cardcycle::calendar::clamp_day;
/// assert_eq!(clamp_day(14.6, 1), 15);
/// assert_eq!(clamp_day(45.0, 1), 31);
/// assert_eq!(clamp_day(f64::NAN, 14), 14);
/// ```
pub fn clamp_day(value: f64, fallback: u32) -> u32 {
    if !value.is_finite() {
        return fallback.clamp(FIRST_DAY, LAST_POSSIBLE_DAY);
    }
    value
        .round()
        .clamp(f64::from(FIRST_DAY), f64::from(LAST_POSSIBLE_DAY)) as u32
}

/// Integer form of [`clamp_day`]
pub fn clamp_day_number(day: i64) -> u32 {
    day.clamp(i64::from(FIRST_DAY), i64::from(LAST_POSSIBLE_DAY)) as u32
}

/// Read a day from user text, falling back when it is not a number
pub fn parse_day(text: &str, fallback: u32) -> u32 {
    let value = text.trim().parse::<f64>().unwrap_or(f64::NAN);
    clamp_day(value, fallback)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Gregorian month length; out-of-range months are normalized first
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if !(1..=12).contains(&month) {
        let normalized = YearMonth::new(year, month);
        return days_in_month(normalized.year(), normalized.month());
    }

    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    let prev = YearMonth::new(year, month).prev();
    (prev.year(), prev.month())
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    let next = YearMonth::new(year, month).next();
    (next.year(), next.month())
}
