//! Calendar window engine
//!
//! Pure, timezone-naive date arithmetic over year/month/day triples. Maps a
//! card's configured days to performance windows, billing windows and the
//! month a window's spending is charged in. Every function is total: any
//! integer day, and any month, produces a defined result.

pub mod days;
pub mod window;

pub use days::{
    clamp_day, clamp_day_number, days_in_month, is_leap_year, next_month, parse_day,
    previous_month,
};
pub use window::{
    billing_month_key, billing_window, expected_billing_date, month_range,
    performance_range_label, performance_target_month, performance_window,
    suggested_performance_start_day, DateWindow, PerformanceWindow, DEFAULT_BILLING_DAY,
};
