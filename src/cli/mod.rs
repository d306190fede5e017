//! CLI command handlers
//!
//! This module bridges clap argument parsing with the service layer. Every
//! handler receives an explicit `today` so output never depends on when the
//! command was parsed.

pub mod dashboard;
pub mod label;
pub mod trends;
pub mod window;

pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use label::{handle_label_command, LabelArgs};
pub use trends::{handle_trends_command, TrendsArgs};
pub use window::{handle_window_command, WindowArgs};

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{CardcycleError, CardcycleResult};

/// Parse a `--today` override, defaulting to the local date
pub fn resolve_today(today: Option<&str>) -> CardcycleResult<NaiveDate> {
    match today {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            CardcycleError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> CardcycleResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
