//! Trends CLI command

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::format_trends;
use crate::error::{CardcycleError, CardcycleResult};
use crate::services::{monthly_trends, months_available, PeriodService};
use crate::storage::Storage;

use super::print_json;

#[derive(Args, Debug)]
pub struct TrendsArgs {
    /// Last month of the trend (e.g., "2025-03"); defaults to this month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Number of months; defaults to the configured trend length
    #[arg(short = 'n', long)]
    pub months: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Handle the trends command
pub fn handle_trends_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    args: TrendsArgs,
) -> CardcycleResult<()> {
    let periods = PeriodService::new(today);
    let end = match args.month.as_deref() {
        Some(s) => periods.parse(s)?,
        None => periods.current_month(),
    };

    let count = args.months.unwrap_or(settings.trend_months as usize);
    if count == 0 {
        return Err(CardcycleError::Validation(
            "Number of months must be at least 1".to_string(),
        ));
    }
    let available = months_available(end);
    if count > available {
        return Err(CardcycleError::Validation(format!(
            "Number of months must be at most {} for {}",
            available, end
        )));
    }

    let ledger = storage.ledger.snapshot()?;
    let trends = monthly_trends(&ledger.view(), end, count);

    if args.json {
        print_json(&trends)
    } else {
        println!("{}", format_trends(&trends, &settings.currency_symbol));
        Ok(())
    }
}
