//! Dashboard CLI command

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::format_dashboard;
use crate::error::CardcycleResult;
use crate::services::{DashboardQuery, DashboardService};
use crate::storage::Storage;

use super::print_json;

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Month to show (e.g., "2025-03", "last", "March 2025"); unrecognized means this month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Leave earlier months out of the balance
    #[arg(long)]
    pub no_carry_over: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    args: DashboardArgs,
) -> CardcycleResult<()> {
    let ledger = storage.ledger.snapshot()?;
    let query = DashboardQuery {
        month: args.month,
        today,
        carry_over_enabled: settings.carry_over_enabled && !args.no_carry_over,
    };

    let dashboard = DashboardService::new(ledger.view()).compute(&query);

    if args.json {
        print_json(&dashboard)
    } else {
        println!("{}", format_dashboard(&dashboard, &settings.currency_symbol));
        Ok(())
    }
}
