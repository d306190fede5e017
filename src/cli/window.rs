//! Window CLI command
//!
//! Shows where a card's performance and billing windows fall for a month.

use chrono::NaiveDate;
use clap::Args;

use crate::display::format_card_windows;
use crate::error::{CardcycleError, CardcycleResult};
use crate::services::{card_windows, PeriodService};
use crate::storage::Storage;

use super::print_json;

#[derive(Args, Debug)]
pub struct WindowArgs {
    /// Payment method name or ID
    pub card: String,

    /// Target month (e.g., "2025-03"); defaults to this month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Handle the window command
pub fn handle_window_command(storage: &Storage, today: NaiveDate, args: WindowArgs) -> CardcycleResult<()> {
    let periods = PeriodService::new(today);
    let month = match args.month.as_deref() {
        Some(s) => periods.parse(s)?,
        None => periods.current_month(),
    };

    let ledger = storage.ledger.snapshot()?;
    let card = ledger
        .view()
        .find_method(&args.card)
        .ok_or_else(|| CardcycleError::payment_method_not_found(args.card.as_str()))?;

    let windows = card_windows(card, month);
    if args.json {
        print_json(&windows)
    } else {
        println!("{}", format_card_windows(&windows));
        Ok(())
    }
}
