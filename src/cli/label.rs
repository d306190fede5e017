//! Label CLI command

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::format_label_list;
use crate::error::{CardcycleError, CardcycleResult};
use crate::services::{label_transactions, PeriodService};
use crate::storage::Storage;

use super::print_json;

#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Only transactions charged in this month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Only transactions of this payment method (name or ID)
    #[arg(short, long)]
    pub card: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Handle the label command
pub fn handle_label_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    args: LabelArgs,
) -> CardcycleResult<()> {
    let month = args
        .month
        .as_deref()
        .map(|s| PeriodService::new(today).parse(s))
        .transpose()?;

    let ledger = storage.ledger.snapshot()?;
    let view = ledger.view();
    let card_id = match args.card.as_deref() {
        Some(identifier) => Some(
            view.find_method(identifier)
                .ok_or_else(|| CardcycleError::payment_method_not_found(identifier))?
                .id,
        ),
        None => None,
    };

    let labels: Vec<_> = label_transactions(&view)
        .into_iter()
        .filter(|l| month.map_or(true, |m| l.billing_month == m))
        .filter(|l| card_id.map_or(true, |id| l.payment_method_id == Some(id)))
        .collect();

    if args.json {
        print_json(&labels)
    } else {
        println!("{}", format_label_list(&labels, &settings.currency_symbol));
        Ok(())
    }
}
