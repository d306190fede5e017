//! Dashboard display formatting
//!
//! Renders cashflow, card performance and billing totals as plain text.

use std::fmt::Write;

use crate::services::{CardPerformance, Dashboard, PerformancePeriod, TierStatus};

use super::report::{double_separator, format_money_colored, format_section};

fn format_tiers(tiers: &[TierStatus], symbol: &str, out: &mut String) {
    for tier in tiers {
        let mark = if tier.achieved { "[x]" } else { "[ ]" };
        let _ = writeln!(
            out,
            "    {} {:>14}  {}",
            mark,
            tier.threshold_amount.format_with_symbol(symbol),
            tier.benefit_desc
        );
    }
}

fn format_period(label: &str, period: &PerformancePeriod, symbol: &str, out: &mut String) {
    let _ = writeln!(
        out,
        "  {} {} ({} .. {}): {} in {} transaction(s)",
        label,
        period.target_month,
        period.window.start,
        period.window.end,
        period.amount.format_with_symbol(symbol),
        period.transactions.len()
    );
    format_tiers(&period.tiers, symbol, out);
    if let Some(remaining) = period.next_tier_remaining {
        let _ = writeln!(out, "    {} to next tier", remaining.format_with_symbol(symbol));
    }
}

/// Format one card's performance block
pub fn format_card_performance(card: &CardPerformance, symbol: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, "{} [{}]", card.card_name, card.payment_method_type);
    if let Some(day) = card.billing_day {
        let _ = write!(out, "  billing day {}", day);
    }
    out.push('\n');

    format_period("Current", &card.current, symbol, &mut out);
    if let Some(date) = card.expected_billing_date {
        let _ = writeln!(out, "    charged on {}", date);
    }
    if let Some(previous) = &card.previous_performance {
        format_period("Pending", previous, symbol, &mut out);
    }
    out
}

/// Format the whole dashboard
pub fn format_dashboard(dashboard: &Dashboard, symbol: &str) -> String {
    let mut out = String::new();
    let title = format!("Dashboard {} (as of {})", dashboard.month, dashboard.today);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", double_separator(title.chars().count()));
    out.push('\n');

    let cashflow = &dashboard.cashflow;
    out.push_str(&format_section("Cashflow"));
    let rows = [
        ("Income", cashflow.income),
        ("Expense", cashflow.expense),
        ("Balance", cashflow.balance),
        ("Carry-over", cashflow.carry_over),
    ];
    for (label, amount) in rows {
        let _ = writeln!(out, "  {:<12}{:>16}", label, amount.format_with_symbol(symbol));
    }
    let _ = writeln!(
        out,
        "  {:<12}{}",
        "Total",
        format_money_colored(cashflow.total_balance, symbol, 16)
    );
    out.push('\n');

    out.push_str(&format_section("Cards"));
    if dashboard.card_performances.is_empty() {
        out.push_str("  No active payment methods.\n");
    }
    for card in &dashboard.card_performances {
        out.push_str(&format_card_performance(card, symbol));
    }
    out.push('\n');

    let billing = &dashboard.billing;
    out.push_str(&format_section("Billing"));
    let _ = writeln!(
        out,
        "  {:<12}{:>16}",
        dashboard.month.to_string(),
        billing.current_month_billing.format_with_symbol(symbol)
    );
    let _ = writeln!(
        out,
        "  {:<12}{:>16}",
        dashboard.month.next().to_string(),
        billing.next_month_billing.format_with_symbol(symbol)
    );
    for card in &billing.cards {
        let _ = writeln!(
            out,
            "    {:<20} this month {:>14}  next month {:>14}",
            card.card_name,
            card.current_month_billing.format_with_symbol(symbol),
            card.next_month_billing.format_with_symbol(symbol)
        );
    }

    out
}
