//! Shared formatting helpers for terminal output

use crate::models::Money;

/// Right-align an amount in `width` columns, colored by sign
pub fn format_money_colored(amount: Money, symbol: &str, width: usize) -> String {
    let text = format!("{:>width$}", amount.format_with_symbol(symbol), width = width);
    if amount.is_expense() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.is_income() {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: Money, max_value: Money, width: usize) -> String {
    if max_value.amount() <= 0 || value.amount() <= 0 {
        return " ".repeat(width);
    }

    let ratio = value.amount() as f64 / max_value.amount() as f64;
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Section title underlined to its own width
pub fn format_section(title: &str) -> String {
    format!("{}\n{}\n", title, separator(title.chars().count()))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}
