//! Transaction billing label display

use crate::services::TransactionBillingLabel;

/// Format labelled transactions as a table
pub fn format_label_list(labels: &[TransactionBillingLabel], symbol: &str) -> String {
    if labels.is_empty() {
        return "No transactions found.".to_string();
    }

    let method_width = labels
        .iter()
        .map(|l| l.payment_method_name.as_deref().unwrap_or("-").chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<method_width$}  {:>14}  {:<7}  {}\n",
        "Date",
        "Method",
        "Amount",
        "Billed",
        "Memo",
        method_width = method_width,
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<method_width$}  {:->14}  {:-<7}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        method_width = method_width,
    ));

    for label in labels {
        output.push_str(&format!(
            "{:<10}  {:<method_width$}  {:>14}  {:<7}  {}\n",
            label.transaction_date.to_string(),
            label.payment_method_name.as_deref().unwrap_or("-"),
            label.amount.format_with_symbol(symbol),
            label.billing_month.to_string(),
            label.memo.as_deref().unwrap_or(""),
            method_width = method_width,
        ));
    }

    output.push_str(&format!("\n{} transaction(s)", labels.len()));
    output
}
