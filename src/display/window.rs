//! Card window display

use std::fmt::Write;

use crate::services::CardWindows;

/// Format the windows of one card as labelled lines
pub fn format_card_windows(windows: &CardWindows) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} for {}", windows.card_name, windows.month);
    let _ = writeln!(
        out,
        "  Performance window:  {} .. {}  ({})",
        windows.performance.start, windows.performance.end, windows.range_label
    );

    match (windows.billing_window, windows.billing_month) {
        (Some(billing), Some(key)) => {
            let _ = writeln!(
                out,
                "  Billing window:      {} .. {}  (charged in {})",
                billing.start, billing.end, windows.month
            );
            let _ = writeln!(out, "  Window charged in:   {}", key);
        }
        _ => out.push_str("  No billing cycle configured\n"),
    }

    if let Some(date) = windows.expected_billing_date {
        let _ = writeln!(out, "  Expected charge:     {}", date);
    }
    let _ = writeln!(out, "  Suggested start day: {}", windows.suggested_start_day);
    out
}
