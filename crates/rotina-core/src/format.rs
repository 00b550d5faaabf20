//! Formatting helpers for insight text
//!
//! Only the free-text insight descriptions embed formatted strings; the
//! structured outputs carry raw date and numeric values.

use chrono::NaiveDate;

/// Format a duration in seconds as "Xmin Ys", "Xmin", or "Ys".
pub fn format_duration(seconds: u32) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;

    if minutes == 0 {
        return format!("{}s", secs);
    }

    if secs > 0 {
        format!("{}min {}s", minutes, secs)
    } else {
        format!("{}min", minutes)
    }
}

/// Format a civil date in pt-BR day/month/year order.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
