use chrono::{DateTime, Utc};
use odyssey_core::time::parse_timestamp;

#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Tooltip text for a completion timestamp as reported by the API.
///
/// Unparseable values are shown as-is.
#[must_use]
pub fn completed_tooltip(raw: &str) -> String {
    let raw = raw.trim();
    match parse_timestamp(raw) {
        Some(at) => format!("Completed on {}", format_date(at)),
        None => format!("Completed on {raw}"),
    }
}
