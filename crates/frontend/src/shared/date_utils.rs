/// Utilities for date and time handling on the client
///
/// Task timestamps are stored as `YYYY-MM-DD HH:MM:SS` strings.
use chrono::{NaiveDateTime, Utc};

/// Current instant, used as the creation time of new tasks
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Calendar part of a task timestamp or filter bound.
/// Example: "2024-03-15 14:02:26" -> "2024-03-15"
pub fn date_part(date_str: &str) -> &str {
    date_str.split([' ', 'T']).next().unwrap_or(date_str)
}

/// Human label for a filter date range, `None` when unbounded on both ends.
/// Dates stay ISO, the same form the table and the filter use.
pub fn format_range(start: &str, end: &str) -> Option<String> {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => None,
        (false, true) => Some(format!("from {}", date_part(start))),
        (true, false) => Some(format!("until {}", date_part(end))),
        (false, false) => Some(format!("{} to {}", date_part(start), date_part(end))),
    }
}
