//! Date helper functions

use chrono::DateTime;

/// Format an ISO-8601 timestamp for display
///
/// # Examples
/// ```ignore
/// format_date("2023-01-01T10:00:00Z") // -> "Jan 1, 2023"
/// format_date("soon")                 // -> "Invalid date"
/// ```
pub fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp.trim()) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(e) => {
            tracing::debug!(timestamp, error = %e, "unparseable timestamp");
            "Invalid date".to_string()
        }
    }
}
