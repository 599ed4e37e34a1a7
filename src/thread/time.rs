use chrono::{DateTime, Utc};

/// Formats an ISO 8601 timestamp the way browsers print `Date.toUTCString()`,
/// e.g. "Fri, 01 Jan 2021 00:00:00 GMT".
///
/// Returns the original string if it cannot be parsed.
pub fn format_utc_timestamp(timestamp: &str) -> String {
    match timestamp.parse::<DateTime<Utc>>() {
        Ok(dt) => dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
