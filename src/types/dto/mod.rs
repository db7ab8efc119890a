// API request/response objects
pub mod common;
pub mod todo;
pub mod user;

use chrono::{TimeZone, Utc};

/// Render a unix-second timestamp as RFC 3339.
///
/// Timestamps chrono cannot represent render as an empty string.
pub(crate) fn to_rfc3339(secs: i64) -> String {
    match Utc.timestamp_opt(secs, 0).single() {
        Some(dt) => dt.to_rfc3339(),
        None => {
            tracing::debug!(secs, "timestamp out of range, rendering as empty");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_unix_seconds_as_rfc3339() {
        assert_eq!(to_rfc3339(0), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn out_of_range_timestamp_renders_as_empty() {
        assert_eq!(to_rfc3339(i64::MAX), "");
        assert_eq!(to_rfc3339(i64::MIN), "");
    }
}
