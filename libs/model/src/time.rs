//! Canonical timestamp rendering.
//!
//! Model timestamps are ISO-8601 instants in UTC with second precision and a
//! `Z` suffix, e.g. `2023-10-20T18:02:15Z`. Sub-second components are
//! truncated, never rounded.

use chrono::{DateTime, SecondsFormat, Utc};

/// Render an instant in the canonical model format.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_instant_from_epoch_millis() {
        let instant = DateTime::from_timestamp_millis(1_697_824_935_000).unwrap();
        assert_eq!(format_instant(&instant), "2023-10-20T18:02:15Z");

        let instant = DateTime::from_timestamp_millis(1_697_839_335_000).unwrap();
        assert_eq!(format_instant(&instant), "2023-10-20T22:02:15Z");
    }

    #[test]
    fn test_format_instant_drops_fraction() {
        let instant = DateTime::from_timestamp_millis(1_697_824_935_999).unwrap();
        assert_eq!(format_instant(&instant), "2023-10-20T18:02:15Z");
    }
}
