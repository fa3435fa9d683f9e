//! Timestamp formatting for log lines
//!
//! Log lines carry local wall-clock time at second resolution, always in the
//! fixed-width `YYYY-MM-DD HH:MM:SS` layout.

use chrono::{DateTime, Local, TimeZone};

/// strftime layout used for every log line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format any zoned datetime with [`TIMESTAMP_FORMAT`]
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time, truncated to whole seconds when formatted
#[must_use]
pub fn now() -> DateTime<Local> {
    Local::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const TIMESTAMP_WIDTH: usize = 19;

    #[test]
    fn test_fixed_layout() {
        let datetime = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456);
        assert_eq!(format_timestamp(&datetime), "2025-01-08 10:30:45");
    }

    #[test]
    fn test_current_timestamp_width() {
        let ts = format_timestamp(&now());
        assert_eq!(ts.len(), TIMESTAMP_WIDTH);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}
