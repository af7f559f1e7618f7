//! Time and duration formatting helpers.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// Placeholder shown when a timestamp cannot be represented.
pub const UNKNOWN_TIME: &str = "--:--";

/// Render a device timestamp (milliseconds since the Unix epoch) as a
/// 24-hour `HH:MM` time of day in `tz`.
///
/// Front-ends pass the viewer's local zone; tests pin a fixed offset.
#[must_use]
pub fn time_of_day<Tz>(timestamp_ms: u64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map_or_else(
            || UNKNOWN_TIME.to_string(),
            |dt| dt.with_timezone(tz).format("%H:%M").to_string(),
        )
}

/// `"<n>s"` suffix for a history row, or `None` when the duration is zero.
#[must_use]
pub fn duration_suffix(seconds: u64) -> Option<String> {
    (seconds > 0).then(|| format!("{seconds}s"))
}

/// Compact human duration: `45s`, `2m 05s`, `1h 02m 03s`.
#[must_use]
pub fn format_seconds(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}h {minutes:02}m {secs:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs:02}s")
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn should_format_time_of_day_in_utc() {
        assert_eq!(time_of_day(1_700_000_000_000, &Utc), "22:13");
    }

    #[test]
    fn should_format_time_of_day_in_fixed_offset() {
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(time_of_day(1_700_000_000_000, &brasilia), "19:13");
    }

    #[test]
    fn should_treat_device_millis_as_epoch_offset() {
        assert_eq!(time_of_day(90_000, &Utc), "00:01");
    }

    #[test]
    fn should_fall_back_when_timestamp_overflows() {
        assert_eq!(time_of_day(u64::MAX, &Utc), UNKNOWN_TIME);
    }

    #[test]
    fn should_omit_suffix_for_zero_duration() {
        assert_eq!(duration_suffix(0), None);
        assert_eq!(duration_suffix(12).as_deref(), Some("12s"));
    }

    #[test]
    fn should_format_seconds_compactly() {
        assert_eq!(format_seconds(0), "0s");
        assert_eq!(format_seconds(45), "45s");
        assert_eq!(format_seconds(125), "2m 05s");
        assert_eq!(format_seconds(3723), "1h 02m 03s");
    }
}
