//! Timestamp capture and rendering
//!
//! Records carry naive local time truncated to microseconds. Two renderings
//! are supported: ISO 8601 for the JSON and key-value formats, and the
//! compact `MMDD HH:MM:SS.ffffff` form used by klog lines.

use chrono::{Local, NaiveDateTime, Timelike};

/// Timestamp rendering options
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use log_line_formats::core::TimestampFormat;
///
/// let time = NaiveDate::from_ymd_opt(2024, 1, 5)
///     .unwrap()
///     .and_hms_micro_opt(9, 2, 3, 45)
///     .unwrap();
///
/// assert_eq!(TimestampFormat::Iso8601.format(&time), "2024-01-05T09:02:03.000045");
/// assert_eq!(TimestampFormat::Klog.format(&time), "0105 09:02:03.000045");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `2024-01-15T10:30:00.123456`
    ///
    /// The fractional part is omitted when the microsecond component is zero.
    #[default]
    Iso8601,

    /// `0115 10:30:00.123456`, always six fractional digits.
    Klog,
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, time: &NaiveDateTime) -> String {
        match self {
            TimestampFormat::Iso8601 => {
                let base = time.format("%Y-%m-%dT%H:%M:%S").to_string();
                match micros(time) {
                    0 => base,
                    us => format!("{}.{:06}", base, us),
                }
            }
            TimestampFormat::Klog => {
                format!("{}.{:06}", time.format("%m%d %H:%M:%S"), micros(time))
            }
        }
    }
}

/// Current local time, truncated to microsecond precision
#[must_use]
pub fn now() -> NaiveDateTime {
    truncate_to_micros(Local::now().naive_local())
}

/// Drop sub-microsecond digits
#[must_use]
pub fn truncate_to_micros(time: NaiveDateTime) -> NaiveDateTime {
    let nanos = time.nanosecond();
    time.with_nanosecond(nanos - nanos % 1_000).unwrap_or(time)
}

// Leap seconds are encoded as nanosecond >= 1_000_000_000.
fn micros(time: &NaiveDateTime) -> u32 {
    (time.nanosecond() / 1_000) % 1_000_000
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_datetime(micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .expect("valid date")
            .and_hms_micro_opt(10, 30, 0, micro)
            .expect("valid time")
    }

    #[test]
    fn test_iso8601_with_micros() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime(123456));
        assert_eq!(result, "2024-01-15T10:30:00.123456");
    }

    #[test]
    fn test_iso8601_pads_micros() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime(45));
        assert_eq!(result, "2024-01-15T10:30:00.000045");
    }

    #[test]
    fn test_iso8601_omits_zero_fraction() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime(0));
        assert_eq!(result, "2024-01-15T10:30:00");
    }

    #[test]
    fn test_klog_format() {
        assert_eq!(
            TimestampFormat::Klog.format(&fixed_datetime(123456)),
            "0115 10:30:00.123456"
        );
        assert_eq!(
            TimestampFormat::Klog.format(&fixed_datetime(0)),
            "0115 10:30:00.000000"
        );
    }

    #[test]
    fn test_truncate_to_micros() {
        let time = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_nano_opt(10, 30, 0, 123_456_789)
            .unwrap();
        assert_eq!(truncate_to_micros(time).nanosecond(), 123_456_000);
    }

    #[test]
    fn test_now_has_no_sub_micro_digits() {
        assert_eq!(now().nanosecond() % 1_000, 0);
    }

    #[test]
    fn test_default_is_iso8601() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Iso8601);
    }
}
