//! klog-style fixed-width format
//!
//! Example: `E0105 09:02:03.000045       1 x.go:7] boom`
//!
//! Only the five fixed fields have a slot; extra fields are dropped.

use crate::core::{LogRecord, LoggerError, Result, TimestampFormat};

/// Width the thread id is right-aligned to
pub const THREAD_ID_WIDTH: usize = 8;

/// Format a record as a klog line
pub fn format_klog(record: &LogRecord) -> Result<String> {
    let initial = record
        .level
        .chars()
        .next()
        .ok_or_else(|| LoggerError::invalid_level(record.level.as_str()))?;

    Ok(format!(
        "{}{}{:>width$} {}] {}",
        initial.to_uppercase(),
        TimestampFormat::Klog.format(&record.time),
        record.thread_id,
        record.site,
        record.message,
        width = THREAD_ID_WIDTH
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_micro_opt(9, 2, 3, 45)
            .unwrap()
    }

    #[test]
    fn test_klog_format() {
        let record = LogRecord::new(time(), "error", 1, "x.go:7", "boom");
        assert_eq!(
            format_klog(&record).unwrap(),
            "E0105 09:02:03.000045       1 x.go:7] boom"
        );
    }

    #[test]
    fn test_klog_level_initials() {
        for (level, initial) in [("info", 'I'), ("warning", 'W'), ("error", 'E')] {
            let line = format_klog(&LogRecord::new(time(), level, 1, "x.go:7", "m")).unwrap();
            assert!(line.starts_with(initial), "{} -> {}", level, line);
        }
    }

    #[test]
    fn test_klog_drops_extra_fields() {
        let plain = LogRecord::new(time(), "info", 1, "x.go:7", "m");
        let with_extra = plain.clone().with_field("ratio", f64::NAN);

        assert_eq!(format_klog(&plain).unwrap(), format_klog(&with_extra).unwrap());
    }

    #[test]
    fn test_klog_wide_thread_id() {
        let record = LogRecord::new(time(), "info", 123_456_789, "x.go:7", "m");
        assert_eq!(
            format_klog(&record).unwrap(),
            "I0105 09:02:03.000045123456789 x.go:7] m"
        );
    }

    #[test]
    fn test_klog_empty_level() {
        let err = format_klog(&LogRecord::new(time(), "", 1, "x.go:7", "m")).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));
    }
}
