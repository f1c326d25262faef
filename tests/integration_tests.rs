//! Integration tests for the log line formats
//!
//! These tests verify:
//! - The documented example lines for each format
//! - Serialization and level errors
//! - The logger's call-site capture and output routing

use chrono::{NaiveDate, NaiveDateTime};
use log_line_formats::appenders::{SharedBuffer, WriterAppender};
use log_line_formats::core::fields::{FieldValue, Fields};
use log_line_formats::core::log_record::LogRecord;
use log_line_formats::core::logger::Logger;
use log_line_formats::formats::{format_json, format_klog, format_logrus, OutputFormat};
use log_line_formats::LoggerError;
use std::collections::BTreeMap;

fn at(month: u32, day: u32, h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .expect("valid date")
        .and_hms_micro_opt(h, m, s, micro)
        .expect("valid time")
}

fn hello_record() -> LogRecord {
    LogRecord::new(at(1, 15, 10, 30, 0, 123456), "info", 1, "app.go:42", "hello world")
}

#[test]
fn test_json_hello_world() {
    assert_eq!(
        format_json(&hello_record()).expect("format"),
        r#"{"time": "2024-01-15T10:30:00.123456", "level": "info", "threadid": 1, "file": "app.go:42", "message": "hello world"}"#
    );
}

#[test]
fn test_logrus_hello_world_with_metadata() {
    let record = hello_record().with_field("foo", "bar");
    assert_eq!(
        format_logrus(&record).expect("format"),
        r#"time="2024-01-15T10:30:00.123456" level="info" threadid=1 file="app.go:42" message="hello world" foo="bar""#
    );
}

#[test]
fn test_klog_error_line() {
    let record = LogRecord::new(at(1, 5, 9, 2, 3, 45), "error", 1, "x.go:7", "boom");
    assert_eq!(
        format_klog(&record).expect("format"),
        "E0105 09:02:03.000045       1 x.go:7] boom"
    );
}

#[test]
fn test_json_rejects_unserializable_extra() {
    // Maps with non-string keys have no JSON form
    let mut weird = BTreeMap::new();
    weird.insert((1, 2), "pair");

    let record = hello_record().with_field("weird", FieldValue::serialized(&weird));

    let err = format_json(&record).expect_err("should fail");
    assert!(matches!(err, LoggerError::Serialization { ref key, .. } if key == "weird"));

    let err = format_logrus(&record).expect_err("should fail");
    assert!(matches!(err, LoggerError::Serialization { .. }));

    // The fixed format never looks at extras
    assert!(format_klog(&record).is_ok());
}

#[test]
fn test_klog_rejects_empty_level() {
    let record = LogRecord::new(at(1, 5, 9, 2, 3, 45), "", 1, "x.go:7", "boom");
    let err = format_klog(&record).expect_err("should fail");
    assert!(matches!(err, LoggerError::InvalidLevel { .. }));

    // JSON carries any level string
    assert!(format_json(&record).is_ok());
}

#[test]
fn test_json_round_trip_preserves_order() {
    let record = hello_record()
        .with_field("z_last_alphabetically", 1)
        .with_field("a_first_alphabetically", 2);

    let line = format_json(&record).expect("format");
    let z = line.find("z_last_alphabetically").expect("z present");
    let a = line.find("a_first_alphabetically").expect("a present");
    assert!(z < a);

    let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid json");
    assert_eq!(parsed["time"], "2024-01-15T10:30:00.123456");
    assert_eq!(parsed["a_first_alphabetically"], 2);
}

#[test]
fn test_zero_microseconds() {
    let record = LogRecord::new(at(3, 1, 0, 0, 0, 0), "info", 1, "a.rs:1", "m");

    assert!(format_json(&record)
        .expect("format")
        .starts_with(r#"{"time": "2024-03-01T00:00:00", "#));
    assert!(format_klog(&record)
        .expect("format")
        .starts_with("I0301 00:00:00.000000"));
}

#[test]
fn test_logger_demo_sequence() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .appender(WriterAppender::new(buffer.clone()))
        .build();

    logger
        .with_format(OutputFormat::Klog)
        .warning("klog test")
        .expect("klog");
    logger.plain("plaintext messages").expect("plain");
    logger.info("hello world").expect("json");
    logger
        .warning_with(
            "this message has some metadata",
            Fields::new().with_field("foo", "bar"),
        )
        .expect("json with fields");
    logger
        .with_format(OutputFormat::Logrus)
        .error("this is a logrus-like message")
        .expect("logrus");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 5);

    assert!(lines[0].starts_with('W'));
    assert!(lines[0].contains("       1 tests/integration_tests.rs:"));
    assert!(lines[0].ends_with("] klog test"));

    assert_eq!(lines[1], "plaintext messages");

    let info: serde_json::Value = serde_json::from_str(&lines[2]).expect("json");
    assert_eq!(info["level"], "info");
    assert!(info["file"]
        .as_str()
        .expect("file")
        .starts_with("tests/integration_tests.rs:"));

    let warning: serde_json::Value = serde_json::from_str(&lines[3]).expect("json");
    assert_eq!(warning["foo"], "bar");

    assert!(lines[4].starts_with("time=\""));
    assert!(lines[4].contains(r#"level="error" threadid=1 file="tests/integration_tests.rs:"#));
    assert!(lines[4].ends_with(r#"message="this is a logrus-like message""#));
}

#[test]
fn test_timestamps_are_captured_per_call() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .appender(WriterAppender::new(buffer.clone()))
        .build();

    logger.info("first").expect("log");
    std::thread::sleep(std::time::Duration::from_millis(5));
    logger.info("second").expect("log");

    let times: Vec<NaiveDateTime> = buffer
        .lines()
        .iter()
        .map(|line| {
            let parsed: serde_json::Value = serde_json::from_str(line).expect("json");
            let time = parsed["time"].as_str().expect("time").to_string();
            NaiveDateTime::parse_from_str(&time, "%Y-%m-%dT%H:%M:%S%.f").expect("iso time")
        })
        .collect();

    assert!(times[1] > times[0]);
}
