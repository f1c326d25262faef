//! Logrus-style key=value format
//!
//! Example: `time="2024-01-15T10:30:00.123456" level="info" threadid=1 file="app.go:42" message="hello world" foo="bar"`
//!
//! Every value goes through the JSON encoder, so strings are always quoted and
//! numbers are bare. Keys are written as given.

use super::json::{document, encode};
use crate::core::{LogRecord, Result};

/// Format a record as space-separated `key=value` pairs
pub fn format_logrus(record: &LogRecord) -> Result<String> {
    let doc = document(record)?;
    let mut parts = Vec::with_capacity(doc.len());

    for (key, value) in &doc {
        parts.push(format!("{}={}", key, encode(value)?));
    }

    Ok(parts.join(" "))
}
