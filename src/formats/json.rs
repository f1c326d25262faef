//! JSON line format
//!
//! Produces one object per line with spaced separators and ASCII-only
//! strings:
//!
//! ```text
//! {"time": "2024-01-15T10:30:00.123456", "level": "info", "threadid": 1, "file": "app.go:42", "message": "hello world"}
//! ```

use crate::core::{LogRecord, LoggerError, Result, TimestampFormat};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;
use std::io;

/// Wire names of the fixed record fields, in output order
pub const FIXED_KEYS: [&str; 5] = ["time", "level", "threadid", "file", "message"];

/// `serde_json` formatter writing `", "` and `": "` separators and escaping
/// everything outside printable ASCII as `\uXXXX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(float_repr(value).as_bytes())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let bytes = fragment.as_bytes();
        let mut start = 0;

        for (idx, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            if start < idx {
                writer.write_all(&bytes[start..idx])?;
            }
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }

        if start < bytes.len() {
            writer.write_all(&bytes[start..])?;
        }
        Ok(())
    }
}

/// Shortest round-trip digits of a finite float, laid out as classic
/// `repr(float)`: positional for decimal exponents in `-4..16` (always with a
/// fractional part), otherwise `d.ddde+XX` with at least two exponent digits.
fn float_repr(value: f64) -> String {
    let sci = format!("{:e}", value.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let sign = if value.is_sign_negative() { "-" } else { "" };

    let body = if (-4..16).contains(&exp) {
        if exp < 0 {
            format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits)
        } else {
            let int_len = exp as usize + 1;
            if digits.len() <= int_len {
                format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
            } else {
                format!("{}.{}", &digits[..int_len], &digits[int_len..])
            }
        }
    } else {
        let (lead, frac) = digits.split_at(1);
        let mantissa = if frac.is_empty() {
            lead.to_string()
        } else {
            format!("{}.{}", lead, frac)
        };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, exp_sign, exp.abs())
    };

    format!("{}{}", sign, body)
}

/// Encode any serializable value on a single line with [`SpacedAsciiFormatter`]
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf: Vec<u8> = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| LoggerError::writer(e.to_string()))
}

/// Build the ordered key/value document shared by the JSON and key-value
/// formats.
///
/// Extras follow the fixed fields. An extra whose key matches a fixed wire
/// key replaces that value in place.
pub fn document(record: &LogRecord) -> Result<IndexMap<String, Value>> {
    let mut doc = IndexMap::with_capacity(FIXED_KEYS.len() + record.extra.len());

    doc.insert(
        "time".to_string(),
        Value::String(TimestampFormat::Iso8601.format(&record.time)),
    );
    doc.insert("level".to_string(), Value::String(record.level.clone()));
    doc.insert("threadid".to_string(), Value::Number(record.thread_id.into()));
    doc.insert("file".to_string(), Value::String(record.site.clone()));
    doc.insert("message".to_string(), Value::String(record.message.clone()));

    for (key, value) in record.extra.iter() {
        doc.insert(key.clone(), value.to_json_value(key)?);
    }

    Ok(doc)
}

/// Format a record as a single-line JSON object
pub fn format_json(record: &LogRecord) -> Result<String> {
    encode(&document(record)?)
}
