//! Ordered extra fields attached to a log record
//!
//! This module provides:
//! - `FieldValue`: a single extra value
//! - `Fields`: the insertion-ordered map of extra values

use super::error::{LoggerError, Result};
use indexmap::IndexMap;
use serde::Serialize;

/// Value type for extra record fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    /// Arbitrary nested JSON
    Json(serde_json::Value),
    /// A value whose serialization failed when it was attached; the reason is
    /// reported by the formatters that need the JSON form.
    Unencodable(String),
}

impl FieldValue {
    /// Capture any serializable value as JSON.
    ///
    /// Serialization errors are not raised here. They are kept in the value
    /// and surface as [`LoggerError::Serialization`] when the record is
    /// formatted as JSON or key-value pairs.
    pub fn serialized<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => FieldValue::Json(json),
            Err(e) => FieldValue::Unencodable(e.to_string()),
        }
    }

    /// Convert to serde_json::Value for JSON serialization
    ///
    /// `key` only labels the error.
    pub fn to_json_value(&self, key: &str) -> Result<serde_json::Value> {
        match self {
            FieldValue::String(s) => Ok(serde_json::Value::String(s.clone())),
            FieldValue::Int(i) => Ok(serde_json::Value::Number((*i).into())),
            FieldValue::UInt(u) => Ok(serde_json::Value::Number((*u).into())),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| {
                    LoggerError::serialization(key, format!("{} has no JSON representation", f))
                }),
            FieldValue::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            FieldValue::Null => Ok(serde_json::Value::Null),
            FieldValue::Json(v) => Ok(v.clone()),
            FieldValue::Unencodable(reason) => Err(LoggerError::serialization(key, reason.clone())),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::UInt(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        FieldValue::Json(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}

/// Extra fields of a record, kept in insertion order.
///
/// Re-inserting a key keeps its original position and replaces the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    fields: IndexMap<String, FieldValue>,
}

impl Fields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Add a field
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, value) in iter {
            fields.add_field(key, value);
        }
        fields
    }
}
