//! Output formats for log records
//!
//! - Json: one JSON object per line (default)
//! - Logrus: `key=value` pairs with JSON-encoded values
//! - Klog: fixed-width `Lmmdd hh:mm:ss.uuuuuu threadid file:line] msg`

pub mod json;
pub mod klog;
pub mod logrus;

pub use json::format_json;
pub use klog::format_klog;
pub use logrus::format_logrus;

use crate::core::{LogRecord, Result};
use std::fmt;
use std::str::FromStr;

/// Output format for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    Json,
    Logrus,
    Klog,
}

impl OutputFormat {
    /// Format a record according to this output format
    pub fn format(&self, record: &LogRecord) -> Result<String> {
        match self {
            OutputFormat::Json => format_json(record),
            OutputFormat::Logrus => format_logrus(record),
            OutputFormat::Klog => format_klog(record),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Logrus => "logrus",
            OutputFormat::Klog => "klog",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "logrus" | "kv" | "logfmt" => Ok(OutputFormat::Logrus),
            "klog" | "glog" => Ok(OutputFormat::Klog),
            _ => Err(format!("Invalid output format: '{}'", s)),
        }
    }
}
