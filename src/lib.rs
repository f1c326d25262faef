//! # Log Line Formats
//!
//! Formats log records as single text lines in three encodings and writes
//! them to standard output.
//!
//! ## Formats
//!
//! - **JSON**: `{"time": "2024-01-15T10:30:00.123456", "level": "info", "threadid": 1, "file": "app.go:42", "message": "hello world"}`
//! - **Logrus**: `time="2024-01-15T10:30:00.123456" level="info" threadid=1 file="app.go:42" message="hello world" foo="bar"`
//! - **Klog**: `E0105 09:02:03.000045       1 x.go:7] boom`
//!
//! The formatters are pure functions of a [`LogRecord`]; the [`Logger`]
//! stamps records with the time and call site and writes them.

pub mod appenders;
pub mod core;
pub mod formats;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, SharedBuffer, WriterAppender};
    pub use crate::core::{
        Appender, FieldValue, Fields, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError,
        Result, ThreadIdSource, TimestampFormat,
    };
    pub use crate::formats::{format_json, format_klog, format_logrus, OutputFormat};
}

pub use appenders::{ConsoleAppender, SharedBuffer, WriterAppender};
pub use self::core::{
    Appender, FieldValue, Fields, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError, Result,
    ThreadIdSource, TimestampFormat,
};
pub use formats::{format_json, format_klog, format_logrus, OutputFormat};
