//! Main logger implementation

use super::{
    appender::Appender,
    error::Result,
    fields::Fields,
    log_level::LogLevel,
    log_record::{LogRecord, ThreadIdSource},
    timestamp,
};
use crate::appenders::ConsoleAppender;
use crate::formats::OutputFormat;
use parking_lot::Mutex;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Builds records at the call site, formats them and writes one line each.
///
/// The output format, thread id source and appender are bound once when the
/// logger is built. Clones share the appender, and every line is written and
/// flushed under its lock so concurrent callers never interleave.
#[derive(Clone)]
pub struct Logger {
    format: OutputFormat,
    thread_id: ThreadIdSource,
    appender: Arc<Mutex<Box<dyn Appender>>>,
}

impl Logger {
    /// JSON lines on standard output with thread id 1
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for configuring the logger
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// A logger writing to the same appender in another format
    ///
    /// ```
    /// use log_line_formats::prelude::*;
    ///
    /// let logger = Logger::new();
    /// let klog = logger.with_format(OutputFormat::Klog);
    /// assert_eq!(klog.format(), OutputFormat::Klog);
    /// ```
    #[must_use]
    pub fn with_format(&self, format: OutputFormat) -> Logger {
        Logger {
            format,
            thread_id: self.thread_id,
            appender: Arc::clone(&self.appender),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn thread_id_source(&self) -> ThreadIdSource {
        self.thread_id
    }

    pub fn appender_name(&self) -> String {
        self.appender.lock().name().to_string()
    }

    /// Log a message with extra fields at the given level.
    ///
    /// The record is stamped with the current local time and the location of
    /// the caller. Nothing is written if formatting fails.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>, fields: Fields) -> Result<()> {
        let record = LogRecord::new(
            timestamp::now(),
            level.to_str(),
            self.thread_id.current(),
            LogRecord::site_of(Location::caller()),
            message,
        )
        .with_extra(fields);

        self.emit(&record)
    }

    /// Format a prepared record and write it
    pub fn emit(&self, record: &LogRecord) -> Result<()> {
        let line = self.format.format(record)?;
        self.write_line(&line)
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Info, message, Fields::new())
    }

    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Warning, message, Fields::new())
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Error, message, Fields::new())
    }

    #[track_caller]
    pub fn info_with(&self, message: impl Into<String>, fields: Fields) -> Result<()> {
        self.log(LogLevel::Info, message, fields)
    }

    #[track_caller]
    pub fn warning_with(&self, message: impl Into<String>, fields: Fields) -> Result<()> {
        self.log(LogLevel::Warning, message, fields)
    }

    #[track_caller]
    pub fn error_with(&self, message: impl Into<String>, fields: Fields) -> Result<()> {
        self.log(LogLevel::Error, message, fields)
    }

    /// Write free text as its own line, bypassing record construction
    pub fn plain(&self, text: impl fmt::Display) -> Result<()> {
        self.write_line(&text.to_string())
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut appender = self.appender.lock();
        appender.write_line(line)?;
        appender.flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("format", &self.format)
            .field("thread_id", &self.thread_id)
            .field("appender", &self.appender_name())
            .finish()
    }
}

/// Builder for creating a Logger with custom configuration
///
/// # Example
/// ```
/// use log_line_formats::prelude::*;
///
/// let logger = Logger::builder()
///     .format(OutputFormat::Logrus)
///     .thread_id(ThreadIdSource::PerThread)
///     .appender(ConsoleAppender::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    format: OutputFormat,
    thread_id: ThreadIdSource,
    appender: Option<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            format: OutputFormat::default(),
            thread_id: ThreadIdSource::default(),
            appender: None,
        }
    }

    /// Set the default output format
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set where thread ids come from
    #[must_use = "builder methods return a new value"]
    pub fn thread_id(mut self, source: ThreadIdSource) -> Self {
        self.thread_id = source;
        self
    }

    /// Set the output appender (standard output when not called)
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Build the logger
    pub fn build(self) -> Logger {
        let appender = self
            .appender
            .unwrap_or_else(|| Box::new(ConsoleAppender::new()));

        Logger {
            format: self.format,
            thread_id: self.thread_id,
            appender: Arc::new(Mutex::new(appender)),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
