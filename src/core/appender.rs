//! Appender trait for log output destinations

use super::error::Result;

/// A line-oriented output sink.
///
/// `write_line` receives a formatted line without its terminator; the
/// appender adds the newline.
pub trait Appender: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
