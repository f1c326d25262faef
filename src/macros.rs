//! Logging macros for ergonomic log message formatting.
//!
//! Messages take `format!`-style arguments. Extra fields follow the message
//! after a `;` as `key = value` pairs and keep the order they are written in.
//! Each macro returns the logger's `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use log_line_formats::prelude::*;
//! use log_line_formats::{info, warning};
//!
//! let logger = Logger::builder()
//!     .appender(WriterAppender::new(std::io::sink()))
//!     .build();
//!
//! info!(logger, "Server listening on port {}", 8080)?;
//! warning!(logger, "this message has some metadata"; foo = "bar", retries = 3)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use log_line_formats::prelude::*;
/// # let logger = Logger::builder().appender(WriterAppender::new(std::io::sink())).build();
/// use log_line_formats::log;
/// log!(logger, LogLevel::Info, "Simple message")?;
/// log!(logger, LogLevel::Error, "Error code: {}", 500)?;
/// log!(logger, LogLevel::Error, "Request failed"; status = 503)?;
/// log!(logger, LogLevel::Error, "Request {} failed", 7; status = 503)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)*; $($key:ident = $value:expr),+ $(,)?) => {
        $logger.log(
            $level,
            format!($fmt $(, $arg)*),
            $crate::Fields::new()$(.with_field(stringify!($key), $value))+,
        )
    };
    ($logger:expr, $level:expr, $message:expr; $($key:ident = $value:expr),+ $(,)?) => {
        $logger.log(
            $level,
            $message,
            $crate::Fields::new()$(.with_field(stringify!($key), $value))+,
        )
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), $crate::Fields::new())
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use log_line_formats::prelude::*;
/// # let logger = Logger::builder().appender(WriterAppender::new(std::io::sink())).build();
/// use log_line_formats::warning;
/// warning!(logger, "Low disk space")?;
/// warning!(logger, "Retry attempt {} of {}", 3, 5)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Write formatted free text, bypassing record construction.
#[macro_export]
macro_rules! plain {
    ($logger:expr, $($arg:tt)+) => {
        $logger.plain(format!($($arg)+))
    };
}
