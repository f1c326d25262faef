//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod fields;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use log_level::LogLevel;
pub use log_record::{LogRecord, ThreadIdSource};
pub use logger::{Logger, LoggerBuilder};
pub use timestamp::TimestampFormat;
