//! Log record structure

use super::fields::{FieldValue, Fields};
use chrono::NaiveDateTime;
use std::cell::Cell;
use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

// Thread-local cache so each thread keeps the id it was first given
thread_local! {
    static THREAD_ID_CACHE: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Get cached thread ID, assigning the next sequential one on first access
fn get_thread_id() -> u64 {
    THREAD_ID_CACHE.with(|cache| match cache.get() {
        Some(id) => id,
        None => {
            let id = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
            cache.set(Some(id));
            id
        }
    })
}

/// Where the `threadid` field of a record comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadIdSource {
    /// The same id for every record
    Fixed(u64),
    /// A small sequential id per OS thread, starting at 1
    PerThread,
}

impl Default for ThreadIdSource {
    fn default() -> Self {
        ThreadIdSource::Fixed(1)
    }
}

impl ThreadIdSource {
    #[must_use]
    pub fn current(&self) -> u64 {
        match self {
            ThreadIdSource::Fixed(id) => *id,
            ThreadIdSource::PerThread => get_thread_id(),
        }
    }
}

/// One log event: five fixed fields plus ordered extras
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub time: NaiveDateTime,
    pub level: String,
    pub thread_id: u64,
    /// `file:line` of the logging call
    pub site: String,
    pub message: String,
    pub extra: Fields,
}

impl LogRecord {
    pub fn new(
        time: NaiveDateTime,
        level: impl Into<String>,
        thread_id: u64,
        site: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            time,
            level: level.into(),
            thread_id,
            site: site.into(),
            message: message.into(),
            extra: Fields::new(),
        }
    }

    #[must_use]
    pub fn with_extra(mut self, extra: Fields) -> Self {
        self.extra = extra;
        self
    }

    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.extra.add_field(key, value);
        self
    }

    /// Render a caller location as `file:line`
    pub fn site_of(location: &Location<'_>) -> String {
        format!("{}:{}", location.file(), location.line())
    }
}
