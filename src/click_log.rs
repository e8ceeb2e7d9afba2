use chrono::{Local, NaiveDateTime, Timelike};
use parking_lot::RwLock;
use serde::{Serialize, Serializer};
use std::fmt;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TEST_MARKER: &str = " (Test)";

/// One recorded click, local time at second resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickLogEntry {
    at: NaiveDateTime,
    test: bool,
}

impl ClickLogEntry {
    pub fn now() -> Self { Self::at(Local::now().naive_local(), false) }
    pub fn test_now() -> Self { Self::at(Local::now().naive_local(), true) }

    pub fn at(at: NaiveDateTime, test: bool) -> Self {
        Self { at: at.with_nanosecond(0).unwrap_or(at), test }
    }

    pub fn timestamp(&self) -> NaiveDateTime { self.at }
    pub fn is_test(&self) -> bool { self.test }
}

impl fmt::Display for ClickLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.at.format(TIMESTAMP_FORMAT))?;
        if self.test { f.write_str(TEST_MARKER)?; }
        Ok(())
    }
}

impl Serialize for ClickLogEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Append-only click history shared by the worker and the API.
///
/// Each operation takes the lock once, so a reader racing `clear` sees the log
/// either whole or empty.
#[derive(Debug, Default)]
pub struct ClickLog {
    entries: RwLock<Vec<ClickLogEntry>>,
}

impl ClickLog {
    pub fn new() -> Self { Self::default() }

    pub fn append(&self, entry: ClickLogEntry) { self.entries.write().push(entry); }
    pub fn len(&self) -> usize { self.entries.read().len() }
    pub fn is_empty(&self) -> bool { self.entries.read().is_empty() }
    pub fn snapshot(&self) -> Vec<ClickLogEntry> { self.entries.read().clone() }
    pub fn clear(&self) { self.entries.write().clear(); }
}
