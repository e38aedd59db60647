//! # Search History
//!
//! Bounded, append-only record of successful lookups in this session.

use std::collections::VecDeque;

use chrono::{Local, NaiveDateTime};

use super::country::{CountryCode, CountryInfo};

/// Entries kept before the oldest is dropped
pub const HISTORY_CAPACITY: usize = 10;

/// Timestamp layout shared by the history view and the export file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One successful lookup
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub code: CountryCode,
    pub timestamp: NaiveDateTime,
    pub info: CountryInfo,
}

impl HistoryEntry {
    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn timestamp_display(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a lookup stamped with the current local time
    pub fn record(&mut self, code: CountryCode, info: CountryInfo) {
        self.record_at(code, info, Local::now().naive_local());
    }

    pub fn record_at(&mut self, code: CountryCode, info: CountryInfo, timestamp: NaiveDateTime) {
        tracing::debug!("Recording history entry for {}", code);
        self.entries.push_back(HistoryEntry {
            code,
            timestamp,
            info,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Entries oldest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
