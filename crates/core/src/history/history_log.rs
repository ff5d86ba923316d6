use std::sync::Arc;

use log::debug;

use super::clock::{Clock, SystemClock};
use super::history_model::HistoryEntry;

/// Append-only, in-memory record of calculations for the process lifetime.
pub struct HistoryLog {
    clock: Arc<dyn Clock>,
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: Vec::new(),
        }
    }

    /// Stamps the current time and appends a new entry.
    pub fn add_record(&mut self, module_name: &str, input: &str, result: &str) -> HistoryEntry {
        let entry = HistoryEntry::new(self.clock.now(), module_name, input, result);
        debug!("History: {}", entry);
        self.entries.push(entry.clone());
        entry
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries most-recent-first, for display.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    /// Rendered `[HH:MM:SS] ...` lines, most-recent-first.
    pub fn render(&self) -> Vec<String> {
        self.entries.iter().rev().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
