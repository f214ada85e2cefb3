//! Destinations for structured log entries.

use std::cell::RefCell;
use std::rc::Rc;

use crate::logging::{LogEntry, LogLevel};

/// Receives every entry that passes the logger's level filter.
pub trait LogSink {
    fn write(&self, entry: &LogEntry);
}

/// Re-emits entries as `tracing` events.
///
/// Useful on native hosts where a subscriber is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, entry: &LogEntry) {
        let component = entry.component.as_deref().unwrap_or("");
        let fields = serde_json::Value::Object(
            entry
                .fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        );

        match entry.level {
            LogLevel::Trace => tracing::trace!(component, %fields, "{}", entry.message),
            LogLevel::Debug => tracing::debug!(component, %fields, "{}", entry.message),
            LogLevel::Info => tracing::info!(component, %fields, "{}", entry.message),
            LogLevel::Warn => tracing::warn!(component, %fields, "{}", entry.message),
            LogLevel::Error => tracing::error!(component, %fields, "{}", entry.message),
        }
    }
}

/// Keeps entries in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a logger
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Rc<RefCell<Vec<LogEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    /// Entries at exactly `level`.
    pub fn at_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl LogSink for MemorySink {
    fn write(&self, entry: &LogEntry) {
        self.entries.borrow_mut().push(entry.clone());
    }
}
