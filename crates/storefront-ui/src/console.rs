//! Browser console sink.

use leptos::logging::{error, log, warn};
use storefront_observability::{LogEntry, LogFormat, LogLevel, LogSink};

/// Writes entries to the browser console (stdout/stderr off-browser).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    format: LogFormat,
}

impl ConsoleSink {
    pub fn new(format: LogFormat) -> Self {
        Self { format }
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry) {
        let line = entry.render(self.format);
        match entry.level {
            LogLevel::Error => error!("{}", line),
            LogLevel::Warn => warn!("{}", line),
            _ => log!("{}", line),
        }
    }
}
