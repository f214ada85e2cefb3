//! Diagnostic logging for the storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with component context
//! - `LogSink` - Pluggable destination for log entries
//! - `MemorySink` / `TracingSink` - Capturing and `tracing`-backed sinks

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;
