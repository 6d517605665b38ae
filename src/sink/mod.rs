//! Sinks are where rendered lines end up. Formats produce lines, sinks only
//! move them, so a custom sink can capture, forward, or drop output without
//! knowing how it was formatted.

mod console;
mod disk;

pub use console::ConsoleSink;
pub use disk::{DEFAULT_FLUSH_TIMEOUT, DiskSink};

use crate::level::Priority;
use std::sync::Arc;

/// `Send + Sync` because one sink is shared by every thread that logs.
pub trait LogSink: Send + Sync {
    /// Emits one already-formatted line. Must not block on slow I/O.
    fn log(&self, priority: Priority, tag: Option<&str>, line: &str);

    /// Waits until every line accepted so far has reached its destination.
    ///
    /// # Errors
    /// Sinks with a background worker report a timeout or a dead worker.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn log(&self, priority: Priority, tag: Option<&str>, line: &str) {
        (**self).log(priority, tag, line);
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (**self).flush()
    }
}
