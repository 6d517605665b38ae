//! One comma-separated line per record, meant for the daily files on disk.
//!
//! Fields are not escaped: a comma or newline inside the tag or message ends up
//! in the file as-is.

use super::FormatStrategy;
use crate::level::Priority;
use crate::sink::{DiskSink, LogSink};
use chrono::Local;
use std::fmt::Write;
use std::sync::Arc;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// `label,tag,message,timestamp`
pub struct CsvFormat {
    timestamp_format: String,
    sink: Arc<dyn LogSink>,
}

impl std::fmt::Debug for CsvFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvFormat")
            .field("timestamp_format", &self.timestamp_format)
            .finish_non_exhaustive()
    }
}

impl CsvFormat {
    #[must_use]
    pub fn builder() -> CsvBuilder {
        CsvBuilder::default()
    }

    #[must_use]
    pub fn line(&self, priority: Priority, tag: Option<&str>, message: &str) -> String {
        let now = Local::now();
        let mut timestamp = String::new();
        // An invalid user pattern makes chrono's formatter fail; fall back rather than panic.
        if write!(timestamp, "{}", now.format(&self.timestamp_format)).is_err() {
            timestamp.clear();
            let _ = write!(timestamp, "{}", now.format(DEFAULT_TIMESTAMP_FORMAT));
        }
        format!(
            "{},{},{message},{timestamp}",
            priority.label(),
            tag.unwrap_or_default()
        )
    }
}

impl FormatStrategy for CsvFormat {
    fn render(&self, priority: Priority, tag: Option<&str>, message: &str) {
        self.sink.log(priority, tag, &self.line(priority, tag, message));
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.sink.flush()
    }
}

#[derive(Clone, Default)]
pub struct CsvBuilder {
    timestamp_format: Option<String>,
    sink: Option<Arc<dyn LogSink>>,
}

impl CsvBuilder {
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Without an explicit sink this starts a [`DiskSink`] on the default directory.
    #[must_use]
    pub fn build(self) -> CsvFormat {
        CsvFormat {
            timestamp_format: self
                .timestamp_format
                .unwrap_or_else(|| DEFAULT_TIMESTAMP_FORMAT.to_string()),
            sink: self.sink.unwrap_or_else(|| Arc::new(DiskSink::default())),
        }
    }
}
