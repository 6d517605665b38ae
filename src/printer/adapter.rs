//! Adapters decide whether a record is wanted and pass it to their format.

use crate::format::{CsvFormat, FormatStrategy, PrettyFormat};
use crate::level::Priority;

/// Registered with a [`super::Printer`]; every adapter sees every record that
/// passes its own filter.
pub trait LogAdapter: Send + Sync {
    fn is_loggable(&self, priority: Priority, tag: Option<&str>) -> bool;

    fn log(&self, priority: Priority, tag: Option<&str>, message: &str);

    /// # Errors
    /// Whatever the underlying sink reports.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

/// Built-in adapter: a minimum priority in front of a format strategy.
pub struct Adapter {
    format: Box<dyn FormatStrategy>,
    min_priority: Priority,
}

impl std::fmt::Debug for Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adapter")
            .field("min_priority", &self.min_priority)
            .finish_non_exhaustive()
    }
}

impl Adapter {
    /// Passes everything (`Verbose` and up).
    #[must_use]
    pub fn new(format: impl FormatStrategy + 'static) -> Self {
        Self {
            format: Box::new(format),
            min_priority: Priority::Verbose,
        }
    }

    /// Pretty format on the console with default options.
    #[must_use]
    pub fn console() -> Self {
        Self::new(PrettyFormat::default())
    }

    /// CSV format into the default log directory.
    #[must_use]
    pub fn disk() -> Self {
        Self::new(CsvFormat::builder().build())
    }

    #[must_use]
    pub const fn min_priority(mut self, priority: Priority) -> Self {
        self.min_priority = priority;
        self
    }
}

impl LogAdapter for Adapter {
    fn is_loggable(&self, priority: Priority, _tag: Option<&str>) -> bool {
        priority >= self.min_priority
    }

    fn log(&self, priority: Priority, tag: Option<&str>, message: &str) {
        self.format.render(priority, tag, message);
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.format.flush()
    }
}
