//! Format strategies turn one resolved record into one or more lines and hand
//! them to their sink.

mod csv;
mod pretty;

pub use csv::{CsvBuilder, CsvFormat, DEFAULT_TIMESTAMP_FORMAT};
pub use pretty::{CHUNK_SIZE, PrettyBuilder, PrettyFormat, chunk_bytes};

use crate::level::Priority;

pub trait FormatStrategy: Send + Sync {
    fn render(&self, priority: Priority, tag: Option<&str>, message: &str);

    /// Flushes the paired sink.
    ///
    /// # Errors
    /// Whatever the sink reports.
    fn flush(&self) -> Result<(), crate::Error>;
}
