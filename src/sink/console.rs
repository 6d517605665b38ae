//! Host console output in the `<label>/<tag>: <line>` shape of the platform log.

use super::LogSink;
use crate::level::Priority;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn prefix(priority: Priority, tag: Option<&str>) -> String {
        match tag {
            Some(tag) => format!("{}/{tag}: ", priority.label()),
            None => format!("{}: ", priority.label()),
        }
    }
}

impl LogSink for ConsoleSink {
    fn log(&self, priority: Priority, tag: Option<&str>, line: &str) {
        let prefix = Self::prefix(priority, tag);
        // Write errors (closed pipe) are ignored; there is nowhere to report them.
        if priority >= Priority::Warn {
            let _ = writeln!(io::stderr().lock(), "{prefix}{line}");
        } else {
            let _ = writeln!(io::stdout().lock(), "{prefix}{line}");
        }
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
