//! Stepwise construction of a [`Printer`] with the built-in adapters.

use super::{Adapter, LogAdapter, Printer};
use crate::format::{CsvFormat, PrettyBuilder};
use crate::level::Priority;
use crate::rotation::FileRotationPolicy;
use crate::sink::{DEFAULT_FLUSH_TIMEOUT, DiskSink, LogSink};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Collects adapters in registration order.
pub struct PrinterBuilder {
    min_priority: Priority,
    internal_layers: usize,
    adapters: Vec<Box<dyn LogAdapter>>,
}

impl Default for PrinterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PrinterBuilder {
    /// Built-in adapters pass everything unless [`Self::level`] says otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_priority: Priority::Verbose,
            internal_layers: 0,
            adapters: Vec::new(),
        }
    }

    /// Minimum priority for built-in adapters added after this call.
    #[must_use]
    pub const fn level(mut self, priority: Priority) -> Self {
        self.min_priority = priority;
        self
    }

    /// Wrapper frames between application code and the printer. Set it before
    /// adding a console adapter so the pretty format skips the same frames.
    #[must_use]
    pub const fn internal_layers(mut self, layers: usize) -> Self {
        self.internal_layers = layers;
        self
    }

    #[must_use]
    pub fn console(self) -> ConsoleBuilder {
        let format = PrettyBuilder::default().internal_layers(self.internal_layers);
        let min_priority = self.min_priority;
        ConsoleBuilder {
            parent: self,
            format,
            min_priority,
        }
    }

    #[must_use]
    pub fn disk(self) -> DiskBuilder {
        let min_priority = self.min_priority;
        DiskBuilder {
            parent: self,
            dir: None,
            timestamp_format: None,
            flush_timeout: DEFAULT_FLUSH_TIMEOUT,
            sink: None,
            min_priority,
        }
    }

    #[must_use]
    pub fn adapter(mut self, adapter: impl LogAdapter + 'static) -> Self {
        self.adapters.push(Box::new(adapter));
        self
    }

    pub(super) fn into_parts(self) -> (Vec<Arc<dyn LogAdapter>>, usize) {
        let adapters: Vec<Arc<dyn LogAdapter>> =
            self.adapters.into_iter().map(Arc::from).collect();
        (adapters, self.internal_layers)
    }

    #[must_use]
    pub fn build(self) -> Printer {
        let (adapters, internal_layers) = self.into_parts();
        Printer {
            state: Mutex::new(super::State {
                adapters,
                internal_layers,
            }),
        }
    }
}

/// Pretty format options for a console adapter.
pub struct ConsoleBuilder {
    parent: PrinterBuilder,
    format: PrettyBuilder,
    min_priority: Priority,
}

impl ConsoleBuilder {
    #[must_use]
    pub fn show_thread_info(mut self, show: bool) -> Self {
        self.format = self.format.show_thread_info(show);
        self
    }

    #[must_use]
    pub fn method_count(mut self, count: usize) -> Self {
        self.format = self.format.method_count(count);
        self
    }

    #[must_use]
    pub fn method_offset(mut self, offset: usize) -> Self {
        self.format = self.format.method_offset(offset);
        self
    }

    #[must_use]
    pub fn utf8_boundaries(mut self, enabled: bool) -> Self {
        self.format = self.format.utf8_boundaries(enabled);
        self
    }

    #[must_use]
    pub const fn min_priority(mut self, priority: Priority) -> Self {
        self.min_priority = priority;
        self
    }

    /// Sends the bordered lines somewhere other than the console.
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.format = self.format.sink(sink);
        self
    }

    #[must_use]
    pub fn done(self) -> PrinterBuilder {
        let adapter = Adapter::new(self.format.build()).min_priority(self.min_priority);
        self.parent.adapter(adapter)
    }
}

/// CSV format options for a disk adapter.
pub struct DiskBuilder {
    parent: PrinterBuilder,
    dir: Option<PathBuf>,
    timestamp_format: Option<String>,
    flush_timeout: Duration,
    sink: Option<Arc<dyn LogSink>>,
    min_priority: Priority,
}

impl DiskBuilder {
    /// Log directory; defaults to [`crate::rotation::default_dir`].
    #[must_use]
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    #[must_use]
    pub const fn flush_timeout(mut self, timeout: Duration) -> Self {
        self.flush_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn min_priority(mut self, priority: Priority) -> Self {
        self.min_priority = priority;
        self
    }

    /// Replaces the disk writer; `dir` and `flush_timeout` are then ignored.
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Starts the disk writer (unless a sink was supplied) and registers the adapter.
    #[must_use]
    pub fn done(self) -> PrinterBuilder {
        let sink = self.sink.unwrap_or_else(|| {
            let policy = self
                .dir
                .map_or_else(FileRotationPolicy::with_default_dir, FileRotationPolicy::new);
            Arc::new(DiskSink::new(policy).flush_timeout(self.flush_timeout))
        });

        let mut format = CsvFormat::builder().sink(sink);
        if let Some(ts) = self.timestamp_format {
            format = format.timestamp_format(ts);
        }

        let adapter = Adapter::new(format.build()).min_priority(self.min_priority);
        self.parent.adapter(adapter)
    }
}
