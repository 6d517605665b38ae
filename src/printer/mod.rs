//! The dispatcher: resolves a record's tag and message once, then fans the
//! result out to every registered adapter.
//!
//! One mutex covers resolution and fan-out, so lines from concurrent calls
//! never interleave and adapter registration cannot race with logging.

mod adapter;
mod builder;
mod context;
mod from_config;
mod record;

pub use adapter::{Adapter, LogAdapter};
pub use builder::{ConsoleBuilder, DiskBuilder, PrinterBuilder};
pub use context::TagContext;
pub use record::LogRecord;

use crate::callsite::{CallSite, stack};
use crate::cause;
use crate::fmt::{self, Arg};
use crate::level::Priority;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Substituted when a message is absent, empty, or fails to format.
pub const EMPTY_MESSAGE: &str = "Empty/NULL log message";
/// Tag used when no call site can be determined.
pub const UNKNOWN_TAG: &str = "UNKNOWN";

#[derive(Default)]
struct State {
    adapters: Vec<Arc<dyn LogAdapter>>,
    internal_layers: usize,
}

#[derive(Default)]
pub struct Printer {
    state: Mutex<State>,
}

impl std::fmt::Debug for Printer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("Printer")
            .field("adapters", &state.adapters.len())
            .field("internal_layers", &state.internal_layers)
            .finish()
    }
}

impl Printer {
    /// A printer with no adapters; records go nowhere until one is added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> PrinterBuilder {
        PrinterBuilder::new()
    }

    /// A panic inside an adapter poisons the lock; logging carries on with the
    /// state as it was left.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolves and dispatches one record. Never fails and never panics on
    /// malformed input.
    pub fn log(&self, context: &TagContext, record: &LogRecord<'_>) {
        let state = self.lock();
        let tag = resolve_tag(context, record, state.internal_layers);
        let message = resolve_message(record);

        for adapter in &state.adapters {
            if adapter.is_loggable(record.priority, Some(&tag)) {
                adapter.log(record.priority, Some(&tag), &message);
            }
        }
    }

    /// Logs `message` under `tag` exactly as given, skipping tag resolution.
    pub fn log_with_tag(&self, priority: Priority, tag: &str, message: &str) {
        let state = self.lock();
        let message = if message.is_empty() { EMPTY_MESSAGE } else { message };
        for adapter in &state.adapters {
            if adapter.is_loggable(priority, Some(tag)) {
                adapter.log(priority, Some(tag), message);
            }
        }
    }

    #[track_caller]
    fn log_at(&self, context: &TagContext, priority: Priority, message: &str, args: &[Arg]) {
        let record = LogRecord::new(priority, message)
            .args(args)
            .call_site(CallSite::caller());
        self.log(context, &record);
    }

    #[track_caller]
    pub fn v(&self, context: &TagContext, message: &str, args: &[Arg]) {
        self.log_at(context, Priority::Verbose, message, args);
    }

    #[track_caller]
    pub fn d(&self, context: &TagContext, message: &str, args: &[Arg]) {
        self.log_at(context, Priority::Debug, message, args);
    }

    #[track_caller]
    pub fn i(&self, context: &TagContext, message: &str, args: &[Arg]) {
        self.log_at(context, Priority::Info, message, args);
    }

    #[track_caller]
    pub fn w(&self, context: &TagContext, message: &str, args: &[Arg]) {
        self.log_at(context, Priority::Warn, message, args);
    }

    #[track_caller]
    pub fn e(&self, context: &TagContext, message: &str, args: &[Arg]) {
        self.log_at(context, Priority::Error, message, args);
    }

    #[track_caller]
    pub fn wtf(&self, context: &TagContext, message: &str, args: &[Arg]) {
        self.log_at(context, Priority::Assert, message, args);
    }

    /// Duplicates are allowed and fire once per registration.
    pub fn add_adapter(&self, adapter: impl LogAdapter + 'static) {
        self.lock().adapters.push(Arc::new(adapter));
    }

    pub fn clear_adapters(&self) {
        self.lock().adapters.clear();
    }

    #[must_use]
    pub fn adapter_count(&self) -> usize {
        self.lock().adapters.len()
    }

    #[must_use]
    pub fn internal_layers(&self) -> usize {
        self.lock().internal_layers
    }

    /// Wrapper frames between application code and this printer; used by the
    /// stack-walking fallback.
    pub fn set_internal_layers(&self, layers: usize) {
        self.lock().internal_layers = layers;
    }

    /// Replaces the adapters and layer count with those of `builder`.
    pub fn install(&self, builder: PrinterBuilder) {
        let (adapters, internal_layers) = builder.into_parts();
        let mut state = self.lock();
        state.adapters = adapters;
        state.internal_layers = internal_layers;
    }

    /// Flushes every adapter registered at the time of the call. The lock is
    /// released first, so other threads keep logging while a slow sink drains.
    ///
    /// # Errors
    /// The first error reported by an adapter; the rest are still flushed.
    pub fn flush(&self) -> Result<(), crate::Error> {
        let adapters = self.lock().adapters.clone();
        let mut first = None;
        for adapter in &adapters {
            if let Err(e) = adapter.flush() {
                first.get_or_insert(e);
            }
        }
        first.map_or(Ok(()), Err)
    }
}

fn resolve_tag(context: &TagContext, record: &LogRecord<'_>, internal_layers: usize) -> String {
    if let Some(tag) = record.tag.filter(|t| !t.is_empty()) {
        return format!("[{tag}]");
    }
    if let Some(tag) = context.take_once() {
        return format!("[{tag}]");
    }
    if let Some(site) = &record.call_site {
        return site.tag();
    }

    let frames = stack::capture();
    stack::caller_frame(&frames, std::any::type_name::<Printer>(), internal_layers)
        .map_or_else(|| UNKNOWN_TAG.to_string(), stack::Frame::tag)
}

fn resolve_message(record: &LogRecord<'_>) -> String {
    let body = record.message.map(|template| {
        if record.args.is_empty() {
            template.to_string()
        } else {
            fmt::format(template, record.args).unwrap_or_else(|_| EMPTY_MESSAGE.to_string())
        }
    });
    let cause = record
        .cause
        .map(cause::render)
        .filter(|rendered| !rendered.is_empty());

    let message = match (body, cause) {
        (Some(body), Some(cause)) => format!("{body} : {cause}"),
        (Some(body), None) => body,
        (None, Some(cause)) => cause,
        (None, None) => String::new(),
    };

    if message.is_empty() {
        EMPTY_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn message(record: &LogRecord<'_>) -> String {
        resolve_message(record)
    }

    #[test]
    fn template_verbatim_without_args() {
        let record = LogRecord::new(Priority::Info, "100% done");
        assert_eq!(message(&record), "100% done");
    }

    #[test]
    fn format_error_becomes_sentinel() {
        let args = [Arg::from(1)];
        let record = LogRecord::new(Priority::Info, "%d and %d").args(&args);
        assert_eq!(message(&record), EMPTY_MESSAGE);
    }

    #[test]
    fn cause_joins_message() {
        let err = io::Error::other("disk full");
        let record = LogRecord::new(Priority::Error, "save failed").cause(&err);
        assert_eq!(message(&record), "save failed : disk full");
        assert_eq!(message(&LogRecord::from_cause(Priority::Error, &err)), "disk full");
    }

    #[test]
    fn suppressed_cause_leaves_message_alone() {
        let err = io::Error::from(io::ErrorKind::HostUnreachable);
        let record = LogRecord::new(Priority::Error, "offline").cause(&err);
        assert_eq!(message(&record), "offline");
        assert_eq!(message(&LogRecord::from_cause(Priority::Error, &err)), EMPTY_MESSAGE);
    }

    #[test]
    fn empty_message_becomes_sentinel() {
        assert_eq!(message(&LogRecord::new(Priority::Debug, "")), EMPTY_MESSAGE);
    }

    #[test]
    fn tag_precedence() {
        let ctx = TagContext::new();
        let site = CallSite::new("app", Some("app::Cart::pay"), "src/cart.rs", 9);

        ctx.set_once("once");
        let explicit = LogRecord::new(Priority::Info, "m").tag("net").call_site(site);
        assert_eq!(resolve_tag(&ctx, &explicit, 0), "[net]");
        assert!(ctx.has_pending());

        let untagged = LogRecord::new(Priority::Info, "m").call_site(site);
        assert_eq!(resolve_tag(&ctx, &untagged, 0), "[once]");
        assert_eq!(resolve_tag(&ctx, &untagged, 0), "Cart[pay][9]");
    }
}
