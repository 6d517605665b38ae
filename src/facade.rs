//! Process-wide logging entry points.
//!
//! One [`Printer`] serves the whole process. Each thread keeps its own
//! [`TagContext`], so `t("net")` on one thread tags only that thread's next
//! call. Until [`init`] or [`add_adapter`] runs, records go nowhere.
//!
//! Every entry point calls the printer directly, so exactly one facade frame
//! sits between application code and the printer.

use crate::callsite::CallSite;
use crate::config::Config;
use crate::fmt::{Arg, pretty_json, pretty_xml};
use crate::internal;
use crate::level::Priority;
use crate::printer::{LogAdapter, LogRecord, Printer, PrinterBuilder, TagContext};
use std::error::Error;
use std::sync::OnceLock;

pub const EMPTY_JSON: &str = "Empty/Null json content";
pub const INVALID_JSON: &str = "Invalid Json";
pub const EMPTY_XML: &str = "Empty/Null xml content";
pub const INVALID_XML: &str = "Invalid xml";

const FACADE_LAYERS: usize = 1;

static PRINTER: OnceLock<Printer> = OnceLock::new();

thread_local! {
    static CONTEXT: TagContext = const { TagContext::new() };
}

/// The process-wide printer.
pub fn printer() -> &'static Printer {
    PRINTER.get_or_init(|| Printer::builder().internal_layers(FACADE_LAYERS).build())
}

/// Replaces the global adapters with those enabled in `config`.
pub fn init(config: &Config) {
    internal::init_with_config(config);
    printer().install(PrinterBuilder::from_config(config, FACADE_LAYERS));
}

pub fn add_adapter(adapter: impl LogAdapter + 'static) {
    printer().add_adapter(adapter);
}

pub fn clear_adapters() {
    printer().clear_adapters();
}

/// Tags the calling thread's next untagged log call.
pub fn t(tag: impl Into<String>) {
    CONTEXT.with(|ctx| ctx.set_once(tag));
}

/// Waits for every adapter's sink to drain.
///
/// # Errors
/// The first sink error, e.g. a disk writer that did not finish in time.
pub fn flush() -> Result<(), crate::Error> {
    printer().flush()
}

/// A context holding the thread's pending tag, moved out only when `tag` will
/// not take precedence anyway.
fn context_for(tag: Option<&str>) -> TagContext {
    let context = TagContext::new();
    if tag.is_none_or(str::is_empty)
        && let Some(pending) = CONTEXT.with(TagContext::take_once)
    {
        context.set_once(pending);
    }
    context
}

/// Entry point of the logging macros.
#[doc(hidden)]
pub fn log_at(
    priority: Priority,
    tag: Option<&str>,
    cause: Option<&(dyn Error + 'static)>,
    message: Option<&str>,
    args: &[Arg],
    call_site: CallSite,
) {
    let record = LogRecord {
        priority,
        tag,
        message,
        cause,
        args,
        call_site: Some(call_site),
    };
    printer().log(&context_for(tag), &record);
}

/// Logs without printf substitution.
#[track_caller]
pub fn log(
    priority: Priority,
    tag: Option<&str>,
    message: Option<&str>,
    cause: Option<&(dyn Error + 'static)>,
) {
    let record = LogRecord {
        priority,
        tag,
        message,
        cause,
        args: &[],
        call_site: Some(CallSite::caller()),
    };
    printer().log(&context_for(tag), &record);
}

#[track_caller]
pub fn v(message: &str, args: &[Arg]) {
    printer().v(&context_for(None), message, args);
}

#[track_caller]
pub fn d(message: &str, args: &[Arg]) {
    printer().d(&context_for(None), message, args);
}

#[track_caller]
pub fn i(message: &str, args: &[Arg]) {
    printer().i(&context_for(None), message, args);
}

#[track_caller]
pub fn w(message: &str, args: &[Arg]) {
    printer().w(&context_for(None), message, args);
}

#[track_caller]
pub fn e(message: &str, args: &[Arg]) {
    printer().e(&context_for(None), message, args);
}

/// For conditions that should never happen.
#[track_caller]
pub fn wtf(message: &str, args: &[Arg]) {
    printer().wtf(&context_for(None), message, args);
}

/// Pretty-prints a JSON object or array at `Debug`; anything else is reported
/// at `Error`.
#[track_caller]
pub fn json(text: &str) {
    let (priority, message) = if text.trim().is_empty() {
        (Priority::Debug, EMPTY_JSON.to_string())
    } else {
        pretty_json(text).map_or_else(
            || (Priority::Error, INVALID_JSON.to_string()),
            |pretty| (Priority::Debug, pretty),
        )
    };
    let record = LogRecord::new(priority, &message).call_site(CallSite::caller());
    printer().log(&context_for(None), &record);
}

/// Re-indents well-formed XML at `Debug`; anything else is reported at `Error`.
#[track_caller]
pub fn xml(text: &str) {
    let (priority, message) = if text.trim().is_empty() {
        (Priority::Debug, EMPTY_XML.to_string())
    } else {
        pretty_xml(text).map_or_else(
            || (Priority::Error, INVALID_XML.to_string()),
            |pretty| (Priority::Debug, pretty),
        )
    };
    let record = LogRecord::new(priority, &message).call_site(CallSite::caller());
    printer().log(&context_for(None), &record);
}
