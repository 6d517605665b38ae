//! prettylog's own diagnostics, printed through a separate console-only
//! printer so a failing disk writer can still report itself.
//!
//! The printer is created on first use with a `Warn` threshold;
//! [`init_with_config`] swaps in the configured threshold, even when config
//! loading already produced diagnostics.

use crate::config::Config;
use crate::level::Priority;
use crate::printer::{LogRecord, Printer, PrinterBuilder, TagContext};
use std::sync::OnceLock;

static INTERNAL_PRINTER: OnceLock<Printer> = OnceLock::new();

/// Applies `[internal] level` from `config`.
pub fn init_with_config(config: &Config) {
    // Parsed here without `Config::internal_level`, which may itself log.
    let level = config.internal.level.parse().unwrap_or(Priority::Warn);
    printer().install(builder(level));
    debug("INTERNAL", &format!("Internal log level: {level}"));
}

fn builder(level: Priority) -> PrinterBuilder {
    Printer::builder()
        .level(level)
        .console()
        .show_thread_info(false)
        .done()
}

fn printer() -> &'static Printer {
    INTERNAL_PRINTER.get_or_init(|| builder(Priority::Warn).build())
}

fn log(priority: Priority, scope: &str, msg: &str) {
    let record = LogRecord::new(priority, msg).tag(scope);
    printer().log(&TagContext::new(), &record);
}

/// High-volume instrumentation, shown only at `Verbose`.
pub fn trace(scope: &str, msg: &str) {
    log(Priority::Verbose, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Priority::Debug, scope, msg);
}

/// Non-fatal anomalies such as an unlistable log directory.
pub fn warn(scope: &str, msg: &str) {
    log(Priority::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Priority::Error, scope, msg);
}
