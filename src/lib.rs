#![forbid(unsafe_code)]

//! `prettylog` - bordered, call-site tagged logging with daily CSV files.
//!
//! A record passes through one [`Printer`], which resolves its tag and message
//! and fans it out to every registered adapter. The built-in adapters pair a
//! format with a sink:
//! - [`PrettyFormat`] draws a box around each message on the console
//! - [`CsvFormat`] appends `label,tag,message,timestamp` lines to one file per
//!   day, written by a background thread and pruned after seven days
//!
//! # Example
//!
//! ```no_run
//! use prettylog::{Arg, Printer, TagContext};
//!
//! let printer = Printer::builder()
//!     .console()
//!         .show_thread_info(false)
//!         .done()
//!     .disk()
//!         .dir("/tmp/app-logs")
//!         .done()
//!     .build();
//!
//! let ctx = TagContext::new();
//! printer.i(&ctx, "started with %d workers", &[Arg::from(4)]);
//!
//! ctx.set_once("net");
//! printer.w(&ctx, "retrying", &[]);
//! printer.flush().ok();
//! ```
//!
//! The [`facade`] module and the macros (`debug!`, `error!`, ...) wrap a
//! process-wide printer.
//!
//! # Features
//!
//! - `cli` (default): the `prettylog` binary

pub mod callsite;
pub mod cause;
pub mod config;
pub mod facade;
pub mod fmt;
pub mod format;
pub mod internal;
pub mod level;
pub mod printer;
pub mod rotation;
pub mod sink;

mod error;
mod macros;

#[cfg(feature = "cli")]
pub mod cli;

pub use callsite::CallSite;
pub use config::Config;
pub use error::Error;
pub use fmt::{Arg, FormatError};
pub use format::{CsvFormat, FormatStrategy, PrettyFormat};
pub use level::Priority;
pub use printer::{Adapter, LogAdapter, LogRecord, Printer, PrinterBuilder, TagContext};
pub use rotation::{FileRotationPolicy, ReconcileResult};
pub use sink::{ConsoleSink, DiskSink, LogSink};
