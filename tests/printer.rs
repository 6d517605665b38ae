//! Tests for tag and message resolution and adapter fan-out.

use prettylog::printer::{EMPTY_MESSAGE, UNKNOWN_TAG};
use prettylog::{
    Adapter, Arg, LogAdapter, LogRecord, LogSink, PrettyFormat, Printer, Priority, TagContext,
};
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

type Entry = (Priority, Option<String>, String);

#[derive(Default, Clone)]
struct Recorder(Arc<Mutex<Vec<Entry>>>);

impl Recorder {
    fn entries(&self) -> Vec<Entry> {
        self.0.lock().unwrap().clone()
    }

    fn last(&self) -> Entry {
        self.entries().pop().unwrap()
    }
}

impl LogAdapter for Recorder {
    fn is_loggable(&self, _priority: Priority, _tag: Option<&str>) -> bool {
        true
    }

    fn log(&self, priority: Priority, tag: Option<&str>, message: &str) {
        assert_ne!(message, "boom", "adapter failure");
        self.0
            .lock()
            .unwrap()
            .push((priority, tag.map(ToString::to_string), message.to_string()));
    }
}

#[derive(Default)]
struct Capture(Mutex<Vec<String>>);

impl LogSink for Capture {
    fn log(&self, _priority: Priority, _tag: Option<&str>, line: &str) {
        self.0.lock().unwrap().push(line.to_string());
    }
}

fn recording() -> (Printer, Recorder) {
    let recorder = Recorder::default();
    let printer = Printer::builder().adapter(recorder.clone()).build();
    (printer, recorder)
}

#[test]
fn explicit_tag_wins() {
    let (printer, rec) = recording();
    let ctx = TagContext::new();
    ctx.set_once("once");

    printer.log(&ctx, &LogRecord::new(Priority::Info, "m").tag("net"));
    assert_eq!(rec.last().1.as_deref(), Some("[net]"));
    // The one-shot tag is still waiting for an untagged call.
    assert!(ctx.has_pending());
}

#[test]
fn one_shot_tag_applies_once() {
    let (printer, rec) = recording();
    let ctx = TagContext::new();
    ctx.set_once("db");

    printer.i(&ctx, "first", &[]);
    let line = line!() + 1;
    printer.i(&ctx, "second", &[]);

    let entries = rec.entries();
    assert_eq!(entries[0].1.as_deref(), Some("[db]"));
    assert_eq!(entries[1].1, Some(format!("printer[{line}]")));
}

#[test]
fn empty_explicit_tag_is_ignored() {
    let (printer, rec) = recording();
    let ctx = TagContext::new();
    ctx.set_once("db");
    printer.log(&ctx, &LogRecord::new(Priority::Info, "m").tag(""));
    assert_eq!(rec.last().1.as_deref(), Some("[db]"));
}

#[test]
fn macro_call_site_names_function() {
    let (printer, rec) = recording();
    let site = prettylog::call_site!();
    printer.log(
        &TagContext::new(),
        &LogRecord::new(Priority::Debug, "m").call_site(site),
    );
    assert_eq!(
        rec.last().1,
        Some(format!("printer[macro_call_site_names_function][{}]", site.line))
    );
}

#[test]
fn record_without_call_site_still_gets_a_tag() {
    let (printer, rec) = recording();
    printer.log(&TagContext::new(), &LogRecord::new(Priority::Debug, "m"));
    let tag = rec.last().1.unwrap();
    assert!(tag == UNKNOWN_TAG || tag.ends_with(']'), "{tag}");
}

#[test]
fn printf_arguments() {
    let (printer, rec) = recording();
    let ctx = TagContext::new();
    printer.d(&ctx, "%s=%d (%.1f%%)", &[Arg::from("hits"), Arg::from(42), Arg::from(97.5)]);
    assert_eq!(rec.last().2, "hits=42 (97.5%)");
}

#[test]
fn bad_template_uses_sentinel() {
    let (printer, rec) = recording();
    let ctx = TagContext::new();
    printer.e(&ctx, "%d", &[Arg::from("text")]);
    assert_eq!(rec.last().2, EMPTY_MESSAGE);
    printer.e(&ctx, "%s", &[Arg::from(1), Arg::from(2)]);
    assert_eq!(rec.last().2, EMPTY_MESSAGE);
}

#[test]
fn error_without_message_renders_cause() {
    let (printer, rec) = recording();
    let err = io::Error::other("connection reset");
    printer.log(&TagContext::new(), &LogRecord::from_cause(Priority::Error, &err));

    let (priority, _, message) = rec.last();
    assert_eq!(priority, Priority::Error);
    assert_eq!(message, "connection reset");
}

#[test]
fn message_and_cause_are_joined() {
    let (printer, rec) = recording();
    let err = io::Error::other("disk full");
    let args = [Arg::from("a.txt")];
    let record = LogRecord::new(Priority::Error, "saving %s")
        .args(&args)
        .cause(&err);
    printer.log(&TagContext::new(), &record);
    assert_eq!(rec.last().2, "saving a.txt : disk full");
}

#[test]
fn unreachable_host_cause_is_suppressed() {
    let (printer, rec) = recording();
    let err = io::Error::from(io::ErrorKind::HostUnreachable);
    printer.log(&TagContext::new(), &LogRecord::from_cause(Priority::Error, &err));
    assert_eq!(rec.last().2, EMPTY_MESSAGE);
}

#[test]
fn adapter_priority_filter() {
    let sink = Arc::new(Capture::default());
    let format = PrettyFormat::builder()
        .show_thread_info(false)
        .sink(sink.clone())
        .build();
    let printer = Printer::new();
    printer.add_adapter(Adapter::new(format).min_priority(Priority::Warn));

    let ctx = TagContext::new();
    printer.i(&ctx, "quiet", &[]);
    assert!(sink.0.lock().unwrap().is_empty());
    printer.w(&ctx, "loud", &[]);
    assert_eq!(sink.0.lock().unwrap().len(), 3);
}

#[test]
fn duplicates_fire_twice_and_clear_removes_all() {
    let recorder = Recorder::default();
    let printer = Printer::new();
    printer.add_adapter(recorder.clone());
    printer.add_adapter(recorder.clone());
    assert_eq!(printer.adapter_count(), 2);

    let ctx = TagContext::new();
    printer.v(&ctx, "twice", &[]);
    assert_eq!(recorder.entries().len(), 2);

    printer.clear_adapters();
    printer.v(&ctx, "gone", &[]);
    assert_eq!(recorder.entries().len(), 2);
    assert_eq!(printer.adapter_count(), 0);
}

#[test]
fn concurrent_records_do_not_interleave() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    let sink = Arc::new(Capture::default());
    let printer = Printer::builder()
        .console()
        .show_thread_info(false)
        .sink(sink.clone())
        .done()
        .build();

    thread::scope(|s| {
        for t in 0..THREADS {
            let printer = &printer;
            s.spawn(move || {
                let ctx = TagContext::new();
                for i in 0..PER_THREAD {
                    printer.d(&ctx, "%d-%d\nsecond line", &[Arg::from(t), Arg::from(i)]);
                }
            });
        }
    });

    let lines = sink.0.lock().unwrap().clone();
    assert_eq!(lines.len(), THREADS * PER_THREAD * 4);
    for block in lines.chunks(4) {
        assert!(block[0].starts_with('┌'));
        assert!(block[1].starts_with("│ ") && block[1].contains('-'));
        assert_eq!(block[2], "│ second line");
        assert!(block[3].starts_with('└'));
    }
}

#[test]
fn poisoned_lock_is_recovered() {
    let (printer, rec) = recording();
    let ctx = TagContext::new();

    let result = panic::catch_unwind(AssertUnwindSafe(|| printer.i(&ctx, "boom", &[])));
    assert!(result.is_err());

    printer.i(&ctx, "after", &[]);
    assert_eq!(rec.last().2, "after");
}

#[test]
fn install_replaces_adapters() {
    let (printer, _) = recording();
    let fresh = Recorder::default();
    printer.install(Printer::builder().internal_layers(2).adapter(fresh.clone()));
    assert_eq!(printer.adapter_count(), 1);
    assert_eq!(printer.internal_layers(), 2);

    printer.log_with_tag(Priority::Info, "raw", "as is");
    assert_eq!(fresh.last(), (Priority::Info, Some("raw".to_string()), "as is".to_string()));
}

/// Flush blocks until the test releases it.
struct HeldFlush {
    started: mpsc::Sender<()>,
    release: Mutex<mpsc::Receiver<()>>,
}

impl LogAdapter for HeldFlush {
    fn is_loggable(&self, _priority: Priority, _tag: Option<&str>) -> bool {
        true
    }

    fn log(&self, _priority: Priority, _tag: Option<&str>, _message: &str) {}

    fn flush(&self) -> Result<(), prettylog::Error> {
        let timeout = Duration::from_secs(5);
        self.started.send(()).unwrap();
        self.release
            .lock()
            .unwrap()
            .recv_timeout(timeout)
            .map_err(|_| prettylog::Error::FlushTimeout(timeout))
    }
}

#[test]
fn logging_continues_while_flush_waits() {
    let (started_tx, started_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let rec = Recorder::default();
    let printer = Printer::builder()
        .adapter(rec.clone())
        .adapter(HeldFlush {
            started: started_tx,
            release: Mutex::new(release_rx),
        })
        .build();

    thread::scope(|s| {
        let flusher = s.spawn(|| printer.flush());
        started_rx.recv().unwrap();

        printer.i(&TagContext::new(), "during flush", &[]);
        assert_eq!(rec.last().2, "during flush");

        release_tx.send(()).unwrap();
        assert!(flusher.join().unwrap().is_ok());
    });
}
