//! Tests for the pretty format.

use prettylog::format::{CHUNK_SIZE, FormatStrategy, PrettyFormat, chunk_bytes};
use prettylog::{LogSink, Printer, Priority, TagContext};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Capture(Mutex<Vec<String>>);

impl Capture {
    fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl LogSink for Capture {
    fn log(&self, _priority: Priority, _tag: Option<&str>, line: &str) {
        self.0.lock().unwrap().push(line.to_string());
    }
}

fn render(format: prettylog::format::PrettyBuilder, message: &str) -> Vec<String> {
    let sink = Arc::new(Capture::default());
    let format = format.sink(sink.clone()).build();
    format.render(Priority::Debug, Some("[t]"), message);
    sink.lines()
}

fn plain() -> prettylog::format::PrettyBuilder {
    PrettyFormat::builder().show_thread_info(false)
}

fn content(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|l| l.strip_prefix("│ "))
        .map(ToString::to_string)
        .collect()
}

#[test]
fn single_line_is_three_lines() {
    let lines = render(plain(), "hello");
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with('┌'));
    assert_eq!(lines[1], "│ hello");
    assert!(lines[2].starts_with('└'));
}

#[test]
fn thread_info_adds_two_lines() {
    let lines = render(PrettyFormat::builder(), "a\nb\nc");
    assert_eq!(lines.len(), 2 + 2 + 3);
    assert!(lines[1].starts_with("│ Thread: "));
    assert!(lines[2].starts_with('├'));
    assert_eq!(content(&lines[3..6]), ["a", "b", "c"]);
}

#[test]
fn empty_message_is_one_blank_line() {
    let lines = render(plain(), "");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "│ ");
}

#[test]
fn message_at_limit_is_split_on_lines() {
    let message = format!("{}\n{}", "a".repeat(1999), "b".repeat(2000));
    assert_eq!(message.len(), CHUNK_SIZE);
    let lines = render(plain(), &message);
    assert_eq!(lines.len(), 4);
}

#[test]
fn long_message_is_chunked() {
    let message = "x".repeat(10_000);
    let lines = render(plain(), &message);
    // ceil(10000 / 4000) = 3 chunks
    assert_eq!(lines.len(), 2 + 3);
    assert_eq!(content(&lines).concat(), message);
}

#[test]
fn one_byte_over_limit_is_two_chunks() {
    let message = "y".repeat(CHUNK_SIZE + 1);
    let lines = render(plain(), &message);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[2], "│ y");
}

#[test]
fn chunks_concatenate_to_original_bytes() {
    // 3-byte chars: offset 4000 falls inside a character
    let message = "€".repeat(1400);
    let chunks = chunk_bytes(&message, false);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].len(), CHUNK_SIZE);
    assert_eq!(chunks.concat(), message.as_bytes());

    let lines = render(plain(), &message);
    assert!(lines[1].ends_with('\u{FFFD}'));
}

#[test]
fn utf8_boundaries_keep_chunks_decodable() {
    let message = "€".repeat(1400);
    let lines = render(plain().utf8_boundaries(true), &message);
    assert_eq!(content(&lines).concat(), message);
    assert!(lines.iter().all(|l| !l.contains('\u{FFFD}')));
}

#[test]
fn method_section_without_printer_frames() {
    // Rendered directly, so no printer frame exists to anchor the stack walk.
    let lines = render(plain().method_count(2), "m");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with('├'));
}

#[test]
fn method_offset_is_kept() {
    let format = PrettyFormat::builder().method_offset(3).build();
    assert_eq!(format.method_offset(), 3);
}

#[inline(never)]
fn log_from_helper(printer: &Printer) {
    printer.i(&TagContext::new(), "traced", &[]);
}

#[test]
fn method_lines_walk_back_from_the_caller() {
    let sink = Arc::new(Capture::default());
    let printer = Printer::builder()
        .console()
        .show_thread_info(false)
        .method_count(2)
        .sink(sink.clone())
        .done()
        .build();

    log_from_helper(&printer);

    // top, two frames, divider, message, bottom
    let lines = sink.lines();
    assert_eq!(lines.len(), 6, "{lines:#?}");
    assert!(lines[0].starts_with('┌'));
    assert!(lines[1].starts_with("│ ") && !lines[1].starts_with("│  "), "{}", lines[1]);
    assert!(lines[2].starts_with("│    ") && !lines[2].starts_with("│     "), "{}", lines[2]);
    assert!(lines[2].contains(".log_from_helper  (pretty.rs:"), "{}", lines[2]);
    assert!(
        lines[1].contains(".method_lines_walk_back_from_the_caller  (pretty.rs:"),
        "{}",
        lines[1]
    );
    assert!(lines[3].starts_with('├'));
    assert_eq!(lines[4], "│ traced");
    assert!(lines[5].starts_with('└'));
}
