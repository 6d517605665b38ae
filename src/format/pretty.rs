//! Bordered multi-line output for reading logs on a console.
//!
//! ```text
//! ┌──────────────────────────────
//! │ Thread: main
//! ├┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄
//! │ Cart.checkout  (cart.rs:88)
//! ├┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄
//! │ message line
//! └──────────────────────────────
//! ```

use super::FormatStrategy;
use crate::callsite::stack;
use crate::level::Priority;
use crate::printer::Printer;
use crate::sink::{ConsoleSink, LogSink};
use std::sync::Arc;
use std::thread;

/// Largest message, in bytes, emitted line by line. Larger messages are cut into
/// chunks of this size.
pub const CHUNK_SIZE: usize = 4000;

const VERTICAL_LINE: char = '│';
const TOP_BORDER: &str = "┌────────────────────────────────────────────────────────────────────────────────────────────────────────────────";
const MIDDLE_BORDER: &str = "├┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄";
const BOTTOM_BORDER: &str = "└────────────────────────────────────────────────────────────────────────────────────────────────────────────────";

/// Bordered formatter; see the module docs for the layout.
pub struct PrettyFormat {
    show_thread_info: bool,
    method_count: usize,
    method_offset: usize,
    internal_layers: usize,
    utf8_boundaries: bool,
    sink: Arc<dyn LogSink>,
}

impl std::fmt::Debug for PrettyFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyFormat")
            .field("show_thread_info", &self.show_thread_info)
            .field("method_count", &self.method_count)
            .field("method_offset", &self.method_offset)
            .field("internal_layers", &self.internal_layers)
            .field("utf8_boundaries", &self.utf8_boundaries)
            .finish_non_exhaustive()
    }
}

impl Default for PrettyFormat {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PrettyFormat {
    #[must_use]
    pub fn builder() -> PrettyBuilder {
        PrettyBuilder::default()
    }

    /// Stored for configuration round-trips; rendering does not use it.
    #[must_use]
    pub const fn method_offset(&self) -> usize {
        self.method_offset
    }

    #[must_use]
    pub const fn method_count(&self) -> usize {
        self.method_count
    }

    /// All lines `render` would emit, in order.
    #[must_use]
    pub fn lines(&self, message: &str) -> Vec<String> {
        let mut lines = vec![TOP_BORDER.to_string()];

        if self.show_thread_info {
            lines.push(format!("{VERTICAL_LINE} Thread: {}", thread_name()));
            lines.push(MIDDLE_BORDER.to_string());
        }

        if self.method_count > 0 {
            lines.extend(self.method_lines());
            lines.push(MIDDLE_BORDER.to_string());
        }

        if message.len() <= CHUNK_SIZE {
            lines.extend(
                split_lines(message)
                    .into_iter()
                    .map(|line| format!("{VERTICAL_LINE} {line}")),
            );
        } else {
            lines.extend(
                chunk_bytes(message, self.utf8_boundaries)
                    .into_iter()
                    .map(|chunk| format!("{VERTICAL_LINE} {}", String::from_utf8_lossy(chunk))),
            );
        }

        lines.push(BOTTOM_BORDER.to_string());
        lines
    }

    fn method_lines(&self) -> Vec<String> {
        let frames = stack::capture();
        let owner = std::any::type_name::<Printer>();
        let Some(index) = stack::call_site_index(&frames, owner, self.internal_layers) else {
            return Vec::new();
        };

        let mut lines = Vec::new();
        let mut indent = String::new();
        for i in (index..index + self.method_count).rev() {
            let Some(frame) = frames.get(i) else {
                continue;
            };
            lines.push(format!(
                "{VERTICAL_LINE} {indent}{}.{}  ({}:{})",
                frame.simple_class_name(),
                frame.method_name(),
                frame.file_name(),
                frame.line.unwrap_or(0)
            ));
            indent.push_str("   ");
        }
        lines
    }
}

impl FormatStrategy for PrettyFormat {
    fn render(&self, priority: Priority, tag: Option<&str>, message: &str) {
        for line in self.lines(message) {
            self.sink.log(priority, tag, &line);
        }
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.sink.flush()
    }
}

fn thread_name() -> String {
    let current = thread::current();
    current
        .name()
        .map_or_else(|| format!("{:?}", current.id()), ToString::to_string)
}

/// Splits on `\n`, trimming a trailing `\r`. Trailing empty lines are dropped,
/// but an empty message still yields one line.
fn split_lines(message: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = message
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    while lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Consecutive byte chunks of at most [`CHUNK_SIZE`].
///
/// With `utf8_boundaries` off, chunks are cut at fixed offsets and may split a
/// multi-byte character. With it on, each cut moves back to the nearest char
/// boundary, so every chunk decodes cleanly. Either way the chunks concatenate
/// to the original bytes.
#[must_use]
pub fn chunk_bytes(message: &str, utf8_boundaries: bool) -> Vec<&[u8]> {
    let bytes = message.as_bytes();
    if !utf8_boundaries {
        return bytes.chunks(CHUNK_SIZE).collect();
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < bytes.len() {
        let mut end = (start + CHUNK_SIZE).min(bytes.len());
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        chunks.push(&bytes[start..end]);
        start = end;
    }
    chunks
}

#[derive(Clone)]
pub struct PrettyBuilder {
    show_thread_info: bool,
    method_count: usize,
    method_offset: usize,
    internal_layers: usize,
    utf8_boundaries: bool,
    sink: Option<Arc<dyn LogSink>>,
}

impl Default for PrettyBuilder {
    fn default() -> Self {
        Self {
            show_thread_info: true,
            method_count: 0,
            method_offset: 0,
            internal_layers: 0,
            utf8_boundaries: false,
            sink: None,
        }
    }
}

impl PrettyBuilder {
    #[must_use]
    pub const fn show_thread_info(mut self, show: bool) -> Self {
        self.show_thread_info = show;
        self
    }

    /// Number of caller frames printed above the message.
    #[must_use]
    pub const fn method_count(mut self, count: usize) -> Self {
        self.method_count = count;
        self
    }

    #[must_use]
    pub const fn method_offset(mut self, offset: usize) -> Self {
        self.method_offset = offset;
        self
    }

    /// Wrapper frames between the caller and the printer, skipped when locating
    /// the caller's frame.
    #[must_use]
    pub const fn internal_layers(mut self, layers: usize) -> Self {
        self.internal_layers = layers;
        self
    }

    #[must_use]
    pub const fn utf8_boundaries(mut self, enabled: bool) -> Self {
        self.utf8_boundaries = enabled;
        self
    }

    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub fn build(self) -> PrettyFormat {
        PrettyFormat {
            show_thread_info: self.show_thread_info,
            method_count: self.method_count,
            method_offset: self.method_offset,
            internal_layers: self.internal_layers,
            utf8_boundaries: self.utf8_boundaries,
            sink: self.sink.unwrap_or_else(|| Arc::new(ConsoleSink::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> PrettyFormat {
        PrettyFormat::builder().show_thread_info(false).build()
    }

    #[test]
    fn borders_are_full_width() {
        assert_eq!(TOP_BORDER.chars().count(), 113);
        assert_eq!(MIDDLE_BORDER.chars().count(), 113);
        assert_eq!(BOTTOM_BORDER.chars().count(), 113);
    }

    #[test]
    fn single_line_message() {
        let lines = plain().lines("hello");
        assert_eq!(lines, [TOP_BORDER, "│ hello", BOTTOM_BORDER]);
    }

    #[test]
    fn crlf_and_trailing_newlines() {
        let lines = plain().lines("a\r\nb\n\n");
        assert_eq!(lines[1..3], ["│ a", "│ b"]);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn thread_line_uses_name() {
        let format = PrettyFormat::builder().build();
        let lines = thread::Builder::new()
            .name("io-7".into())
            .spawn(move || format.lines("x"))
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(lines[1], "│ Thread: io-7");
        assert_eq!(lines[2], MIDDLE_BORDER);
    }

    #[test]
    fn aligned_chunks_never_split_chars() {
        let message = "é".repeat(2500);
        let chunks = chunk_bytes(&message, true);
        assert!(chunks.iter().all(|c| std::str::from_utf8(c).is_ok()));
        assert_eq!(chunks.concat(), message.as_bytes());
    }
}
