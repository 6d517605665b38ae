//! Frame walking over the current thread's backtrace.
//!
//! Frames come from `std::backtrace::Backtrace`, parsed from its rendered form.
//! Release builds without debug info produce frames without symbols; callers
//! treat a missing call site as unknown instead of guessing.

use super::path;
use regex::Regex;
use std::backtrace::Backtrace;
use std::path::Path;
use std::sync::LazyLock;

static SYMBOL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+:\s+(\S.*?)\s*$").expect("Invalid frame symbol regex"));

static LOCATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*at\s+(.+?):(\d+)(?::\d+)?\s*$").expect("Invalid frame location regex")
});

static HASH_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"::h[0-9a-f]{16}$").expect("Invalid symbol hash regex"));

/// One resolved stack frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub symbol: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl Frame {
    #[must_use]
    pub fn new(symbol: impl Into<String>, file: Option<String>, line: Option<u32>) -> Self {
        Self {
            symbol: symbol.into(),
            file,
            line,
        }
    }

    /// True when the frame is a method of `owner` (a full type path).
    #[must_use]
    pub fn belongs_to(&self, owner: &str) -> bool {
        let symbol = self.symbol.trim_start_matches('<');
        symbol
            .strip_prefix(owner)
            .is_some_and(|rest| rest.starts_with("::") || rest.starts_with(" as ") || rest.starts_with('>'))
    }

    #[must_use]
    pub fn simple_class_name(&self) -> &str {
        let (owner, method) = path::owner_and_method(&self.symbol);
        owner.or(method).unwrap_or(&self.symbol)
    }

    #[must_use]
    pub fn method_name(&self) -> &str {
        path::owner_and_method(&self.symbol).1.unwrap_or(&self.symbol)
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        self.file
            .as_deref()
            .and_then(|f| Path::new(f).file_name())
            .and_then(|f| f.to_str())
            .unwrap_or("Unknown Source")
    }

    /// `Simple[method][line]`, the same shape as [`super::CallSite::tag`].
    #[must_use]
    pub fn tag(&self) -> String {
        format!(
            "{}[{}][{}]",
            self.simple_class_name(),
            self.method_name(),
            self.line.unwrap_or(0)
        )
    }
}

/// Captures the current thread's stack, innermost frame first.
#[must_use]
pub fn capture() -> Vec<Frame> {
    parse(&Backtrace::force_capture().to_string())
}

/// Parses the rendered form of a `std::backtrace::Backtrace`.
#[must_use]
pub fn parse(text: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();

    for line in text.lines() {
        if let Some(caps) = LOCATION_LINE.captures(line)
            && let Some(frame) = frames.last_mut()
            && frame.file.is_none()
        {
            frame.file = Some(caps[1].to_string());
            frame.line = caps[2].parse().ok();
        } else if let Some(caps) = SYMBOL_LINE.captures(line) {
            let symbol = HASH_SUFFIX.replace(&caps[1], "");
            frames.push(Frame::new(symbol, None, None));
        }
    }

    frames
}

/// Index of the first frame outside the dispatcher.
///
/// Finds the first frame that belongs to `owner`, skips the contiguous run of
/// `owner` frames that follows, then skips `internal_layers` more wrapper frames.
/// Returns `None` when no `owner` frame exists or the index falls off the stack.
#[must_use]
pub fn call_site_index(frames: &[Frame], owner: &str, internal_layers: usize) -> Option<usize> {
    let first = frames.iter().position(|f| f.belongs_to(owner))?;
    let run = frames[first..]
        .iter()
        .take_while(|f| f.belongs_to(owner))
        .count();
    let index = first + run + internal_layers;
    (index < frames.len()).then_some(index)
}

#[must_use]
pub fn caller_frame<'a>(frames: &'a [Frame], owner: &str, internal_layers: usize) -> Option<&'a Frame> {
    call_site_index(frames, owner, internal_layers).and_then(|i| frames.get(i))
}
