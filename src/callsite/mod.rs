//! Where a log call came from.
//!
//! The location is injected at the call boundary: the logging macros expand
//! `module_path!()`, `file!()`, `line!()` and the enclosing function's path, and
//! the plain facade functions use `#[track_caller]`. Walking the thread's stack
//! ([`stack`]) is only the fallback for records that arrive without a location,
//! and the source of the method lines the pretty format can print.

mod path;
pub mod stack;

use std::panic::Location;
use std::path::Path;

/// Source position of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub module_path: &'static str,
    /// Full path of the enclosing function, when the macros could capture it.
    pub function: Option<&'static str>,
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    #[must_use]
    pub const fn new(
        module_path: &'static str,
        function: Option<&'static str>,
        file: &'static str,
        line: u32,
    ) -> Self {
        Self {
            module_path,
            function,
            file,
            line,
        }
    }

    /// Location of the caller of the enclosing `#[track_caller]` function.
    /// The function name is unknown on this path.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            module_path: "",
            function: None,
            file: location.file(),
            line: location.line(),
        }
    }

    fn file_stem(&self) -> &'static str {
        let file = self.file;
        Path::new(file)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file)
    }

    /// The type (or module, for free functions) that owns the calling function.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.function
            .and_then(|f| path::owner_and_method(f).0)
            .or_else(|| path::segments(self.module_path).last().copied())
            .unwrap_or_else(|| self.file_stem())
    }

    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.function.and_then(|f| path::owner_and_method(f).1)
    }

    /// `Simple[method][line]`, or `stem[line]` when the function is unknown.
    #[must_use]
    pub fn tag(&self) -> String {
        match self.method() {
            Some(method) => format!("{}[{method}][{}]", self.simple_name(), self.line),
            None => format!("{}[{}]", self.file_stem(), self.line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_from_method_path() {
        let site = CallSite::new(
            "shop::cart",
            Some("shop::cart::Cart::checkout"),
            "src/cart.rs",
            88,
        );
        assert_eq!(site.tag(), "Cart[checkout][88]");
    }

    #[test]
    fn tag_from_free_function() {
        let site = CallSite::new("shop::net", Some("shop::net::connect"), "src/net.rs", 12);
        assert_eq!(site.simple_name(), "net");
        assert_eq!(site.tag(), "net[connect][12]");
    }

    #[test]
    fn tag_without_function_uses_file_stem() {
        let site = CallSite::new("", None, "src/bin/tool.rs", 7);
        assert_eq!(site.tag(), "tool[7]");
    }

    #[test]
    fn caller_points_here() {
        let line = line!() + 1;
        let site = CallSite::caller();
        assert_eq!(site.line, line);
        assert!(site.file.ends_with("mod.rs"));
    }
}
