//! Text transforms applied before a message reaches the dispatcher: printf-style
//! substitution for templates, and re-indentation for `json()`/`xml()` payloads.

mod json;
pub mod printf;
mod xml;

pub use json::pretty_json;
pub use printf::{Arg, FormatError, format};
pub use xml::pretty_xml;
