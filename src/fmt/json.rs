//! JSON re-indentation for `json()` log calls.

use serde_json::Value;

/// Pretty-prints a JSON object or array with two-space indentation.
///
/// Returns `None` when the text is neither an object nor an array, or does not parse.
#[must_use]
pub fn pretty_json(text: &str) -> Option<String> {
    let text = text.trim();
    if !(text.starts_with('{') || text.starts_with('[')) {
        return None;
    }
    let value: Value = serde_json::from_str(text).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_objects() {
        let out = pretty_json(r#" {"a":1} "#).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn indents_arrays() {
        let out = pretty_json("[1,2]").unwrap();
        assert_eq!(out, "[\n  1,\n  2\n]");
    }

    #[test]
    fn rejects_scalars_and_garbage() {
        assert!(pretty_json("42").is_none());
        assert!(pretty_json("{broken").is_none());
    }
}
