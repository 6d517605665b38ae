//! XML re-indentation for `xml()` log calls.
//!
//! Not a validating parser: it tokenizes tags and text, checks that open and
//! close tags nest, and lays the document out with two-space indentation.
//! An element holding only text stays on one line.

use regex::Regex;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<[^<>]*>|[^<]+|<").expect("Invalid xml token regex")
});

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    /// Declarations, comments, doctypes: no effect on depth.
    Misc(&'a str),
    Open { name: &'a str, raw: &'a str },
    Close { name: &'a str, raw: &'a str },
    Empty(&'a str),
    Text(&'a str),
}

fn tag_name(inner: &str) -> &str {
    inner
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default()
}

fn tokenize(text: &str) -> Option<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    for m in TOKEN.find_iter(text) {
        let raw = m.as_str();
        let token = if raw == "<" {
            return None;
        } else if raw.starts_with("<?") || raw.starts_with("<!") {
            Token::Misc(raw)
        } else if let Some(inner) = raw.strip_prefix("</") {
            Token::Close {
                name: tag_name(inner.trim_end_matches('>').trim()),
                raw,
            }
        } else if raw.starts_with('<') && raw.ends_with("/>") {
            Token::Empty(raw)
        } else if let Some(inner) = raw.strip_prefix('<') {
            let name = tag_name(inner.trim_end_matches('>'));
            if name.is_empty() {
                return None;
            }
            Token::Open { name, raw }
        } else {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.contains('>') {
                return None;
            }
            Token::Text(trimmed)
        };
        tokens.push(token);
    }
    Some(tokens)
}

/// Re-indents `text`. Returns `None` for empty input, stray `<`, or mismatched tags.
#[must_use]
pub fn pretty_xml(text: &str) -> Option<String> {
    let tokens = tokenize(text)?;
    let mut stack: Vec<&str> = Vec::new();
    let mut lines: Vec<String> = Vec::new();
    let mut saw_element = false;
    let mut i = 0;

    while i < tokens.len() {
        let indent = "  ".repeat(stack.len());
        match &tokens[i] {
            Token::Misc(raw) | Token::Empty(raw) => {
                saw_element |= matches!(tokens[i], Token::Empty(_));
                lines.push(format!("{indent}{raw}"));
            }
            Token::Text(t) => lines.push(format!("{indent}{t}")),
            Token::Open { name, raw } => {
                saw_element = true;
                if let (Some(Token::Text(t)), Some(Token::Close { name: close, raw: end })) =
                    (tokens.get(i + 1), tokens.get(i + 2))
                    && close == name
                {
                    lines.push(format!("{indent}{raw}{t}{end}"));
                    i += 3;
                    continue;
                }
                lines.push(format!("{indent}{raw}"));
                stack.push(*name);
            }
            Token::Close { name, raw } => {
                if stack.pop() != Some(*name) {
                    return None;
                }
                lines.push(format!("{}{raw}", "  ".repeat(stack.len())));
            }
        }
        i += 1;
    }

    if !stack.is_empty() || !saw_element {
        return None;
    }
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_nested_elements() {
        let out = pretty_xml(r#"<?xml version="1.0"?><a><b x="1">hi</b><c/></a>"#).unwrap();
        assert_eq!(
            out,
            "<?xml version=\"1.0\"?>\n<a>\n  <b x=\"1\">hi</b>\n  <c/>\n</a>"
        );
    }

    #[test]
    fn rejects_mismatched_tags() {
        assert!(pretty_xml("<a><b></a></b>").is_none());
        assert!(pretty_xml("<a>").is_none());
        assert!(pretty_xml("a < b").is_none());
    }

    #[test]
    fn rejects_plain_text() {
        assert!(pretty_xml("just words").is_none());
    }
}
