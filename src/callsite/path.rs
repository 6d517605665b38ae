//! Splitting of Rust symbol paths such as `app::net::Client<T>::connect::{{closure}}`.

/// Splits on top-level `::`, leaving generic arguments and qualified `<X as Y>`
/// segments intact.
pub(crate) fn segments(path: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                out.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    out.push(&path[start..]);
    out.retain(|s| !s.is_empty() && *s != "{{closure}}");
    out
}

/// Reduces a segment to a bare name: `Client<T>` → `Client`,
/// `<app::Client as app::Connect>` → `Client`.
pub(crate) fn simple(segment: &str) -> &str {
    if let Some(inner) = segment
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
    {
        let implementor = inner.split(" as ").next().unwrap_or(inner);
        return segments(implementor)
            .last()
            .copied()
            .map_or(implementor, simple);
    }
    segment.split('<').next().unwrap_or(segment)
}

/// Returns `(owner, method)`: the last two meaningful segments of a function path.
pub(crate) fn owner_and_method(path: &str) -> (Option<&str>, Option<&str>) {
    let segs = segments(path);
    let method = segs.last().copied().map(simple);
    let owner = segs
        .len()
        .checked_sub(2)
        .and_then(|i| segs.get(i))
        .copied()
        .map(simple);
    (owner, method)
}
