use std::cell::Cell;
use std::fmt;

/// Holder for a one-shot tag that applies to the next untagged log call made
/// with this context.
///
/// `Cell` makes the context `!Sync`: each thread keeps its own, so a tag set on
/// one thread can never be picked up by another.
#[derive(Default)]
pub struct TagContext {
    pending: Cell<Option<String>>,
}

impl fmt::Debug for TagContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagContext")
            .field("pending", &self.has_pending())
            .finish()
    }
}

impl TagContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Cell::new(None),
        }
    }

    /// Replaces any tag still pending.
    pub fn set_once(&self, tag: impl Into<String>) {
        self.pending.set(Some(tag.into()));
    }

    /// Returns and clears the pending tag.
    pub fn take_once(&self) -> Option<String> {
        self.pending.take()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        let tag = self.pending.take();
        let pending = tag.is_some();
        self.pending.set(tag);
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_consumed_once() {
        let ctx = TagContext::new();
        ctx.set_once("net");
        assert!(ctx.has_pending());
        assert_eq!(ctx.take_once().as_deref(), Some("net"));
        assert_eq!(ctx.take_once(), None);
    }

    #[test]
    fn debug_does_not_consume() {
        let ctx = TagContext::new();
        ctx.set_once("db");
        assert_eq!(format!("{ctx:?}"), "TagContext { pending: true }");
        assert_eq!(ctx.take_once().as_deref(), Some("db"));
        assert_eq!(format!("{ctx:?}"), "TagContext { pending: false }");
    }
}
