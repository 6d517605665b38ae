use crate::callsite::CallSite;
use crate::fmt::Arg;
use crate::level::Priority;
use std::error::Error;

/// Everything one log call hands to the printer. Borrowed for the duration of
/// the call only.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub priority: Priority,
    pub tag: Option<&'a str>,
    pub message: Option<&'a str>,
    pub cause: Option<&'a (dyn Error + 'static)>,
    /// printf arguments; an empty slice leaves the message untouched.
    pub args: &'a [Arg],
    pub call_site: Option<CallSite>,
}

impl<'a> LogRecord<'a> {
    #[must_use]
    pub const fn new(priority: Priority, message: &'a str) -> Self {
        Self {
            priority,
            tag: None,
            message: Some(message),
            cause: None,
            args: &[],
            call_site: None,
        }
    }

    /// A record with no message, only a cause.
    #[must_use]
    pub const fn from_cause(priority: Priority, cause: &'a (dyn Error + 'static)) -> Self {
        Self {
            priority,
            tag: None,
            message: None,
            cause: Some(cause),
            args: &[],
            call_site: None,
        }
    }

    #[must_use]
    pub const fn tag(mut self, tag: &'a str) -> Self {
        self.tag = Some(tag);
        self
    }

    #[must_use]
    pub const fn cause(mut self, cause: &'a (dyn Error + 'static)) -> Self {
        self.cause = Some(cause);
        self
    }

    #[must_use]
    pub const fn args(mut self, args: &'a [Arg]) -> Self {
        self.args = args;
        self
    }

    #[must_use]
    pub const fn call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }
}
