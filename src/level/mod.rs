//! Priorities that gate which records reach which adapters.

use std::fmt;
use std::str::FromStr;

/// Numeric values follow the host log facility (2 = verbose ... 7 = assert) so
/// priorities read the same in persisted files and in the native console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    /// Firehose output, normally only enabled while chasing a bug.
    Verbose = 2,
    /// Diagnostics for developers.
    #[default]
    Debug = 3,
    /// Normal operational milestones.
    Info = 4,
    /// Something unexpected that the application recovered from.
    Warn = 5,
    /// A failed operation.
    Error = 6,
    /// A condition that should never happen ("what a terrible failure").
    Assert = 7,
}

impl Priority {
    /// Lowercase name used by config files and CLI args.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Assert => "assert",
        }
    }

    /// Compact label written into CSV records and console prefixes.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Verbose => "V",
            Self::Debug => "D",
            Self::Info => "I",
            Self::Warn => "W",
            Self::Error => "E",
            Self::Assert => "ASSERT",
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Used by help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Verbose,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Assert,
        ]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can tell "unknown priority" apart from other failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError(String);

impl ParsePriorityError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParsePriorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown priority: '{}'", self.0)
    }
}

impl std::error::Error for ParsePriorityError {}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" | "v" | "trace" => Ok(Self::Verbose),
            "debug" | "d" => Ok(Self::Debug),
            "info" | "i" => Ok(Self::Info),
            "warn" | "warning" | "w" => Ok(Self::Warn),
            "error" | "err" | "e" => Ok(Self::Error),
            "assert" | "wtf" => Ok(Self::Assert),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_host_values() {
        assert!(Priority::Verbose < Priority::Debug);
        assert!(Priority::Error < Priority::Assert);
        assert_eq!(Priority::Verbose.value(), 2);
        assert_eq!(Priority::Assert.value(), 7);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("WARNING".parse::<Priority>(), Ok(Priority::Warn));
        assert_eq!("wtf".parse::<Priority>(), Ok(Priority::Assert));
        assert_eq!("v".parse::<Priority>(), Ok(Priority::Verbose));
        assert!("loud".parse::<Priority>().is_err());
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = Priority::all().iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["V", "D", "I", "W", "E", "ASSERT"]);
    }
}
