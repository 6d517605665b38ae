//! Unified error type for the few prettylog operations that can fail visibly.
//!
//! The logging path itself never returns errors; only configuration loading and
//! explicit flushes surface them.

use crate::level::ParsePriorityError;
use std::time::Duration;

/// Error type for prettylog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Invalid priority string in config or CLI input.
    InvalidPriority(String),
    /// The disk worker did not reach a flush barrier in time.
    FlushTimeout(Duration),
    /// The disk worker is not running.
    WorkerGone,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidPriority(s) => write!(f, "invalid priority: {s}"),
            Self::FlushTimeout(d) => write!(f, "disk worker did not drain within {d:?}"),
            Self::WorkerGone => write!(f, "disk worker is not running"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<ParsePriorityError> for Error {
    fn from(e: ParsePriorityError) -> Self {
        Self::InvalidPriority(e.input().to_string())
    }
}
