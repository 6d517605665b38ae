//! Configuration sections. Every field has a default so a partial or empty
//! file still yields a working setup.

use serde::Deserialize;

/// Settings shared by every adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum priority for the built-in adapters.
    pub level: String,
    /// Wrapper functions between application code and the printer.
    pub internal_layers: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "verbose".to_string(),
            internal_layers: 0,
        }
    }
}

/// Pretty format on the console.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub show_thread_info: bool,
    /// Caller frames printed above each message; 0 disables the stack section.
    pub method_count: usize,
    pub method_offset: usize,
    /// Cut long messages on character boundaries instead of fixed byte offsets.
    pub utf8_boundaries: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_thread_info: true,
            method_count: 0,
            method_offset: 0,
            utf8_boundaries: false,
        }
    }
}

/// CSV lines in daily files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    pub enabled: bool,
    /// Log directory; `~` is expanded. Unset means the platform cache directory.
    pub dir: Option<String>,
    /// strftime pattern of the last CSV column.
    pub timestamp_format: String,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
            timestamp_format: crate::format::DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// The library's own diagnostics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    pub level: String,
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
