//! TOML configuration: where it lives, how it is loaded, and how its strings
//! become typed values.

mod structs;

pub use structs::{ConsoleConfig, DiskConfig, GeneralConfig, InternalConfig};

use crate::internal;
use crate::level::Priority;
use crate::rotation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file is a valid config; `#[serde(default)]` fills every section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub console: ConsoleConfig,
    pub disk: DiskConfig,
    pub internal: InternalConfig,
}

impl Config {
    /// Loads from [`Self::get_config_path`].
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or the TOML is invalid.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads from an explicit path. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// Returns the TOML error for invalid input.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/prettylog/config.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("prettylog").join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Adapter threshold, failing on unknown names.
    ///
    /// # Errors
    /// [`crate::Error::InvalidPriority`] with the rejected name.
    pub fn try_level(&self) -> Result<Priority, crate::Error> {
        Ok(self.general.level.parse()?)
    }

    /// Adapter threshold. Unknown names fall back to `Verbose` so a typo never
    /// silences logging.
    #[must_use]
    pub fn parse_level(&self) -> Priority {
        self.try_level().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, using {}", Priority::Verbose));
            Priority::Verbose
        })
    }

    #[must_use]
    pub fn internal_level(&self) -> Priority {
        self.internal.level.parse().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, using {}", Priority::Warn));
            Priority::Warn
        })
    }

    /// Configured log directory with `~` expanded, or the platform default.
    #[must_use]
    pub fn disk_dir(&self) -> PathBuf {
        self.disk.dir.as_deref().map_or_else(
            || rotation::default_dir().to_path_buf(),
            |dir| PathBuf::from(shellexpand::tilde(dir).as_ref()),
        )
    }
}
