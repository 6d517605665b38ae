use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static DEFAULT_DIR: OnceLock<PathBuf> = OnceLock::new();

/// `<platform cache dir>/logger`, falling back to `<temp>/prettylog/logger` when
/// the platform reports no home directory. Resolved once per process.
pub fn default_dir() -> &'static Path {
    DEFAULT_DIR.get_or_init(|| {
        ProjectDirs::from("", "", "prettylog").map_or_else(
            || std::env::temp_dir().join("prettylog").join("logger"),
            |dirs| dirs.cache_dir().join("logger"),
        )
    })
}
