//! Daily log files and their seven-day retention window.
//!
//! Files are named `<YYYY-MM-DD>.csv` and live flat in one directory. Anything
//! in that directory whose name does not parse as a date is treated as debris
//! and removed on the next reconcile.

mod dir;
mod result;

pub use dir::default_dir;
pub use result::ReconcileResult;

use crate::internal;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Files dated strictly before `now - RETENTION_DAYS` are deleted.
pub const RETENTION_DAYS: i64 = 7;
/// `chrono` pattern for the file stem.
pub const DATE_PATTERN: &str = "%Y-%m-%d";
pub const FILE_EXTENSION: &str = "csv";

/// What a reconcile pass decides for one directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Expired(NaiveDate),
    Unparsable,
}

/// Chooses the file each line goes to and prunes old ones.
#[derive(Debug, Clone)]
pub struct FileRotationPolicy {
    dir: PathBuf,
}

impl FileRotationPolicy {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Policy rooted at [`default_dir`].
    #[must_use]
    pub fn with_default_dir() -> Self {
        Self::new(default_dir())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn file_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}.{FILE_EXTENSION}", date.format(DATE_PATTERN)))
    }

    /// Today's file, creating the directory if needed. Derived on every call so a
    /// long-running process rolls over at local midnight.
    ///
    /// # Errors
    /// Returns the I/O error if the directory cannot be created.
    pub fn current_file(&self) -> io::Result<PathBuf> {
        if !self.dir.is_dir() {
            fs::create_dir_all(&self.dir)?;
        }
        Ok(self.file_for(Local::now().date_naive()))
    }

    /// Classifies a file stem relative to `now`.
    #[must_use]
    pub fn classify(stem: &str, now: NaiveDateTime) -> Verdict {
        let Ok(date) = NaiveDate::parse_from_str(stem, DATE_PATTERN) else {
            return Verdict::Unparsable;
        };
        let cutoff = now - Duration::days(RETENTION_DAYS);
        if date.and_time(NaiveTime::MIN) < cutoff {
            Verdict::Expired(date)
        } else {
            Verdict::Keep
        }
    }

    /// Deletes expired and unparsable files as of the local clock.
    pub fn reconcile(&self) -> ReconcileResult {
        self.reconcile_at(Local::now().naive_local())
    }

    pub fn reconcile_at(&self, now: NaiveDateTime) -> ReconcileResult {
        self.sweep(now, false)
    }

    /// Dry run of [`Self::reconcile_at`]: fills `would_delete` instead of deleting.
    #[must_use]
    pub fn plan_at(&self, now: NaiveDateTime) -> ReconcileResult {
        self.sweep(now, true)
    }

    fn sweep(&self, now: NaiveDateTime, dry_run: bool) -> ReconcileResult {
        let mut result = ReconcileResult::default();

        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                internal::warn(
                    "ROTATION",
                    &format!("Cannot list {}: {e}", self.dir.display()),
                );
                return result;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            match Self::classify(stem, now) {
                Verdict::Keep => result.retained.push(path),
                verdict => {
                    internal::trace(
                        "ROTATION",
                        &format!("{} marked for deletion ({verdict:?})", path.display()),
                    );
                    if dry_run {
                        result.would_delete.push(path);
                    } else {
                        match fs::remove_file(&path) {
                            Ok(()) => result.deleted.push(path),
                            Err(e) => result.failed.push((path, e.to_string())),
                        }
                    }
                }
            }
        }

        if result.count() > 0 {
            internal::debug(
                "ROTATION",
                &format!(
                    "{} file(s) {} in {}",
                    result.count(),
                    if dry_run { "expired" } else { "deleted" },
                    self.dir.display()
                ),
            );
        }
        result
    }
}
