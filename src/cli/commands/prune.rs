//! Applies the retention window on demand, outside of sink start-up.

use crate::config::Config;
use crate::internal;
use crate::rotation::FileRotationPolicy;
use chrono::Local;
use std::path::Path;
use std::process::ExitCode;

/// Handles `prettylog prune [--dry-run] [--dir D]`. The CLI flag wins over the
/// configured directory.
#[must_use]
pub fn cmd_prune(config: &Config, dir: Option<&Path>, dry_run: bool) -> ExitCode {
    let dir = dir.map_or_else(|| config.disk_dir(), Path::to_path_buf);
    internal::debug(
        "PRUNE",
        &format!("dir={}, dry_run={dry_run}", dir.display()),
    );

    let policy = FileRotationPolicy::new(dir);
    let now = Local::now().naive_local();
    let result = if dry_run {
        policy.plan_at(now)
    } else {
        policy.reconcile_at(now)
    };

    for line in result.summary(dry_run) {
        println!("{line}");
    }

    if result.failed.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
