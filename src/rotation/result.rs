//! Outcome of one reconcile pass, split into actual and dry-run lists.

use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct ReconcileResult {
    pub deleted: Vec<PathBuf>,
    /// Filled instead of `deleted` by a dry run.
    pub would_delete: Vec<PathBuf>,
    pub retained: Vec<PathBuf>,
    /// Files that could not be removed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl ReconcileResult {
    /// Deleted or would-be-deleted, whichever the pass produced.
    #[must_use]
    pub const fn count(&self) -> usize {
        if self.deleted.is_empty() {
            self.would_delete.len()
        } else {
            self.deleted.len()
        }
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.count() == 0 && self.failed.is_empty()
    }

    /// Human-readable summary lines for the CLI.
    #[must_use]
    pub fn summary(&self, dry_run: bool) -> Vec<String> {
        let (verb, paths) = if dry_run {
            ("Would delete", &self.would_delete)
        } else {
            ("Deleted", &self.deleted)
        };

        let mut lines = Vec::new();
        if paths.is_empty() {
            lines.push(format!("Nothing to prune, {} file(s) retained", self.retained.len()));
        } else {
            lines.push(format!("{verb} {} file(s)", paths.len()));
            lines.extend(paths.iter().map(|p| format!("  {}", p.display())));
        }
        for (path, reason) in &self.failed {
            lines.push(format!("Failed {}: {reason}", path.display()));
        }
        lines
    }
}
