use crate::config::Config;
use crate::rotation::FileRotationPolicy;
use chrono::Local;
use std::process::ExitCode;

/// Handles `prettylog path`. Does not create the directory.
#[must_use]
pub fn cmd_path(config: &Config) -> ExitCode {
    let policy = FileRotationPolicy::new(config.disk_dir());
    println!("{}", policy.dir().display());
    println!("{}", policy.file_for(Local::now().date_naive()).display());
    ExitCode::SUCCESS
}
