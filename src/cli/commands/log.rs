use crate::facade;
use crate::level::Priority;
use std::process::ExitCode;

/// Handles `prettylog log <priority> [--tag T] <message...>`.
#[must_use]
pub fn cmd_log(priority: Priority, tag: Option<&str>, words: &[String]) -> ExitCode {
    let message = words.join(" ");
    facade::log_at(
        priority,
        tag,
        None,
        Some(&message),
        &[],
        crate::call_site!(),
    );
    ExitCode::SUCCESS
}
