//! `prettylog` command-line tool.
//!
//! Usage:
//!   prettylog log <priority> [--tag T] <message...>
//!   prettylog json [<text>|-]
//!   prettylog xml [<text>|-]
//!   prettylog prune [--dry-run] [--dir D]
//!   prettylog path

use clap::Parser;
use prettylog::cli::commands::{cmd_json, cmd_log, cmd_path, cmd_prune, cmd_xml};
use prettylog::cli::{Cli, Command};
use prettylog::config::Config;
use prettylog::{facade, internal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Before anything that may report through internal diagnostics.
    internal::init_with_config(&config);

    let code = match &cli.command {
        Command::Prune { dry_run, dir } => return cmd_prune(&config, dir.as_deref(), *dry_run),
        Command::Path => return cmd_path(&config),
        Command::Log {
            priority,
            tag,
            message,
        } => {
            facade::init(&config);
            cmd_log((*priority).into(), tag.as_deref(), message)
        }
        Command::Json { text } => {
            facade::init(&config);
            cmd_json(text.as_deref())
        }
        Command::Xml { text } => {
            facade::init(&config);
            cmd_xml(text.as_deref())
        }
    };

    // The disk writer runs on its own thread; wait for it before the process exits.
    if let Err(e) = facade::flush() {
        internal::error("CLI", &format!("Flush failed: {e}"));
        return ExitCode::FAILURE;
    }
    code
}
