//! Command-line interface, parsed with clap.

pub mod commands;

use crate::level::Priority;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Priority names accepted on the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PriorityArg {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Assert,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Verbose => Self::Verbose,
            PriorityArg::Debug => Self::Debug,
            PriorityArg::Info => Self::Info,
            PriorityArg::Warn => Self::Warn,
            PriorityArg::Error => Self::Error,
            PriorityArg::Assert => Self::Assert,
        }
    }
}

/// prettylog - bordered console logs and daily CSV files.
#[derive(Parser)]
#[command(name = "prettylog", version, about = "Bordered console logs and daily CSV files")]
pub struct Cli {
    /// Config file (default: <config dir>/prettylog/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log one message through the configured adapters.
    Log {
        #[arg(value_enum)]
        priority: PriorityArg,
        /// Explicit tag (default: derived from the call site)
        #[arg(short, long)]
        tag: Option<String>,
        /// Message words, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Pretty-print and log JSON.
    Json {
        /// JSON text (reads stdin if omitted or "-")
        text: Option<String>,
    },
    /// Re-indent and log XML.
    Xml {
        /// XML text (reads stdin if omitted or "-")
        text: Option<String>,
    },
    /// Delete log files outside the retention window.
    Prune {
        /// Only list what would be deleted
        #[arg(long)]
        dry_run: bool,
        /// Log directory (default: from config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print the log directory and today's file.
    Path,
}
