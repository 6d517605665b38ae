//! `json` and `xml` subcommands: both take their text as an argument or stdin.

use crate::facade;
use crate::internal;
use std::io::{self, Read};
use std::process::ExitCode;

fn read_input(text: Option<&str>) -> io::Result<String> {
    match text {
        None | Some("-") => {
            internal::debug("CLI", "Reading input from stdin");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(text) => Ok(text.to_string()),
    }
}

/// Handles `prettylog json [<text>]`.
#[must_use]
pub fn cmd_json(text: Option<&str>) -> ExitCode {
    match read_input(text) {
        Ok(input) => {
            facade::json(&input);
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("CLI", &format!("Error reading stdin: {e}"));
            ExitCode::FAILURE
        }
    }
}

/// Handles `prettylog xml [<text>]`.
#[must_use]
pub fn cmd_xml(text: Option<&str>) -> ExitCode {
    match read_input(text) {
        Ok(input) => {
            facade::xml(&input);
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("CLI", &format!("Error reading stdin: {e}"));
            ExitCode::FAILURE
        }
    }
}
