//! One file per subcommand so the dispatch in `main` stays a flat match.

mod json;
mod log;
mod path;
mod prune;

pub use json::{cmd_json, cmd_xml};
pub use log::cmd_log;
pub use path::cmd_path;
pub use prune::cmd_prune;
