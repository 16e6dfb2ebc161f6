mod commands;
mod completions;
mod convert;
pub mod exit_codes;
pub mod output;

pub use commands::{Cli, Commands, ConfigCommands};

/// run a parsed command line, returning the process exit code
pub fn run(cli: Cli) -> i32 {
    commands::execute(cli)
}
