//! shell completion scripts

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use super::Cli;

/// generate the completion script for a shell
pub fn generate_completion(shell: Shell) -> Vec<u8> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "xit", &mut buf);
    buf
}
