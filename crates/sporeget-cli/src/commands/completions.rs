//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

/// Writes a completion script for the given shell to stdout.
pub fn generate(shell: Shell) {
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}
