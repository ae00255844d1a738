//! sporeget CLI - prints a list of spore.com links to download.
//!
//! Meant to be used inside an automatic script along with some downloading
//! tool. Exit codes: 0 - success, links printed; 1 - fail, error printed
//! on stderr; 2 - usage error.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    execute_command(&cli).await
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose || cli.debug {
        Level::DEBUG
    } else {
        Level::WARN
    };

    // Links go to stdout; logging must stay off it.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Asset { id } => commands::asset(id, cli).await,
        Commands::User { username } => commands::user(username, cli).await,
        Commands::Feed { id } => commands::feed(id, cli).await,
        Commands::Completions { shell } => {
            commands::completions(*shell);
            Ok(())
        },
    }
}
