//! `user` command implementation.

use crate::cli::Cli;
use crate::output;
use anyhow::Result;
use sporeget_core::{Endpoints, Traversal};

/// Prints every link for a user and all the creations they made.
pub async fn execute(username: &str, cli: &Cli) -> Result<()> {
    let traversal = Traversal::new(Endpoints::default(), cli.traversal_options())?;
    let links = traversal.user(username).await?;
    output::print_links(&links, cli.json)
}
