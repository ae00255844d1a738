//! `asset` command implementation.

use crate::cli::Cli;
use crate::output;
use anyhow::Result;
use sporeget_core::{AssetId, Endpoints, Traversal};

/// Prints every link for a single creation.
pub async fn execute(id: &str, cli: &Cli) -> Result<()> {
    let id = AssetId::new(id)?;
    let traversal = Traversal::new(Endpoints::default(), cli.traversal_options())?;
    let links = traversal.asset(&id).await?;
    output::print_links(&links, cli.json)
}
