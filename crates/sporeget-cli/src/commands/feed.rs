//! `feed` command implementation.

use crate::cli::Cli;
use crate::output;
use anyhow::Result;
use sporeget_core::{Endpoints, FeedId, Traversal};

/// Prints every link for the creations in a sporecast or aggregator feed.
pub async fn execute(id: &str, cli: &Cli) -> Result<()> {
    let feed = FeedId::new(id);
    let traversal = Traversal::new(Endpoints::default(), cli.traversal_options())?;
    let links = traversal.feed(&feed).await?;
    output::print_links(&links, cli.json)
}
