//! Link rendering.

use anyhow::Result;

/// Prints the discovered links to stdout: one per line by default, or a
/// JSON array when requested.
pub fn print_links(links: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(links)?);
    } else {
        for link in links {
            println!("{link}");
        }
    }
    Ok(())
}
