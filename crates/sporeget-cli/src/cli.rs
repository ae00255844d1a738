//! CLI structure and argument parsing.
//!
//! `sporeget` follows a command-argument pattern: one subcommand per root
//! kind (`asset`, `user`, `feed`), a shared set of option flags controlling
//! which link categories are emitted, and a `completions` helper. The tool
//! is meant to run inside an automatic script alongside a downloading tool,
//! so the default output is bare links, one per line, on stdout; everything
//! else (logs, errors) goes to stderr.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use sporeget_core::TraversalOptions;

/// Main CLI structure for the `sporeget` command.
#[derive(Parser, Clone, Debug)]
#[command(name = "sporeget")]
#[command(version)]
#[command(about = "Prints a list of spore.com links to download", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Return links to all the assets used in adventures
    #[arg(long = "adv", global = true)]
    pub adventures: bool,

    /// Return only links to files
    #[arg(long, global = true)]
    pub static_only: bool,

    /// Return only links to importable 128x128 PNGs
    #[arg(long, global = true)]
    pub thumb_only: bool,

    /// Return only the first comments page (max. 500), faster
    #[arg(long, global = true)]
    pub disable_comments_pagination: bool,

    /// Exclude MySpore (HTML) pages from the list
    #[arg(long, global = true)]
    pub exclude_myspore: bool,

    /// Exclude Pollinator (in-game asset downloading) endpoints from the list
    #[arg(long, global = true)]
    pub exclude_pollinator: bool,

    /// Exclude additional image links for the creations
    #[arg(long, global = true)]
    pub exclude_quad_images: bool,

    /// Print the links as a JSON array instead of one per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Print debug messages
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available subcommands, one per root kind.
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Links for a single creation
    Asset {
        /// Creation ID
        id: String,
    },

    /// Links for user data and all the creations made by a user
    User {
        /// The username
        username: String,
    },

    /// Links for all the creations in a feed (sporecast/aggregator)
    Feed {
        /// Feed ID
        id: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

impl Cli {
    /// Maps the flag surface onto the core option record.
    ///
    /// `--thumb-only` implies static-only, and the `--disable-*` /
    /// `--exclude-*` flags invert onto the positive core switches.
    #[must_use]
    pub const fn traversal_options(&self) -> TraversalOptions {
        TraversalOptions {
            thumb_only: self.thumb_only,
            static_only: self.static_only || self.thumb_only,
            adventures: self.adventures,
            paginate_comments: !self.disable_comments_pagination,
            myspore_pages: !self.exclude_myspore,
            pollinator: !self.exclude_pollinator,
            extra_images: !self.exclude_quad_images,
        }
    }
}
