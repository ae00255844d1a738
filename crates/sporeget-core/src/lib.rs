//! # sporeget-core
//!
//! Link-closure discovery for the Spore.com content network.
//!
//! There is no single endpoint that returns "everything related to X" on
//! Spore.com. The network is four loosely-related subsystems — a sharded
//! static-file store, a paginated REST API, two Atom feed services and a
//! legacy adventure model format that embeds child asset ids — and the full
//! set of downloadable links for a root must be assembled by walking
//! paginated listings, extracting embedded identifiers from heterogeneous
//! documents and re-deriving deterministic URLs for everything found.
//!
//! ## Architecture
//!
//! - [`id`] — validated, typed identifiers and the shard-path derivation
//! - [`links`] — pure URL builders and the deduplicating [`LinkSet`]
//! - [`pagination`] — cursor walking over REST listings
//! - [`resolver`] — username to user-id lookup
//! - [`extract`] — boundary-pattern and structured-XML identifier extraction
//! - [`traverse`] — one strategy per root kind, composing the rest
//!
//! ## Quick Start
//!
//! ```no_run
//! use sporeget_core::{AssetId, Endpoints, Traversal, TraversalOptions};
//!
//! # async fn example() -> sporeget_core::Result<()> {
//! let traversal = Traversal::new(Endpoints::default(), TraversalOptions::default())?;
//! let id = AssetId::new("501096927979")?;
//! for link in traversal.asset(&id).await? {
//!     println!("{link}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure model
//!
//! Every fetch is bounded by a fixed timeout and nothing is retried: a
//! timeout, a non-success status or an unexpected document shape anywhere
//! aborts the whole run with an [`Error`], and no partial link set is
//! returned. The distinction between "resource truly absent" and
//! "transient network failure" does not exist at this layer.

/// Base URLs for the four subsystems
pub mod endpoints;
/// Error types and result alias
pub mod error;
/// Embedded-identifier extraction from fetched documents
pub mod extract;
/// HTTP fetching with a fixed per-request timeout
pub mod fetcher;
/// Typed identifiers and shard-path derivation
pub mod id;
/// Pure link construction and the deduplicating accumulator
pub mod links;
/// Per-run feature switches
pub mod options;
/// Cursor walking over paginated REST listings
pub mod pagination;
/// Username to user-id resolution
pub mod resolver;
/// Traversal strategies for the three root kinds
pub mod traverse;

// Re-export commonly used types
pub use endpoints::Endpoints;
pub use error::{Error, Result};
pub use fetcher::Fetcher;
pub use id::{AdventureId, AssetId, FeedId, UserId};
pub use links::{LinkSet, asset_links, feed_links, user_links};
pub use options::TraversalOptions;
pub use pagination::{PAGE_SIZE, RestPager};
pub use resolver::resolve_user;
pub use traverse::Traversal;
