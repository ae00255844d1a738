//! Pure link construction and the deduplicating accumulator.
//!
//! Builders in this module never touch the network: every URL is derived
//! from an identifier, the endpoint record and the option flags, so calling
//! a builder twice with the same inputs yields the same vector. Listing
//! pages that can only be known by walking the API come from
//! [`crate::pagination`] instead.

use crate::endpoints::Endpoints;
use crate::id::{AssetId, FeedId, UserId};
use crate::options::TraversalOptions;
use crate::pagination::PAGE_SIZE;
use std::collections::HashSet;

/// Order-preserving set of discovered links.
///
/// Traversal inserts links repeatedly (a creation can be reached through a
/// feed and through an adventure in the same run); only the first insertion
/// survives. Iteration order is insertion order, which keeps runs
/// reproducible for tests even though callers may treat the output as
/// unordered.
#[derive(Debug, Default)]
pub struct LinkSet {
    seen: HashSet<String>,
    links: Vec<String>,
}

impl LinkSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a link, ignoring duplicates.
    pub fn insert(&mut self, link: impl Into<String>) {
        let link = link.into();
        if self.seen.insert(link.clone()) {
            self.links.push(link);
        }
    }

    /// Inserts every link from an iterator.
    pub fn extend<I>(&mut self, links: I)
    where
        I: IntoIterator<Item = String>,
    {
        for link in links {
            self.insert(link);
        }
    }

    /// Number of unique links accumulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Consumes the set, returning the unique links in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.links
    }
}

/// Deterministic links for a single creation.
///
/// Covers the static store (model, thumbnail, full-size images), the REST
/// detail endpoints, the Atom event log and the Pollinator endpoints,
/// filtered by the option flags. The live comments pagination is the
/// orchestrator's job; only the synthesized first-page link appears here,
/// and only when pagination is disabled.
#[must_use]
pub fn asset_links(
    endpoints: &Endpoints,
    id: &AssetId,
    options: &TraversalOptions,
) -> Vec<String> {
    let shard = id.shard_path();
    let st = &endpoints.static_files;

    let thumb = format!("{st}/thumb/{shard}.png");
    if options.thumb_only {
        return vec![thumb];
    }

    let mut links = vec![
        format!("{st}/model/{shard}.xml"),
        thumb,
        format!("{st}/image/{shard}_lrg.png"),
    ];
    if options.extra_images {
        for index in 2..=4 {
            links.push(format!("{st}/image/{shard}_{index}_lrg.png"));
        }
    }

    if !options.is_static_only() {
        links.push(format!("{}/creature/{id}", endpoints.rest));
        links.push(format!("{}/asset/{id}", endpoints.rest));
        if !options.paginate_comments {
            links.push(format!("{}/comments/{id}/0/{PAGE_SIZE}", endpoints.rest));
        }
        links.push(format!("{}/events/asset/{id}", endpoints.atom));
        if options.pollinator {
            links.push(format!("{}/asset/{id}", endpoints.pollinator));
            links.push(format!("{}/asset?id={id}", endpoints.pollinator));
        }
    }

    links
}

/// Deterministic links for a user root.
///
/// REST profile and sporecast listings, Atom feeds, the first thumbnail
/// count page, the MySpore HTML pages and the Pollinator user endpoint.
/// Paginated listing pages come from the orchestrator.
#[must_use]
pub fn user_links(
    endpoints: &Endpoints,
    username: &str,
    user_id: &UserId,
    options: &TraversalOptions,
) -> Vec<String> {
    let mut links = vec![
        format!("{}/user/{username}", endpoints.rest),
        format!("{}/sporecasts/{username}", endpoints.rest),
        format!("{}/assets/user/{username}", endpoints.atom),
        format!("{}/events/user/{username}", endpoints.atom),
        format!("{}/user-thumbnail-count/{user_id}/0/100", endpoints.view),
    ];

    if options.myspore_pages {
        for page in [
            "myspore",
            "points",
            "trophies",
            "buddies",
            "events",
            "achievements",
        ] {
            links.push(format!("{}/{page}/{username}", endpoints.view));
        }
    }
    if options.pollinator {
        links.push(format!("{}/user/{user_id}", endpoints.pollinator));
    }

    links
}

/// Deterministic links for a feed root.
#[must_use]
pub fn feed_links(
    endpoints: &Endpoints,
    feed: &FeedId,
    options: &TraversalOptions,
) -> Vec<String> {
    let mut links = vec![format!("{}/sporecast/{feed}", endpoints.atom)];
    if options.pollinator {
        links.push(format!("{}/aggregator/{feed}", endpoints.pollinator));
    }
    links
}
