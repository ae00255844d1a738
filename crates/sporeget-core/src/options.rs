//! Per-run feature switches.

/// Immutable option record controlling which link categories a traversal
/// emits.
///
/// Built once, by the CLI or a test, and threaded by reference into every
/// builder and orchestrator call; nothing mutates it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct TraversalOptions {
    /// Emit only the importable 128x128 thumbnail of each asset.
    pub thumb_only: bool,
    /// Emit only static-store file links.
    pub static_only: bool,
    /// Expand adventures into their referenced child assets.
    pub adventures: bool,
    /// Walk every comments page instead of synthesizing the first-page link.
    pub paginate_comments: bool,
    /// Include the MySpore HTML pages for user roots.
    pub myspore_pages: bool,
    /// Include the Pollinator in-game download endpoints.
    pub pollinator: bool,
    /// Include the secondary/tertiary/quaternary full-size images.
    pub extra_images: bool,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            thumb_only: false,
            static_only: false,
            adventures: false,
            paginate_comments: true,
            myspore_pages: true,
            pollinator: true,
            extra_images: true,
        }
    }
}

impl TraversalOptions {
    /// Whether the run is restricted to static-store links.
    ///
    /// A thumbnail-only run implies static-only.
    #[must_use]
    pub const fn is_static_only(&self) -> bool {
        self.static_only || self.thumb_only
    }
}
