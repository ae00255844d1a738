//! Base URLs for the four Spore.com subsystems.

const WWW: &str = "http://www.spore.com";
const STATIC: &str = "http://static.spore.com";
const POLLINATOR: &str = "http://pollinator.spore.com/pollinator";

/// Base URLs for every subsystem a traversal touches.
///
/// The default value reproduces the production endpoints byte for byte;
/// tests point all five at a mock server with [`Endpoints::rooted`]. The
/// record is immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Paginated REST API.
    pub rest: String,
    /// Atom event/feed service.
    pub atom: String,
    /// HTML and listing view service.
    pub view: String,
    /// Sharded static-file store.
    pub static_files: String,
    /// Pollinator in-game Atom service.
    pub pollinator: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            rest: format!("{WWW}/rest"),
            atom: format!("{WWW}/atom"),
            view: format!("{WWW}/view"),
            static_files: format!("{STATIC}/static"),
            pollinator: format!("{POLLINATOR}/atom"),
        }
    }
}

impl Endpoints {
    /// Roots every subsystem under one base URL.
    ///
    /// Production splits the subsystems across three hosts; this collapses
    /// them onto a single origin so one mock server can answer for all of
    /// them.
    #[must_use]
    pub fn rooted(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            rest: format!("{base}/rest"),
            atom: format!("{base}/atom"),
            view: format!("{base}/view"),
            static_files: format!("{base}/static"),
            pollinator: format!("{base}/pollinator/atom"),
        }
    }
}
