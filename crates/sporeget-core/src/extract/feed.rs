//! Boundary-aware pattern extraction from Atom feed text.
//!
//! Feed documents are scanned as text rather than parsed: entry taglines
//! and names carry free-form user input with unescaped markup, so a
//! structured parse of a whole feed is not reliable. The patterns here are
//! anchored on the entry markers instead.

use crate::id::{AdventureId, AssetId};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Asset entry marker inside feed text. The digit run must be followed by a
/// non-digit character so a nine-digit id can never match as a prefix of a
/// longer one. `regex` has no lookahead; consuming the boundary character
/// is equivalent here because every marker starts with `tag:` and two
/// markers can never overlap by one character.
///
/// SAFETY: pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static ASSET_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tag:spore\.com,2006:asset/(\d+)\D").unwrap());

/// SAFETY: pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static TAGLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<tagline>.*?</tagline>").unwrap());

/// SAFETY: pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<name>.*?</name>").unwrap());

/// Content type that marks an adventure entry.
const ADVENTURE_TYPE: &str = "application/x-adventure+xml";
const ENTRY_CLOSE: &str = "</entry>";
const ENTRY_OPEN: &str = "<entry>";

/// Every plain asset id in the feed text, in document order.
///
/// Digit runs that are too short to be asset ids are skipped.
#[must_use]
pub fn asset_ids(text: &str) -> Vec<AssetId> {
    ASSET_TAG_RE
        .captures_iter(text)
        .filter_map(|cap| {
            let raw = &cap[1];
            match AssetId::new(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    debug!(id = raw, "skipping malformed asset id in feed");
                    None
                },
            }
        })
        .collect()
}

/// Every adventure id in the feed text, in document order.
///
/// An id qualifies only when all three boundary conditions hold: an
/// entry-closing marker precedes it, the adventure content type appears
/// after it within the same entry, and an entry-opening marker follows the
/// content type later in the document. This isolates adventure entries from
/// ordinary ones in the same feed.
#[must_use]
pub fn adventure_ids(text: &str) -> Vec<AdventureId> {
    let mut out = Vec::new();
    let mut cursor = 0;

    while let Some(close) = text[cursor..].find(ENTRY_CLOSE) {
        let window_start = cursor + close + ENTRY_CLOSE.len();
        let window_end = text[window_start..]
            .find(ENTRY_CLOSE)
            .map_or(text.len(), |next| window_start + next);
        let window = &text[window_start..window_end];

        if let Some(cap) = ASSET_TAG_RE.captures(window) {
            let match_end = cap.get(0).map_or(0, |m| m.end());
            if let Some(type_offset) = window[match_end..].find(ADVENTURE_TYPE) {
                let after_type = window_start + match_end + type_offset + ADVENTURE_TYPE.len();
                if text[after_type..].contains(ENTRY_OPEN) {
                    let raw = &cap[1];
                    match AdventureId::new(raw) {
                        Ok(id) => out.push(id),
                        Err(_) => {
                            debug!(id = raw, "skipping malformed adventure id in feed");
                        },
                    }
                }
            }
        }

        cursor = window_start;
    }

    out
}

/// Removes every `<tagline>` span from the text.
///
/// Taglines are free-form user text that routinely contains unescaped
/// markup; they are cut out at the text level before a document is handed
/// to the structured parser, not recovered from inside it.
#[must_use]
pub fn strip_taglines(text: &str) -> String {
    TAGLINE_RE.replace_all(text, "").into_owned()
}

/// Removes every `<name>` span from the text. Same rationale as
/// [`strip_taglines`].
#[must_use]
pub fn strip_names(text: &str) -> String {
    NAME_RE.replace_all(text, "").into_owned()
}
