//! Typed identifiers for the four root kinds.
//!
//! The static-file store shards every asset by the first nine digits of its
//! id, so asset-shaped identifiers are validated at construction instead of
//! leaving short input to produce garbage paths. User and feed identifiers
//! are opaque tokens and pass through untouched.
//!
//! Each kind is a distinct type: the shard-path derivation and endpoint
//! shapes differ per kind, and the compiler should refuse an adventure id
//! where a plain asset id is expected.

use crate::{Error, Result};
use std::fmt;

/// Number of leading digits that encode the three-level shard path.
const SHARD_DIGITS: usize = 9;

fn validate_asset_shaped(id: &str, kind: &str) -> Result<()> {
    if id.len() < SHARD_DIGITS || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidId(format!(
            "{kind} id must be a numeric string of at least {SHARD_DIGITS} digits, got {id:?}"
        )));
    }
    Ok(())
}

fn shard_path_of(id: &str) -> String {
    format!("{}/{}/{}/{id}", &id[0..3], &id[3..6], &id[6..9])
}

/// Identifier of a single creation in the static store and REST API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    /// Validates and wraps a creation id.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validate_asset_shaped(&id, "asset")?;
        Ok(Self(id))
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Three-level static-store path: `id[0:3]/id[3:6]/id[6:9]/id`.
    #[must_use]
    pub fn shard_path(&self) -> String {
        shard_path_of(&self.0)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a composite "adventure" object.
///
/// Same shape and sharding as [`AssetId`], but kept as its own type: an
/// adventure's model document is fetched and expanded into child assets,
/// which plain assets never are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdventureId(String);

impl AdventureId {
    /// Validates and wraps an adventure id.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validate_asset_shaped(&id, "adventure")?;
        Ok(Self(id))
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Three-level static-store path: `id[0:3]/id[3:6]/id[6:9]/id`.
    #[must_use]
    pub fn shard_path(&self) -> String {
        shard_path_of(&self.0)
    }
}

impl fmt::Display for AdventureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque numeric user id returned by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wraps a resolved user id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque feed token (sporecast or aggregator id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedId(String);

impl FeedId {
    /// Wraps a feed id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
