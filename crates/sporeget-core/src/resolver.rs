//! Username to user-id resolution.
//!
//! Downstream endpoints address users by an opaque numeric id, while the
//! CLI takes the human-facing username. One REST lookup bridges the two.

use crate::endpoints::Endpoints;
use crate::extract::model;
use crate::fetcher::Fetcher;
use crate::id::UserId;
use crate::{Error, Result};
use tracing::debug;

/// Resolves a username to its opaque numeric user id.
///
/// The lookup document carries a structured `<status>` field: `1` means
/// found, anything else means the username does not exist. A found user
/// without an `<id>` field is a shape error.
pub async fn resolve_user(
    fetcher: &Fetcher,
    endpoints: &Endpoints,
    username: &str,
) -> Result<UserId> {
    let url = format!("{}/user/{username}", endpoints.rest);
    debug!(username, "resolving user id");
    let body = fetcher.fetch(&url).await?;

    let status = model::element_text(&body, "status")?.ok_or_else(|| {
        Error::UnexpectedDocument(format!("user document for {username} has no status field"))
    })?;
    if status != "1" {
        return Err(Error::UserNotFound(username.to_string()));
    }

    match model::element_text(&body, "id")? {
        Some(id) if !id.is_empty() => {
            debug!(username, user_id = %id, "user id found");
            Ok(UserId::new(id))
        },
        _ => Err(Error::UnexpectedDocument(format!(
            "user document for {username} has no id field"
        ))),
    }
}
