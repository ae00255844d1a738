//! HTTP fetching with a fixed per-request timeout.

use crate::{Error, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Timeout applied to every individual request. There is no overall run
/// deadline; a traversal is bounded only by its sequence of fetches.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client shared by the REST, Atom, view and static-store fetches.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher with the standard 30 second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Creates a fetcher with a custom request timeout (primarily for tests).
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sporeget/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client })
    }

    /// Fetches a URL and returns the response body.
    ///
    /// Any non-success status is an error, a timeout is reported as
    /// [`Error::Timeout`], and there are no retries: one failed fetch aborts
    /// the traversal that issued it.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_send_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(url, bytes = body.len(), "fetched");
        Ok(body)
    }
}

fn classify_send_error(url: &str, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout(format!("request to {url} timed out"))
    } else {
        Error::Network(err)
    }
}
