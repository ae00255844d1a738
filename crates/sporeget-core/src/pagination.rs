//! Cursor walking over paginated REST listings.

use crate::Result;
use crate::endpoints::Endpoints;
use crate::extract::model;
use crate::fetcher::Fetcher;
use tracing::debug;

/// Fixed maximum element count per listing page.
///
/// There is no explicit last-page marker anywhere in the API: a page with
/// fewer matching elements than this is the sole end-of-listing signal, so
/// an exactly-full final page costs one extra fetch.
pub const PAGE_SIZE: usize = 500;

/// Walks one REST listing endpoint at offsets `0, 500, 1000, …`.
pub struct RestPager<'a> {
    fetcher: &'a Fetcher,
    endpoints: &'a Endpoints,
}

impl<'a> RestPager<'a> {
    /// Creates a pager over the given client and endpoint set.
    #[must_use]
    pub const fn new(fetcher: &'a Fetcher, endpoints: &'a Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    /// Walks the listing and returns the URL of every page visited, in
    /// order. Used when only the page links themselves belong in the
    /// output.
    pub async fn page_links(
        &self,
        endpoint: &str,
        arg: &str,
        element: &str,
        subtype: Option<&str>,
    ) -> Result<Vec<String>> {
        let (links, _) = self.walk(endpoint, arg, element, subtype, false).await?;
        Ok(links)
    }

    /// Walks the listing and returns the direct `<id>` child of every
    /// listed element, concatenated across pages. Used when the caller
    /// must recurse into each element.
    pub async fn collect_ids(
        &self,
        endpoint: &str,
        arg: &str,
        element: &str,
        subtype: Option<&str>,
    ) -> Result<Vec<String>> {
        let (_, ids) = self.walk(endpoint, arg, element, subtype, true).await?;
        Ok(ids)
    }

    async fn walk(
        &self,
        endpoint: &str,
        arg: &str,
        element: &str,
        subtype: Option<&str>,
        collect: bool,
    ) -> Result<(Vec<String>, Vec<String>)> {
        let mut page = 0usize;
        let mut links = Vec::new();
        let mut ids = Vec::new();

        loop {
            let mut url = format!(
                "{}/{endpoint}/{arg}/{}/{PAGE_SIZE}",
                self.endpoints.rest,
                page * PAGE_SIZE
            );
            if let Some(subtype) = subtype {
                url.push('/');
                url.push_str(subtype);
            }

            debug!(endpoint, arg, page = page + 1, "retrieving listing page");
            let body = self.fetcher.fetch(&url).await?;
            let on_page = model::count_elements(&body, element)?;
            links.push(url);
            if collect {
                ids.extend(model::child_id_texts(&body, element)?);
            }

            if on_page < PAGE_SIZE {
                return Ok((links, ids));
            }
            page += 1;
        }
    }
}
