//! Traversal strategies for the three root kinds.
//!
//! Each strategy is a short deterministic sequence of fetch, extract and
//! paginate steps feeding one [`LinkSet`]. Every await is strictly
//! sequential and there are no retries: the first failure unwinds the whole
//! run and nothing is emitted.
//!
//! Adventure expansion is exactly one level deep. The children referenced
//! by an adventure's model document are always built as plain assets and
//! never re-expanded, so reference cycles between adventures cannot recurse.

use crate::endpoints::Endpoints;
use crate::extract::{feed as feed_text, model};
use crate::fetcher::Fetcher;
use crate::id::{AdventureId, AssetId, FeedId};
use crate::links::{self, LinkSet};
use crate::options::TraversalOptions;
use crate::pagination::RestPager;
use crate::resolver;
use crate::{Error, Result};
use tracing::debug;

/// One traversal run: owns the HTTP client, the endpoint record and the
/// option flags. No state survives across calls; every public method
/// starts from an empty link set.
pub struct Traversal {
    fetcher: Fetcher,
    endpoints: Endpoints,
    options: TraversalOptions,
}

impl Traversal {
    /// Creates a traversal with a freshly configured HTTP client.
    pub fn new(endpoints: Endpoints, options: TraversalOptions) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new()?,
            endpoints,
            options,
        })
    }

    /// Creates a traversal over an existing client (tests use one with a
    /// short timeout).
    #[must_use]
    pub const fn with_fetcher(
        fetcher: Fetcher,
        endpoints: Endpoints,
        options: TraversalOptions,
    ) -> Self {
        Self {
            fetcher,
            endpoints,
            options,
        }
    }

    /// Every link reachable from a single creation.
    pub async fn asset(&self, id: &AssetId) -> Result<Vec<String>> {
        let mut set = LinkSet::new();
        self.asset_into(id, &mut set).await?;
        if self.options.adventures {
            // The creation itself may be an adventure referencing children.
            let adventure = AdventureId::new(id.as_str())?;
            self.adventure_into(&adventure, &mut set).await?;
        }
        Ok(set.into_vec())
    }

    /// Every link reachable from a user root.
    pub async fn user(&self, username: &str) -> Result<Vec<String>> {
        let mut set = LinkSet::new();
        let user_id = resolver::resolve_user(&self.fetcher, &self.endpoints, username).await?;
        let pager = RestPager::new(&self.fetcher, &self.endpoints);

        if !self.options.is_static_only() {
            set.extend(links::user_links(
                &self.endpoints,
                username,
                &user_id,
                &self.options,
            ));
            set.extend(pager.page_links("assets/user", username, "asset", None).await?);
            set.extend(
                pager
                    .page_links("achievements", username, "achievement", None)
                    .await?,
            );
            set.extend(pager.page_links("users/buddies", username, "buddy", None).await?);
            set.extend(
                pager
                    .page_links("users/subscribers", username, "buddy", None)
                    .await?,
            );
        }

        let count_url = format!(
            "{}/user-thumbnail-count/{user_id}/0/0",
            self.endpoints.view
        );
        let count_body = self.fetcher.fetch(&count_url).await?;
        let count_doc = feed_text::strip_taglines(&count_body);
        let count = parse_asset_count(&count_doc, username)?;
        debug!(username, count, "asset count");

        if count != 0 {
            let list_url = format!(
                "{}/user-thumbnail-count/{user_id}/0/{count}",
                self.endpoints.view
            );
            if !self.options.is_static_only() {
                set.insert(list_url.clone());
            }

            debug!(username, "retrieving full asset list");
            let list_body = self.fetcher.fetch(&list_url).await?;
            let list_doc = feed_text::strip_names(&feed_text::strip_taglines(&list_body));
            for raw in model::asset_id_attributes(&list_doc)? {
                match AssetId::new(raw) {
                    Ok(id) => self.asset_into(&id, &mut set).await?,
                    Err(_) => debug!(username, "skipping malformed asset id in listing"),
                }
            }

            if self.options.adventures {
                let raw_ids = pager
                    .collect_ids("assets/user", username, "asset", Some("ADVENTURE"))
                    .await?;
                for raw in raw_ids {
                    match AdventureId::new(raw) {
                        Ok(id) => self.adventure_into(&id, &mut set).await?,
                        Err(_) => debug!(username, "skipping malformed adventure id in listing"),
                    }
                }
            }
        }

        Ok(set.into_vec())
    }

    /// Every link reachable from a feed root.
    pub async fn feed(&self, id: &FeedId) -> Result<Vec<String>> {
        let mut set = LinkSet::new();
        let pager = RestPager::new(&self.fetcher, &self.endpoints);

        if !self.options.is_static_only() {
            set.extend(
                pager
                    .page_links("assets/sporecast", id.as_str(), "asset", None)
                    .await?,
            );
            set.extend(links::feed_links(&self.endpoints, id, &self.options));
        }

        // The feed document itself is fetched even in static-only runs; it
        // is the only source of the member asset ids.
        let feed_url = format!("{}/sporecast/{id}", self.endpoints.atom);
        debug!(feed = %id, "retrieving feed document");
        let body = self.fetcher.fetch(&feed_url).await?;

        for asset in feed_text::asset_ids(&body) {
            self.asset_into(&asset, &mut set).await?;
        }
        if self.options.adventures {
            for adventure in feed_text::adventure_ids(&body) {
                self.adventure_into(&adventure, &mut set).await?;
            }
        }

        Ok(set.into_vec())
    }

    /// Adds the links of one creation, including live comment pagination
    /// when enabled.
    async fn asset_into(&self, id: &AssetId, set: &mut LinkSet) -> Result<()> {
        set.extend(links::asset_links(&self.endpoints, id, &self.options));
        if !self.options.is_static_only() && self.options.paginate_comments {
            let pager = RestPager::new(&self.fetcher, &self.endpoints);
            set.extend(
                pager
                    .page_links("comments", id.as_str(), "comment", None)
                    .await?,
            );
        }
        debug!(id = %id, "added links");
        Ok(())
    }

    /// Expands an adventure: fetches its model document and adds the links
    /// of every referenced child asset.
    async fn adventure_into(&self, id: &AdventureId, set: &mut LinkSet) -> Result<()> {
        let url = format!(
            "{}/model/{}.xml",
            self.endpoints.static_files,
            id.shard_path()
        );
        debug!(id = %id, "retrieving adventure model");
        let body = self.fetcher.fetch(&url).await?;

        for child in model::asset_references(&body)? {
            match AssetId::new(child) {
                Ok(child_id) => self.asset_into(&child_id, set).await?,
                Err(_) => debug!(id = %id, "skipping malformed asset reference in model"),
            }
        }
        Ok(())
    }
}

fn parse_asset_count(count_doc: &str, username: &str) -> Result<usize> {
    let raw = model::root_attribute(count_doc, "assetCount")?.ok_or_else(|| {
        Error::UnexpectedDocument(format!(
            "thumbnail count document for {username} has no assetCount attribute"
        ))
    })?;
    raw.trim().parse().map_err(|_| {
        Error::UnexpectedDocument(format!(
            "assetCount {raw:?} for {username} is not a number"
        ))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::too_many_lines)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn traversal(server: &MockServer, options: TraversalOptions) -> Traversal {
        Traversal::with_fetcher(
            Fetcher::new().unwrap(),
            Endpoints::rooted(&server.uri()),
            options,
        )
    }

    async fn mock_get(server: &MockServer, url_path: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(url_path.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
            .mount(server)
            .await;
    }

    async fn mock_empty_comments(server: &MockServer, id: &str) {
        mock_get(
            server,
            &format!("/rest/comments/{id}/0/500"),
            "<comments/>",
        )
        .await;
    }

    #[tokio::test]
    async fn asset_run_includes_comment_pages() {
        let server = MockServer::start().await;
        mock_empty_comments(&server, "500000000001").await;

        let t = traversal(&server, TraversalOptions::default());
        let id = AssetId::new("500000000001").unwrap();
        let result = t.asset(&id).await.unwrap();

        assert!(
            result.contains(&format!(
                "{}/rest/comments/500000000001/0/500",
                server.uri()
            ))
        );
        assert!(result.contains(&format!(
            "{}/static/model/500/000/000/500000000001.xml",
            server.uri()
        )));
    }

    #[tokio::test]
    async fn static_only_asset_run_touches_no_endpoint() {
        // No mocks mounted: any request would fail the run.
        let server = MockServer::start().await;
        let options = TraversalOptions {
            static_only: true,
            ..TraversalOptions::default()
        };
        let t = traversal(&server, options);
        let id = AssetId::new("500000000001").unwrap();
        let result = t.asset(&id).await.unwrap();
        assert_eq!(result.len(), 6);
        assert!(result.iter().all(|l| l.contains("/static/")));
    }

    #[tokio::test]
    async fn composite_recursion_unions_child_link_sets() {
        let server = MockServer::start().await;
        let model_doc = "<adventure><assets>\
                         <asset>500000000011</asset>\
                         <asset>500000000012</asset>\
                         <asset>500000000013</asset>\
                         </assets></adventure>";
        mock_get(&server, "/static/model/500/000/000/500000000099.xml", model_doc).await;

        let options = TraversalOptions {
            adventures: true,
            paginate_comments: false,
            ..TraversalOptions::default()
        };
        let t = traversal(&server, options);

        let root = AssetId::new("500000000099").unwrap();
        let result = t.asset(&root).await.unwrap();

        // Each child contributes exactly the links a direct builder call
        // would produce.
        let endpoints = Endpoints::rooted(&server.uri());
        for child in ["500000000011", "500000000012", "500000000013"] {
            let child_id = AssetId::new(child).unwrap();
            for link in links::asset_links(&endpoints, &child_id, &options) {
                assert!(result.contains(&link), "missing {link}");
            }
        }
    }

    #[tokio::test]
    async fn adventure_model_fetch_failure_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/static/model/500/000/000/500000000099.xml"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let options = TraversalOptions {
            adventures: true,
            paginate_comments: false,
            ..TraversalOptions::default()
        };
        let t = traversal(&server, options);
        let root = AssetId::new("500000000099").unwrap();
        let err = t.asset(&root).await.unwrap_err();
        assert!(matches!(err, Error::Http { status: 404, .. }));
    }

    async fn mock_user_base(server: &MockServer, username: &str, user_id: &str, count: usize) {
        mock_get(
            server,
            &format!("/rest/user/{username}"),
            &format!("<user><status>1</status><id>{user_id}</id></user>"),
        )
        .await;
        for (endpoint, body) in [
            (format!("/rest/assets/user/{username}/0/500"), "<assets/>"),
            (format!("/rest/achievements/{username}/0/500"), "<achievements/>"),
            (format!("/rest/users/buddies/{username}/0/500"), "<buddies/>"),
            (
                format!("/rest/users/subscribers/{username}/0/500"),
                "<buddies/>",
            ),
        ] {
            mock_get(server, &endpoint, body).await;
        }
        mock_get(
            server,
            &format!("/view/user-thumbnail-count/{user_id}/0/0"),
            &format!("<sporeModel assetCount=\"{count}\"><tagline>x</tagline></sporeModel>"),
        )
        .await;
    }

    #[tokio::test]
    async fn zero_count_user_yields_base_links_only() {
        let server = MockServer::start().await;
        mock_user_base(&server, "Somebody", "2266231815", 0).await;

        let t = traversal(&server, TraversalOptions::default());
        let result = t.user("Somebody").await.unwrap();

        let endpoints = Endpoints::rooted(&server.uri());
        let base = links::user_links(
            &endpoints,
            "Somebody",
            &crate::UserId::new("2266231815"),
            &TraversalOptions::default(),
        );
        for link in &base {
            assert!(result.contains(link), "missing {link}");
        }
        // Base links plus the four visited listing pages, nothing per-asset.
        assert_eq!(result.len(), base.len() + 4);
        assert!(!result.iter().any(|l| l.contains("/static/")));
    }

    #[tokio::test]
    async fn user_with_assets_expands_each_listed_creation() {
        let server = MockServer::start().await;
        mock_user_base(&server, "Somebody", "2266231815", 2).await;
        mock_get(
            &server,
            "/view/user-thumbnail-count/2266231815/0/2",
            "<sporeModel assetCount=\"2\"><assets>\
             <asset id=\"500000000021\"><name>A &</name></asset>\
             <asset id=\"500000000022\"><tagline>broken <markup</tagline></asset>\
             </assets></sporeModel>",
        )
        .await;
        mock_empty_comments(&server, "500000000021").await;
        mock_empty_comments(&server, "500000000022").await;

        let t = traversal(&server, TraversalOptions::default());
        let result = t.user("Somebody").await.unwrap();

        assert!(result.contains(&format!(
            "{}/view/user-thumbnail-count/2266231815/0/2",
            server.uri()
        )));
        assert!(result.contains(&format!(
            "{}/static/thumb/500/000/000/500000000021.png",
            server.uri()
        )));
        assert!(result.contains(&format!(
            "{}/rest/asset/500000000022",
            server.uri()
        )));
    }

    #[tokio::test]
    async fn unknown_user_aborts_the_run() {
        let server = MockServer::start().await;
        mock_get(
            &server,
            "/rest/user/Nobody",
            "<user><status>0</status></user>",
        )
        .await;

        let t = traversal(&server, TraversalOptions::default());
        let err = t.user("Nobody").await.unwrap_err();
        assert!(matches!(err, Error::UserNotFound(_)));
    }

    fn feed_entry(id: &str, media_type: &str) -> String {
        format!(
            "<entry><id>tag:spore.com,2006:asset/{id}</id>\
             <link type=\"{media_type}\" href=\"x\"/></entry>"
        )
    }

    #[tokio::test]
    async fn feed_run_expands_every_member_asset() {
        let server = MockServer::start().await;
        let feed_doc = format!(
            "<feed><id>tag:spore.com,2006:sporecast/500377997998</id>{}{}</feed>",
            feed_entry("500000000031", "application/x-creature+xml"),
            feed_entry("500000000032", "application/x-creature+xml"),
        );
        mock_get(&server, "/atom/sporecast/500377997998", &feed_doc).await;
        mock_get(
            &server,
            "/rest/assets/sporecast/500377997998/0/500",
            "<assets/>",
        )
        .await;
        mock_empty_comments(&server, "500000000031").await;
        mock_empty_comments(&server, "500000000032").await;

        let t = traversal(&server, TraversalOptions::default());
        let result = t.feed(&FeedId::new("500377997998")).await.unwrap();

        assert!(result.contains(&format!(
            "{}/atom/sporecast/500377997998",
            server.uri()
        )));
        assert!(result.contains(&format!(
            "{}/pollinator/atom/aggregator/500377997998",
            server.uri()
        )));
        assert!(result.contains(&format!(
            "{}/static/model/500/000/000/500000000031.xml",
            server.uri()
        )));
        assert!(result.contains(&format!(
            "{}/rest/creature/500000000032",
            server.uri()
        )));
    }

    #[tokio::test]
    async fn static_only_feed_run_keeps_member_files_only() {
        let server = MockServer::start().await;
        let feed_doc = format!(
            "<feed>{}{}</feed>",
            feed_entry("500000000031", "application/x-creature+xml"),
            feed_entry("500000000032", "application/x-creature+xml"),
        );
        mock_get(&server, "/atom/sporecast/500377997998", &feed_doc).await;

        let options = TraversalOptions {
            static_only: true,
            ..TraversalOptions::default()
        };
        let t = traversal(&server, options);
        let result = t.feed(&FeedId::new("500377997998")).await.unwrap();

        assert!(!result.iter().any(|l| l.contains("/rest/")));
        assert!(!result.iter().any(|l| l.contains("/pollinator/")));
        // Two members, six static links each.
        assert_eq!(result.len(), 12);
    }

    #[tokio::test]
    async fn feed_with_adventures_expands_their_children() {
        let server = MockServer::start().await;
        let feed_doc = format!(
            "<feed><id>tag:spore.com,2006:sporecast/1</id>{}{}{}</feed>",
            feed_entry("500000000041", "application/x-creature+xml"),
            feed_entry("500000000042", "application/x-adventure+xml"),
            feed_entry("500000000043", "application/x-creature+xml"),
        );
        mock_get(&server, "/atom/sporecast/500377997998", &feed_doc).await;
        mock_get(
            &server,
            "/rest/assets/sporecast/500377997998/0/500",
            "<assets/>",
        )
        .await;
        mock_get(
            &server,
            "/static/model/500/000/000/500000000042.xml",
            "<adventure><asset>500000000044</asset></adventure>",
        )
        .await;

        let options = TraversalOptions {
            adventures: true,
            paginate_comments: false,
            ..TraversalOptions::default()
        };
        let t = traversal(&server, options);
        let result = t.feed(&FeedId::new("500377997998")).await.unwrap();

        // The adventure's child shows up with full asset links.
        assert!(result.contains(&format!(
            "{}/static/thumb/500/000/000/500000000044.png",
            server.uri()
        )));
        assert!(result.contains(&format!(
            "{}/rest/asset/500000000044",
            server.uri()
        )));
    }

    #[tokio::test]
    async fn repeated_runs_deduplicate_to_the_same_set() {
        let server = MockServer::start().await;
        mock_empty_comments(&server, "500000000001").await;

        let t = traversal(&server, TraversalOptions::default());
        let id = AssetId::new("500000000001").unwrap();

        let first = t.asset(&id).await.unwrap();
        let second = t.asset(&id).await.unwrap();

        let mut concatenated = LinkSet::new();
        concatenated.extend(first.clone());
        concatenated.extend(second);
        assert_eq!(concatenated.into_vec(), first);
    }
}
