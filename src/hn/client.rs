//! HTTP client for the ranking and item endpoints.

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::BOT_USER_AGENT;
use crate::hn::item::{PostItem, RawItem};
use crate::hn::{FetchError, RankingKind};

/// Client for the upstream story API.
///
/// Holds one shared HTTP client; every request carries the bot user agent
/// and the configured timeout.
#[derive(Debug, Clone)]
pub struct HnClient {
    http: Client,
    base_url: String,
}

impl HnClient {
    /// Create a new client from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(BOT_USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the ordered id list for a ranking.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the endpoint answers outside
    /// the 2xx range, or the body is not a JSON array of integers.
    pub async fn fetch_ranked_ids(&self, ranking: RankingKind) -> Result<Vec<u64>, FetchError> {
        let url = format!("{}/{}", self.base_url, ranking.stories_path());
        debug!(url = %url, "Fetching ranked id list");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        response
            .json::<Vec<u64>>()
            .await
            .map_err(|source| FetchError::MalformedResponse { url, source })
    }

    /// Fetch one item record and normalize it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the endpoint answers outside
    /// the 2xx range, or the body is not an item object. The API serves a
    /// bare `null` for unknown ids, which surfaces as a malformed response.
    pub async fn fetch_item(&self, id: u64) -> Result<PostItem, FetchError> {
        let url = format!("{}/item/{id}.json", self.base_url);
        debug!(url = %url, "Fetching item");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let raw: RawItem = response
            .json()
            .await
            .map_err(|source| FetchError::MalformedResponse { url, source })?;

        Ok(PostItem::from(raw))
    }

    /// Fetch the first `n` posts of a ranking, preserving list order.
    ///
    /// Item fetches run strictly in sequence. A failed item is logged with
    /// its id and skipped, so the returned sequence may be shorter than `n`;
    /// only the list request itself fails the call.
    ///
    /// # Errors
    ///
    /// Returns an error when the ranking list cannot be fetched or parsed.
    pub async fn fetch_top_n(
        &self,
        ranking: RankingKind,
        n: usize,
    ) -> Result<Vec<PostItem>, FetchError> {
        let ids = self.fetch_ranked_ids(ranking).await?;

        let mut posts = Vec::with_capacity(n.min(ids.len()));
        for id in ids.into_iter().take(n) {
            match self.fetch_item(id).await {
                Ok(post) => posts.push(post),
                Err(e) => warn!(id, error = %e, "Skipping post after failed item fetch"),
            }
        }

        Ok(posts)
    }
}
