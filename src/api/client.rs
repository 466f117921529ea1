use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::timeout;
use url::Url;

use super::error::SearchError;
use super::model::{decode_envelope, SearchOutcome};

/// Public catalog endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1/";

const SEARCH_PATH: &str = "search.php";
const QUERY_PARAM: &str = "s";

/// Seam between the controller and the network.
///
/// Every call resolves to an outcome or an error; implementations must not
/// block indefinitely.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Upper bound for the whole request, body included.
    pub request: Duration,
    pub connect: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(30),
            connect: Duration::from_secs(5),
        }
    }
}

/// `CatalogClient` backed by reqwest.
pub struct HttpCatalogClient {
    client: Client,
    base_url: Url,
    timeouts: TimeoutConfig,
}

impl HttpCatalogClient {
    pub fn new(base_url: Url, timeouts: TimeoutConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .build()?;

        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
            timeouts,
        })
    }

    /// Full request URL for a query, with the term bound to `s`.
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(SEARCH_PATH);
        }
        url.query_pairs_mut().clear().append_pair(QUERY_PARAM, query);
        url
    }

    async fn fetch(&self, url: Url) -> Result<SearchOutcome, SearchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(decode_envelope(&body)?.into_outcome())
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let url = self.search_url(query);
        tracing::debug!(%url, "Searching catalog");

        let result = match timeout(self.timeouts.request, self.fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(SearchError::Timeout {
                after: self.timeouts.request,
            }),
        };

        match &result {
            Ok(SearchOutcome::Found(items)) => {
                tracing::info!(query, count = items.len(), "Catalog search succeeded")
            }
            Ok(SearchOutcome::NoResults) => tracing::info!(query, "Catalog has no matches"),
            Err(err) => tracing::warn!(query, error = %err, "Catalog search failed"),
        }
        result
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
