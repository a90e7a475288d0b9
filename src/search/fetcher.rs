//! Remote search requests.
//!
//! [`SearchBackend`] is the seam between the interaction core and the network.
//! [`SearchClient`] is the HTTP implementation; [`Fetcher`] turns a backend into
//! the fire-and-forget `fetch(query, on_results)` operation used by the
//! controller.
//!
//! The fetcher provides no ordering and no cancellation. Several requests may
//! be in flight at once and complete in any order; discarding stale
//! completions is the selection state machine's job.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::task::JoinHandle;
use url::Url;

use crate::config::Config;
use crate::error::{DocJumpError, Result};

use super::types::{Query, ResultSet, SearchResult};

/// Something that can answer a query with an ordered result list.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &Query) -> Result<ResultSet>;
}

/// Response body of the search endpoint. Only `results` is consumed.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

/// Parse a search endpoint response body.
///
/// A record missing any of `group_name`, `jar_name` or `version` fails the
/// whole response; partial result lists are never produced.
pub fn parse_response(body: &[u8]) -> Result<ResultSet> {
    let response: SearchResponse = serde_json::from_slice(body)?;
    Ok(ResultSet::new(response.results))
}

/// HTTP client for a Clojars-compatible search endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: Url,
}

impl SearchClient {
    /// Build a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.search_url()?,
            config.request_timeout(),
            config.connect_timeout(),
        )
    }

    pub fn new(endpoint: Url, timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("docjump/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// The request URL for `query`: the endpoint plus `q` and `format=json`.
    pub fn request_url(&self, query: &Query) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query.as_str())
            .append_pair("format", "json");
        url
    }
}

#[async_trait]
impl SearchBackend for SearchClient {
    async fn search(&self, query: &Query) -> Result<ResultSet> {
        let url = self.request_url(query);
        tracing::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DocJumpError::HttpStatus(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown").to_string(),
            ));
        }

        let body = response.bytes().await?;
        parse_response(&body)
    }
}

/// Fire-and-forget query dispatcher.
#[derive(Clone)]
pub struct Fetcher {
    backend: Arc<dyn SearchBackend>,
}

impl Fetcher {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Issue one request for `query` on a new task.
    ///
    /// `on_results` runs exactly once if the request and parse succeed and is
    /// dropped uncalled otherwise; failures are logged here and go no further.
    /// There is no retry.
    pub fn fetch<F>(&self, query: Query, on_results: F) -> JoinHandle<()>
    where
        F: FnOnce(ResultSet) + Send + 'static,
    {
        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            match backend.search(&query).await {
                Ok(results) => on_results(results),
                Err(e) => tracing::warn!("Search for '{query}' failed: {e}"),
            }
        })
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher").finish_non_exhaustive()
    }
}
