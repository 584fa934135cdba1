//! Client facade
//!
//! [`SolrClient`] ties a [`ClientConfig`] to an injected
//! [`reqwest::Client`] and exposes the two operations: one-shot
//! [`select`](SolrClient::select) and paginated
//! [`cursor`](SolrClient::cursor).

use crate::config::ClientConfig;
use crate::cursor::CursorStream;
use crate::error::Result;
use crate::params::SelectParams;
use crate::response::SolrResponse;
use crate::select;
use reqwest::Client;

/// Client for one Solr collection
///
/// Cloning is cheap: the underlying `reqwest::Client` is an `Arc`
/// internally and the config is small.
#[derive(Debug, Clone)]
pub struct SolrClient {
    config: ClientConfig,
    http: Client,
}

impl SolrClient {
    /// Create a client with a default HTTP client
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Create a client with an injected HTTP client.
    ///
    /// Timeouts, proxies, TLS settings and connection pooling are the
    /// injected client's concern; this crate adds none of its own.
    pub fn with_http_client(config: ClientConfig, http: Client) -> Self {
        Self { config, http }
    }

    /// The connection configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a single select query and decode the response envelope.
    pub async fn select(&self, params: &SelectParams) -> Result<SolrResponse> {
        select::select(&self.config, params, &self.http).await
    }

    /// Stream the pages of a cursor select query.
    ///
    /// The stream takes its own working copy of `params`; `cursorMark`
    /// defaults to `*` when absent. Cursor queries require a sort on the
    /// collection's unique key for the token to advance.
    pub fn cursor(&self, params: SelectParams) -> CursorStream {
        CursorStream::spawn(self.config.clone(), params, self.http.clone())
    }
}
