//! Connection configuration
//!
//! A [`ClientConfig`] describes one Solr collection: its endpoint URL,
//! optional HTTP Basic credentials, and extra headers attached to every
//! request. It is immutable once built; the endpoint is validated at build
//! time so URL problems surface before any network I/O.

use crate::error::{Error, Result};
use std::collections::HashMap;
use url::Url;

/// HTTP Basic credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    /// Username, always non-empty
    pub username: String,
    /// Password, may be empty
    pub password: String,
}

/// Connection settings for a Solr collection
#[derive(Debug, Clone)]
pub struct ClientConfig {
    endpoint: Url,
    credentials: Option<BasicCredentials>,
    headers: HashMap<String, String>,
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// The validated collection endpoint URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The Basic credentials, if a username was configured
    pub fn credentials(&self) -> Option<&BasicCredentials> {
        self.credentials.as_ref()
    }

    /// Extra headers attached to every request
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    endpoint: Option<String>,
    username: String,
    password: String,
    headers: HashMap<String, String>,
}

impl ClientConfigBuilder {
    /// Set the collection endpoint URL, e.g. `http://localhost:8983/solr/books`
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set HTTP Basic credentials. An empty username disables auth.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Add a header sent with every request
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Validate the endpoint and build the config
    pub fn build(self) -> Result<ClientConfig> {
        let raw = self
            .endpoint
            .ok_or_else(|| Error::config("endpoint URL is required"))?;
        let endpoint = Url::parse(&raw)?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::config(format!(
                "endpoint URL cannot be a base: {raw}"
            )));
        }

        let credentials = if self.username.is_empty() {
            None
        } else {
            Some(BasicCredentials {
                username: self.username,
                password: self.password,
            })
        };

        Ok(ClientConfig {
            endpoint,
            credentials,
            headers: self.headers,
        })
    }
}
