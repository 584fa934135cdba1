//! Request construction, execution and response classification

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::params::{SelectParams, MATCH_ALL};
use crate::response::SolrResponse;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

/// Execute a single select request against the collection endpoint.
///
/// The parameter set is used as-is except that `q` defaults to the
/// match-all query and `wt` is forced to `json`.
pub async fn select(
    config: &ClientConfig,
    params: &SelectParams,
    http: &Client,
) -> Result<SolrResponse> {
    let url = build_select_url(config.endpoint(), params)?;

    let mut request = http.get(url.clone());
    for (key, value) in config.headers() {
        request = request.header(key.as_str(), value.as_str());
    }
    if let Some(credentials) = config.credentials() {
        request = request.header(
            AUTHORIZATION,
            basic_auth_value(&credentials.username, &credentials.password),
        );
    }

    let response = request.send().await?;
    let status = response.status();
    debug!(%url, status = status.as_u16(), "select request completed");

    classify(status, response).await
}

/// Build the full request URL: the `select` path segment appended to the
/// endpoint's existing path, plus the prepared query string.
pub(crate) fn build_select_url(endpoint: &Url, params: &SelectParams) -> Result<Url> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|()| Error::config("endpoint URL cannot be a base"))?
        .pop_if_empty()
        .push("select");

    {
        let mut query = url.query_pairs_mut();
        query.clear();
        if params.get("q").is_none() {
            query.append_pair("q", MATCH_ALL);
        }
        for (key, value) in params.iter() {
            if key == "wt" {
                continue;
            }
            query.append_pair(key, value);
        }
        query.append_pair("wt", "json");
    }

    Ok(url)
}

/// `Authorization` header value for HTTP Basic auth
pub(crate) fn basic_auth_value(username: &str, password: &str) -> String {
    let credentials = STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {credentials}")
}

/// Classify the HTTP response and decode the envelope.
async fn classify(status: StatusCode, response: reqwest::Response) -> Result<SolrResponse> {
    // 4xx bodies are not guaranteed to be well-formed error envelopes, so
    // they are not read at all.
    if status.is_client_error() {
        return Err(Error::http_status(status.as_u16(), status_line(status)));
    }

    let body = response.text().await?;

    if status.is_server_error() {
        return match serde_json::from_str::<SolrResponse>(&body) {
            Ok(envelope) => {
                let message = envelope
                    .error_message()
                    .map_or_else(|| status_line(status), ToString::to_string);
                warn!(status = status.as_u16(), %message, "engine reported an error");
                Err(Error::engine(message, envelope))
            }
            Err(_) => Err(Error::http_status(status.as_u16(), status_line(status))),
        };
    }

    Ok(serde_json::from_str(&body)?)
}

/// Status line in the `404 Not Found` form
pub(crate) fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}
