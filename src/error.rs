//! Error types for solrstream
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::response::SolrResponse;
use thiserror::Error;

/// The main error type for solrstream
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// A configuration problem detected before any network I/O
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
    },

    /// The endpoint URL does not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// A network-level failure (DNS, connect, timeout, TLS) or a failed
    /// body read, surfaced from the injected client as-is
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // ============================================================================
    // HTTP Classification Errors
    // ============================================================================
    /// A 4xx response. Carries the HTTP status line only; the body is
    /// deliberately left unread.
    #[error("{message}")]
    HttpStatus {
        /// The HTTP status code
        status: u16,
        /// The HTTP status line, e.g. `404 Not Found`
        message: String,
    },

    // ============================================================================
    // Engine Errors
    // ============================================================================
    /// A 5xx response whose body decoded as a response envelope. The
    /// envelope travels with the error so callers can inspect diagnostic
    /// fields (trace, echoed params) on failure.
    #[error("{message}")]
    Engine {
        /// The engine's embedded error message, or the status line when
        /// the engine sent none
        message: String,
        /// The decoded envelope, partially populated
        envelope: Box<SolrResponse>,
    },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    /// The response body is not valid JSON or does not match the
    /// envelope shape
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error from a status line
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
        }
    }

    /// Create an engine-reported error carrying its envelope
    pub fn engine(message: impl Into<String>, envelope: SolrResponse) -> Self {
        Self::Engine {
            message: message.into(),
            envelope: Box::new(envelope),
        }
    }

    /// The HTTP status code, for the variants that carry one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Engine { envelope, .. } => {
                u16::try_from(envelope.response_header.status).ok()
            }
            _ => None,
        }
    }

    /// The diagnostic envelope attached to an engine-reported error
    pub fn envelope(&self) -> Option<&SolrResponse> {
        match self {
            Error::Engine { envelope, .. } => Some(envelope),
            _ => None,
        }
    }
}

/// Result type alias for solrstream
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("missing endpoint");
        assert_eq!(err.to_string(), "Configuration error: missing endpoint");

        let err = Error::http_status(404, "404 Not Found");
        assert_eq!(err.to_string(), "404 Not Found");

        let err = Error::engine("boom", SolrResponse::default());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(Error::http_status(404, "404 Not Found").status(), Some(404));
        assert_eq!(Error::config("x").status(), None);

        let mut envelope = SolrResponse::default();
        envelope.response_header.status = 500;
        assert_eq!(Error::engine("boom", envelope).status(), Some(500));
    }

    #[test]
    fn test_envelope_accessor() {
        let mut envelope = SolrResponse::default();
        envelope.next_cursor_mark = "AoE1".to_string();
        let err = Error::engine("boom", envelope);
        assert_eq!(err.envelope().unwrap().next_cursor_mark, "AoE1");

        assert!(Error::config("x").envelope().is_none());
    }

    #[test]
    fn test_from_url_parse_error() {
        let parse_err = url::Url::parse("::not a url::").unwrap_err();
        let err = Error::from(parse_err);
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
