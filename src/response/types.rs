//! Envelope type definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The decoded envelope of one select response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolrResponse {
    /// Header metadata echoed by the engine
    #[serde(rename = "responseHeader")]
    pub response_header: ResponseHeader,

    /// Error block, present only on engine-reported failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SolrErrorBody>,

    /// The result body
    pub response: ResponseBody,

    /// Continuation token for the next page; equals the token just sent
    /// on the final page
    #[serde(rename = "nextCursorMark")]
    pub next_cursor_mark: String,

    /// Opaque highlighting block, if highlighting was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighting: Option<Value>,
}

impl SolrResponse {
    /// The matched documents of this page, as schema-free JSON values
    pub fn docs(&self) -> &[Value] {
        &self.response.docs
    }

    /// Total number of matches across all pages
    pub fn num_found(&self) -> i64 {
        self.response.num_found
    }

    /// The engine's error message, when the error block carries one
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .map(|e| e.msg.as_str())
            .filter(|msg| !msg.is_empty())
    }
}

/// Header metadata of a select response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseHeader {
    /// Whether the node answering is connected to ZooKeeper
    #[serde(rename = "zkConnected")]
    pub zk_connected: bool,

    /// Engine status code, 0 on success
    pub status: i32,

    /// Query time in milliseconds
    #[serde(rename = "QTime")]
    pub q_time: i32,

    /// The request parameters as the engine saw them
    pub params: EchoedParams,
}

/// Request parameters echoed back in the response header
///
/// Solr returns these as strings regardless of their logical type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EchoedParams {
    /// The query string
    pub q: String,
    /// The field list
    pub fl: String,
    /// The continuation token that was sent
    #[serde(rename = "cursorMark")]
    pub cursor_mark: String,
    /// The sort clause
    pub sort: String,
    /// The page size
    pub rows: String,
    /// The result offset
    pub start: String,
}

/// Engine-reported error details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolrErrorBody {
    /// Human-readable error message
    pub msg: String,
    /// Server-side stack trace, often empty
    pub trace: String,
}

/// The result body of a select response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseBody {
    /// Total number of matches found
    #[serde(rename = "numFound")]
    pub num_found: i64,

    /// Offset of the first returned document
    pub start: i64,

    /// The returned documents; schema is caller-defined, so each document
    /// stays an untyped JSON value
    pub docs: Vec<Value>,
}
