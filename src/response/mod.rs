//! Response envelope types
//!
//! Serde types for the JSON envelope Solr returns from `/select`:
//! header metadata, the error block, the result body with schema-free
//! documents, the continuation token, and the optional highlighting block.
//!
//! Every block is tolerant of absence: Solr omits `error`, `highlighting`
//! and `nextCursorMark` freely depending on the query, and older versions
//! drop header fields. Missing pieces decode to their defaults.

mod types;

pub use types::{EchoedParams, ResponseBody, ResponseHeader, SolrErrorBody, SolrResponse};

#[cfg(test)]
mod tests;
