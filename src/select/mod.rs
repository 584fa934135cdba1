//! Single-shot select execution
//!
//! Builds one GET request to `{collection}/select`, executes it through the
//! injected [`reqwest::Client`], and classifies the outcome:
//!
//! - transport failure → [`Error::Http`](crate::Error::Http)
//! - 4xx → [`Error::HttpStatus`](crate::Error::HttpStatus), body unread
//! - 5xx → [`Error::Engine`](crate::Error::Engine) with the decoded
//!   envelope attached for diagnostics
//! - 2xx/3xx → decoded [`SolrResponse`](crate::SolrResponse)
//!
//! Only the JSON wire format is supported: `wt=json` is forced on every
//! request because `nextCursorMark` is only reliably present there.

mod executor;

pub use executor::select;
