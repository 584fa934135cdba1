//! # solrstream
//!
//! A minimal, Rust-native client for the Solr `/select` query endpoint,
//! with cursor-based result streaming.
//!
//! ## Features
//!
//! - **Select queries**: single GET to `{collection}/select` with arbitrary
//!   query parameters and a typed response envelope
//! - **Cursor streaming**: paginated retrieval driven by `cursorMark`,
//!   delivered as a lazy [`futures::Stream`] of pages with backpressure
//! - **HTTP Basic auth**: attached automatically when credentials are set
//! - **Injected transport**: bring your own [`reqwest::Client`]; timeouts,
//!   proxies and pooling stay the caller's concern
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use solrstream::{ClientConfig, SelectParams, SolrClient};
//!
//! #[tokio::main]
//! async fn main() -> solrstream::Result<()> {
//!     let config = ClientConfig::builder()
//!         .endpoint("http://localhost:8983/solr/books")
//!         .credentials("reader", "hunter2")
//!         .build()?;
//!     let client = SolrClient::new(config);
//!
//!     // One-shot query
//!     let page = client.select(&SelectParams::new().q("title:rust")).await?;
//!     println!("{} matches", page.num_found());
//!
//!     // Cursor-paginated query
//!     let params = SelectParams::new().q("*:*").sort("id asc").rows(100);
//!     let mut pages = client.cursor(params);
//!     while let Some(page) = pages.next().await {
//!         for doc in page?.docs() {
//!             // Documents are schema-free JSON values
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      SolrClient                      │
//! │   select(params) → SolrResponse                      │
//! │   cursor(params) → CursorStream                      │
//! └──────────────────────────────────────────────────────┘
//!                           │
//! ┌───────────┬─────────────┴───────────┬────────────────┐
//! │  select   │         cursor          │    response    │
//! ├───────────┼─────────────────────────┼────────────────┤
//! │ URL build │ fetch loop on a task    │ serde envelope │
//! │ Basic auth│ cursorMark advance      │ opaque docs    │
//! │ classify  │ rendezvous channel      │ error block    │
//! └───────────┴─────────────────────────┴────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Connection configuration
pub mod config;

/// Select query parameters
pub mod params;

/// Response envelope types
pub mod response;

/// Single-shot select execution
pub mod select;

/// Cursor-paginated streaming
pub mod cursor;

/// Client facade
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::SolrClient;
pub use config::{BasicCredentials, ClientConfig, ClientConfigBuilder};
pub use cursor::CursorStream;
pub use error::{Error, Result};
pub use params::SelectParams;
pub use response::{EchoedParams, ResponseBody, ResponseHeader, SolrErrorBody, SolrResponse};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
