//! Hacker News search client
//!
//! This crate provides a trait-based client for the Algolia HN Search API.
//! The wire types returned by the API are intentionally separate from
//! application domain models to keep this crate pure and reusable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              SearchClient trait                  │
//! │  - search_stories()                              │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────────┐
//!              │  HttpSearchClient   │
//!              │  (reqwest backend)  │
//!              └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use hn_search_client::{HttpSearchClient, SearchClient};
//!
//! # async fn example() -> Result<(), hn_search_client::SearchError> {
//! let client = HttpSearchClient::new(hn_search_client::DEFAULT_API_BASE)?;
//! let page = client.search_stories("rust").await?;
//! println!("{} hits", page.nb_hits);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

/// Default base URL of the Algolia HN Search API
pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1";

pub use client::SearchClient;
pub use error::SearchError;
pub use http_client::HttpSearchClient;
pub use types::{SearchHit, SearchPage};
