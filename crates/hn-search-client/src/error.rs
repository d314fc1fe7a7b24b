//! Typed errors for search API calls

use thiserror::Error;

/// Errors returned by [`crate::SearchClient`] implementations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure (connect, timeout, TLS, body decode)
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("search API returned HTTP {status}")]
    Status { status: u16 },
}
