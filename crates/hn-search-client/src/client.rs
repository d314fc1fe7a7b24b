//! Search client trait
//!
//! Defines the interface for querying the story search API.
//! Implementations can be direct (hitting the API) or decorated with
//! retry, caching, or test doubles.

use crate::error::SearchError;
use crate::types::SearchPage;
use async_trait::async_trait;

/// Story search API client trait
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use hn_search_client::{SearchClient, SearchPage};
///
/// async fn front_page(client: &dyn SearchClient) -> Result<SearchPage, SearchError> {
///     // An empty query returns the current front page
///     client.search_stories("").await
/// }
/// ```
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Search stories matching a query term
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search term; the empty string returns
    ///   unfiltered front-page results
    ///
    /// # Returns
    ///
    /// One page of matching hits, or an error if the API call fails.
    async fn search_stories(&self, query: &str) -> Result<SearchPage, SearchError>;
}
