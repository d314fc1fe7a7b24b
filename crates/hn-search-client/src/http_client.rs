//! HTTP implementation of the search client
//!
//! Thin reqwest wrapper around the Algolia HN Search API. The client is
//! cheap to clone (reqwest pools connections internally) and carries the
//! API base URL so tests and self-hosted mirrors can point it elsewhere.

use crate::client::SearchClient;
use crate::error::SearchError;
use crate::types::SearchPage;
use async_trait::async_trait;
use std::time::Duration;

const USER_AGENT: &str = concat!("hn-stories/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Search client talking to the Algolia HN Search API over HTTPS
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSearchClient {
    /// Create a client for the given API base URL
    ///
    /// Trailing slashes on the base URL are tolerated.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    /// The API base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search_stories(&self, query: &str) -> Result<SearchPage, SearchError> {
        let url = self.search_url();
        log::debug!("GET {} query={:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(&[("query", query), ("tags", "story")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Search API answered {} for query {:?}", status, query);
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let page = response.json::<SearchPage>().await?;
        log::debug!(
            "Search for {:?} returned {} of {} hits",
            query,
            page.hits.len(),
            page.nb_hits
        );

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = HttpSearchClient::new("https://hn.algolia.com/api/v1/").unwrap();
        assert_eq!(client.base_url(), "https://hn.algolia.com/api/v1");
        assert_eq!(client.search_url(), "https://hn.algolia.com/api/v1/search");
    }

    #[test]
    fn test_default_base_url() {
        let client = HttpSearchClient::new(crate::DEFAULT_API_BASE).unwrap();
        assert_eq!(client.search_url(), "https://hn.algolia.com/api/v1/search");
    }
}
