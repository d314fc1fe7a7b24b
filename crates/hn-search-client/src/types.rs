//! Search API data transfer objects
//!
//! These types mirror the JSON returned by the Algolia HN Search API.
//! Hits are loosely typed on the wire: non-story hits (comments, polls)
//! carry `null` for story-only fields, so everything except `objectID`
//! is optional here. Consumers convert hits into their own domain models.

use serde::{Deserialize, Serialize};

/// One page of search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    /// Matching records for this page
    pub hits: Vec<SearchHit>,

    /// Total number of matching records across all pages
    #[serde(rename = "nbHits", default)]
    pub nb_hits: u64,

    /// Zero-based page index
    #[serde(default)]
    pub page: u64,

    /// Total number of pages
    #[serde(rename = "nbPages", default)]
    pub nb_pages: u64,

    /// Page size the API used
    #[serde(rename = "hitsPerPage", default)]
    pub hits_per_page: u64,
}

/// A single search hit from the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Unique record identifier, stable across requests
    #[serde(rename = "objectID")]
    pub object_id: String,

    /// Story title (absent for comment hits)
    #[serde(default)]
    pub title: Option<String>,

    /// Link the story points at (absent for Ask HN and comments)
    #[serde(default)]
    pub url: Option<String>,

    /// Submitter's username
    #[serde(default)]
    pub author: Option<String>,

    /// Comment count
    #[serde(default)]
    pub num_comments: Option<u64>,

    /// Upvote score
    #[serde(default)]
    pub points: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_page() {
        let json = r#"{
            "hits": [
                {
                    "title": "Rust 1.80 released",
                    "url": "https://blog.rust-lang.org/",
                    "author": "steveklabnik",
                    "points": 512,
                    "num_comments": 143,
                    "objectID": "40980001"
                }
            ],
            "nbHits": 1,
            "page": 0,
            "nbPages": 1,
            "hitsPerPage": 20
        }"#;

        let page: SearchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.nb_hits, 1);
        assert_eq!(page.hits.len(), 1);

        let hit = &page.hits[0];
        assert_eq!(hit.object_id, "40980001");
        assert_eq!(hit.title.as_deref(), Some("Rust 1.80 released"));
        assert_eq!(hit.points, Some(512));
        assert_eq!(hit.num_comments, Some(143));
    }

    #[test]
    fn test_deserialize_hit_with_nulls() {
        // Comment hits carry nulls for story-only fields
        let json = r#"{
            "title": null,
            "url": null,
            "author": "someone",
            "points": null,
            "num_comments": null,
            "objectID": "123"
        }"#;

        let hit: SearchHit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.object_id, "123");
        assert!(hit.title.is_none());
        assert!(hit.url.is_none());
        assert!(hit.points.is_none());
    }

    #[test]
    fn test_deserialize_hit_with_missing_fields() {
        let json = r#"{"objectID": "456"}"#;
        let hit: SearchHit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.object_id, "456");
        assert!(hit.author.is_none());
        assert!(hit.num_comments.is_none());
    }

    #[test]
    fn test_search_hit_roundtrip_keeps_wire_names() {
        let hit = SearchHit {
            object_id: "789".to_string(),
            title: Some("Show HN".to_string()),
            url: None,
            author: Some("pg".to_string()),
            num_comments: Some(3),
            points: Some(4),
        };

        let json = serde_json::to_string(&hit).unwrap();
        assert!(json.contains("objectID"));

        let parsed: SearchHit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.object_id, "789");
        assert_eq!(parsed.author.as_deref(), Some("pg"));
    }
}
