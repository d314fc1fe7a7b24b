//! Story model
//!
//! Domain model for one Hacker News story.

use hn_search_client::SearchHit;
use serde::{Deserialize, Serialize};

/// Unique story identifier
///
/// Wraps the API's `objectID`. List removal and row identity rely on this
/// being unique within any fetched list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(pub String);

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for StoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A Hacker News story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Unique identifier
    pub id: StoryId,
    /// Story title
    pub title: String,
    /// Link the story points at (empty for Ask HN posts)
    pub url: String,
    /// Submitter's username
    pub author: String,
    /// Number of comments
    pub num_comments: u64,
    /// Upvote score
    pub points: u64,
}

impl Story {
    /// Create a new story with the given data
    pub fn new(
        id: impl Into<StoryId>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: String::new(),
            author: author.into(),
            num_comments: 0,
            points: 0,
        }
    }

    /// Set the URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set comment count and points
    pub fn with_stats(mut self, num_comments: u64, points: u64) -> Self {
        self.num_comments = num_comments;
        self.points = points;
        self
    }
}

impl From<SearchHit> for Story {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: StoryId(hit.object_id),
            title: hit.title.unwrap_or_default(),
            url: hit.url.unwrap_or_default(),
            author: hit.author.unwrap_or_default(),
            num_comments: hit.num_comments.unwrap_or_default(),
            points: hit.points.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_builder() {
        let story = Story::new("0", "React", "Jordan Walke")
            .with_url("https://reactjs.org/")
            .with_stats(3, 4);

        assert_eq!(story.id, StoryId("0".to_string()));
        assert_eq!(story.title, "React");
        assert_eq!(story.url, "https://reactjs.org/");
        assert_eq!(story.num_comments, 3);
        assert_eq!(story.points, 4);
    }

    #[test]
    fn test_from_search_hit_substitutes_defaults() {
        let hit = SearchHit {
            object_id: "42".to_string(),
            title: None,
            url: None,
            author: Some("dang".to_string()),
            num_comments: None,
            points: Some(7),
        };

        let story = Story::from(hit);
        assert_eq!(story.id, StoryId::from("42"));
        assert!(story.title.is_empty());
        assert!(story.url.is_empty());
        assert_eq!(story.author, "dang");
        assert_eq!(story.num_comments, 0);
        assert_eq!(story.points, 7);
    }
}
