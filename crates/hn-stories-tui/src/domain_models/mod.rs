//! Domain models
//!
//! Application-side models, independent of the wire types the search
//! client returns.

mod search_history;
mod story;
mod story_sort;

pub use search_history::SearchHistory;
pub use story::{Story, StoryId};
pub use story_sort::{sort_stories, SortKey, SortSelection};
