//! Story data actions
//!
//! The fetch lifecycle and removal actions consumed by the stories
//! reducer. This enum is closed: the reducer matches it exhaustively, so
//! an action kind outside this set cannot exist at runtime.

use crate::domain_models::Story;

/// Actions on the fetched story data
#[derive(Debug, Clone)]
pub enum StoriesAction {
    /// A search request went out
    FetchInit,
    /// A search request came back with stories
    FetchSuccess(Vec<Story>),
    /// A search request failed
    FetchFailure,
    /// Dismiss one story from the list
    Remove(Story),
}
