//! Story List State

use crate::domain_models::{SortSelection, Story};

/// Fetch lifecycle state of the story data
///
/// Only the stories reducer produces new values of this type; every
/// transition is value-to-value, the previous value stays untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    /// Fetched stories in API order
    pub data: Vec<Story>,
    /// A request is in flight
    pub is_loading: bool,
    /// The last request failed
    pub is_error: bool,
}

/// Story list screen state
#[derive(Debug, Clone, Default)]
pub struct StoryListState {
    /// Fetched data plus lifecycle flags
    pub fetch: FetchState,
    /// Active sort column and direction
    pub sort: SortSelection,
    /// Cursor position within the sorted view
    pub cursor: usize,
    /// Timestamp of last successful load
    pub last_updated: Option<chrono::DateTime<chrono::Local>>,
}
