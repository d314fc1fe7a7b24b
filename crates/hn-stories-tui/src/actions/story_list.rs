//! Story list screen actions
//!
//! Navigation, sorting, and list-level requests. Requests
//! (`RemoveSelected`, `Refresh`) are resolved by the search middleware;
//! the rest reduce directly into list state.

use crate::domain_models::SortKey;

/// Actions for the story list screen
#[derive(Debug, Clone)]
pub enum StoryListAction {
    /// Move the cursor to the next story
    NavigateNext,
    /// Move the cursor to the previous story
    NavigatePrevious,
    /// Move the cursor to the first story
    NavigateToTop,
    /// Move the cursor to the last story
    NavigateToBottom,
    /// Select a sort column (re-selecting the active one flips direction)
    SelectSort(SortKey),
    /// Dismiss the story under the cursor
    RemoveSelected,
    /// Re-run the active search
    Refresh,
}
