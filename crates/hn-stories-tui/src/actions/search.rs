//! Search form actions
//!
//! Actions for the search input field and the term history.

/// Actions for the search form
#[derive(Debug, Clone)]
pub enum SearchAction {
    /// Seed input and history from the persisted session term
    /// (dispatched once during bootstrap)
    Restore { term: String },
    /// Type a character into the search input
    Input(char),
    /// Delete the character before the cursor
    Backspace,
    /// Clear the whole input line
    ClearLine,
    /// Submit the current input as the active search term
    Submit,
    /// Re-run a previously searched term
    Recall(String),
}
