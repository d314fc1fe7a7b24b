//! Search Form State

use crate::domain_models::SearchHistory;

/// Search form state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Text currently in the search input field
    pub input: String,
    /// Active term plus recallable previous terms
    pub history: SearchHistory,
}
