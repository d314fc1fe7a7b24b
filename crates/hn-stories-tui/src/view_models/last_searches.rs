//! View model for the recent-searches row

use crate::domain_models::SearchHistory;

/// View model for the row of recallable searches
#[derive(Debug, Clone)]
pub struct LastSearchesViewModel {
    pub entries: Vec<LastSearchEntryViewModel>,
}

/// One recallable search term with its hotkey
#[derive(Debug, Clone)]
pub struct LastSearchEntryViewModel {
    /// Hotkey label, e.g. "M-1"
    pub hotkey: String,
    pub term: String,
}

impl LastSearchesViewModel {
    /// Build recall entries from the history, most-recent-first
    pub fn from_history(history: &SearchHistory) -> Self {
        let entries = history
            .recent()
            .iter()
            .enumerate()
            .map(|(index, term)| LastSearchEntryViewModel {
                hotkey: format!("M-{}", index + 1),
                term: term.clone(),
            })
            .collect();

        Self { entries }
    }
}
