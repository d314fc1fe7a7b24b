//! Search term history
//!
//! Bounded most-recently-used tracker of prior search terms. The active
//! term is never part of the recent list; resubmitting it changes
//! nothing. Transitions are value-to-value, the previous history stays
//! valid.

/// Maximum number of remembered search terms
const MAX_RECENT: usize = 5;

/// The active search term plus up to five previously active terms,
/// most-recent-first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchHistory {
    active_term: String,
    recent: Vec<String>,
}

impl SearchHistory {
    /// Start a history with an initial active term and no recents
    pub fn new(initial_term: impl Into<String>) -> Self {
        Self {
            active_term: initial_term.into(),
            recent: Vec::new(),
        }
    }

    /// The currently active search term
    pub fn active_term(&self) -> &str {
        &self.active_term
    }

    /// Previously active terms, most-recent-first
    pub fn recent(&self) -> &[String] {
        &self.recent
    }

    /// Adopt a newly submitted term
    ///
    /// Resubmitting the active term is a no-op (the caller still refetches,
    /// but history must not grow). Otherwise the outgoing term is pushed to
    /// the front of the recent list — skipped when blank or when it already
    /// heads the list — the new term is dropped from the list so the active
    /// term never shows up as recallable, and the list is capped at five.
    #[must_use]
    pub fn submit(&self, new_term: &str) -> SearchHistory {
        if new_term == self.active_term {
            return self.clone();
        }

        let mut recent = self.recent.clone();

        let outgoing_is_blank = self.active_term.trim().is_empty();
        let outgoing_is_head = recent.first() == Some(&self.active_term);
        if !outgoing_is_blank && !outgoing_is_head {
            recent.insert(0, self.active_term.clone());
        }

        recent.retain(|term| term != new_term);
        recent.truncate(MAX_RECENT);

        SearchHistory {
            active_term: new_term.to_string(),
            recent,
        }
    }

    /// Re-activate a term picked from the recent list
    ///
    /// Selecting history is semantically a submission.
    #[must_use]
    pub fn recall(&self, chosen_term: &str) -> SearchHistory {
        self.submit(chosen_term)
    }
}
