//! Search Reducer
//!
//! Handles the search input buffer and the term history transitions.

use crate::actions::{Action, SearchAction};
use crate::domain_models::SearchHistory;
use crate::state::SearchState;

/// Reduce search form state based on actions
pub fn reduce_search(mut state: SearchState, action: &Action) -> SearchState {
    let Action::Search(search_action) = action else {
        return state;
    };

    match search_action {
        SearchAction::Restore { term } => {
            state.input = term.clone();
            state.history = SearchHistory::new(term.clone());
        }

        SearchAction::Input(c) => {
            state.input.push(*c);
        }

        SearchAction::Backspace => {
            state.input.pop();
        }

        SearchAction::ClearLine => {
            state.input.clear();
        }

        SearchAction::Submit => {
            state.history = state.history.submit(&state.input);
        }

        SearchAction::Recall(term) => {
            state.history = state.history.recall(term);
            state.input = term.clone();
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restored(term: &str) -> SearchState {
        reduce_search(
            SearchState::default(),
            &Action::Search(SearchAction::Restore {
                term: term.to_string(),
            }),
        )
    }

    #[test]
    fn test_restore_seeds_input_and_history() {
        let state = restored("react");
        assert_eq!(state.input, "react");
        assert_eq!(state.history.active_term(), "react");
        assert!(state.history.recent().is_empty());
    }

    #[test]
    fn test_text_editing() {
        let mut state = restored("");

        for c in "redux".chars() {
            state = reduce_search(state, &Action::Search(SearchAction::Input(c)));
        }
        assert_eq!(state.input, "redux");

        state = reduce_search(state, &Action::Search(SearchAction::Backspace));
        assert_eq!(state.input, "redu");

        state = reduce_search(state, &Action::Search(SearchAction::ClearLine));
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_submit_adopts_input_as_active_term() {
        let mut state = restored("react");
        state = reduce_search(state, &Action::Search(SearchAction::ClearLine));
        for c in "redux".chars() {
            state = reduce_search(state, &Action::Search(SearchAction::Input(c)));
        }

        state = reduce_search(state, &Action::Search(SearchAction::Submit));

        assert_eq!(state.history.active_term(), "redux");
        assert_eq!(state.history.recent(), ["react"]);
    }

    #[test]
    fn test_recall_fills_input_and_activates_term() {
        let mut state = restored("react");
        state.input = "redux".to_string();
        state = reduce_search(state, &Action::Search(SearchAction::Submit));

        state = reduce_search(
            state,
            &Action::Search(SearchAction::Recall("react".to_string())),
        );

        assert_eq!(state.input, "react");
        assert_eq!(state.history.active_term(), "react");
        assert_eq!(state.history.recent(), ["redux"]);
    }
}
