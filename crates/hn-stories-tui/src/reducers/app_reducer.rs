//! Root Reducer
//!
//! Composes the feature reducers into one pure state transition.

use crate::actions::{Action, GlobalAction};
use crate::reducers::{search_reducer, status_bar_reducer, story_list_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    // Handle global actions first
    if let Action::Global(global_action) = action {
        match global_action {
            GlobalAction::Quit => {
                state.running = false;
                return state;
            }
            // Raw keys are translated by the keyboard middleware and
            // never reach the reducer
            GlobalAction::KeyPressed(_) => {}
        }
    }

    // Run sub-reducers for feature-specific actions
    state.search = search_reducer::reduce_search(state.search, action);
    state.story_list = story_list_reducer::reduce_story_list(state.story_list, action);
    state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, action);

    state
}
