//! Story List Reducer
//!
//! Handles cursor movement and sort selection, and routes story data
//! actions through the stories reducer while keeping the cursor inside
//! the list.

use crate::actions::{Action, StoriesAction, StoryListAction};
use crate::reducers::stories_reducer;
use crate::state::StoryListState;

/// Reduce story-list state based on actions
pub fn reduce_story_list(mut state: StoryListState, action: &Action) -> StoryListState {
    match action {
        Action::Stories(stories_action) => {
            state.fetch = stories_reducer::reduce_stories(state.fetch, stories_action);

            if let StoriesAction::FetchSuccess(_) = stories_action {
                state.last_updated = Some(chrono::Local::now());
                state.cursor = 0;
            }

            // Removal may shrink the list out from under the cursor
            state.cursor = state.cursor.min(state.fetch.data.len().saturating_sub(1));
        }

        Action::StoryList(list_action) => match list_action {
            StoryListAction::NavigateNext => {
                let len = state.fetch.data.len();
                if len > 0 {
                    state.cursor = (state.cursor + 1) % len;
                }
            }

            StoryListAction::NavigatePrevious => {
                let len = state.fetch.data.len();
                if len > 0 {
                    state.cursor = if state.cursor == 0 {
                        len - 1
                    } else {
                        state.cursor - 1
                    };
                }
            }

            StoryListAction::NavigateToTop => {
                state.cursor = 0;
            }

            StoryListAction::NavigateToBottom => {
                state.cursor = state.fetch.data.len().saturating_sub(1);
            }

            StoryListAction::SelectSort(key) => {
                state.sort = state.sort.select(*key);
                log::debug!(
                    "Sort selection: {:?} reverse={}",
                    state.sort.key,
                    state.sort.reverse
                );
            }

            // Request actions - resolved by the search middleware
            StoryListAction::RemoveSelected | StoryListAction::Refresh => {}
        },

        _ => {}
    }

    state
}
