//! Stories Reducer
//!
//! State machine for the story fetch lifecycle. Pure: takes the current
//! fetch state and an action, returns the next fetch state. No I/O, no
//! shared mutation; equal inputs always produce equal outputs.

use crate::actions::StoriesAction;
use crate::state::FetchState;

/// Reduce the fetch state based on a stories action
///
/// The match is exhaustive over the closed [`StoriesAction`] enum, so an
/// unhandled action kind cannot slip through at runtime. Removing a story
/// whose id is not present is a no-op.
pub fn reduce_stories(state: FetchState, action: &StoriesAction) -> FetchState {
    match action {
        StoriesAction::FetchInit => FetchState {
            is_loading: true,
            is_error: false,
            ..state
        },

        StoriesAction::FetchSuccess(stories) => FetchState {
            data: stories.clone(),
            is_loading: false,
            is_error: false,
        },

        StoriesAction::FetchFailure => FetchState {
            is_loading: false,
            is_error: true,
            ..state
        },

        StoriesAction::Remove(story) => FetchState {
            data: state
                .data
                .into_iter()
                .filter(|s| s.id != story.id)
                .collect(),
            is_loading: state.is_loading,
            is_error: state.is_error,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Story;

    fn story_one() -> Story {
        Story::new("0", "React", "Jordan Walke")
            .with_url("https://reactjs.org/")
            .with_stats(3, 4)
    }

    fn story_two() -> Story {
        Story::new("1", "Redux", "Dan Abramov, Andrew Clark")
            .with_url("https://redux.js.org/")
            .with_stats(2, 5)
    }

    fn stories() -> Vec<Story> {
        vec![story_one(), story_two()]
    }

    #[test]
    fn test_initializes_stories_fetching() {
        let state = FetchState::default();

        let new_state = reduce_stories(state, &StoriesAction::FetchInit);

        assert_eq!(
            new_state,
            FetchState {
                data: vec![],
                is_loading: true,
                is_error: false,
            }
        );
    }

    #[test]
    fn test_fetch_init_keeps_existing_data() {
        let state = FetchState {
            data: stories(),
            is_loading: false,
            is_error: false,
        };

        let new_state = reduce_stories(state, &StoriesAction::FetchInit);

        assert!(new_state.is_loading);
        assert_eq!(new_state.data, stories());
    }

    #[test]
    fn test_fetch_init_clears_previous_error() {
        let state = FetchState {
            data: vec![],
            is_loading: false,
            is_error: true,
        };

        let new_state = reduce_stories(state, &StoriesAction::FetchInit);

        assert!(new_state.is_loading);
        assert!(!new_state.is_error);
    }

    #[test]
    fn test_successfully_fetches_stories() {
        let state = FetchState {
            data: vec![],
            is_loading: true,
            is_error: false,
        };

        let new_state = reduce_stories(state, &StoriesAction::FetchSuccess(stories()));

        assert_eq!(
            new_state,
            FetchState {
                data: stories(),
                is_loading: false,
                is_error: false,
            }
        );
    }

    #[test]
    fn test_success_replaces_data_unconditionally() {
        // Whatever the previous state, success yields exactly the payload
        let state = FetchState {
            data: vec![story_one()],
            is_loading: false,
            is_error: true,
        };

        let payload = vec![story_two()];
        let new_state = reduce_stories(state, &StoriesAction::FetchSuccess(payload.clone()));

        assert_eq!(new_state.data, payload);
        assert!(!new_state.is_loading);
        assert!(!new_state.is_error);
    }

    #[test]
    fn test_fails_to_fetch_stories() {
        let state = FetchState {
            data: vec![],
            is_loading: true,
            is_error: false,
        };

        let new_state = reduce_stories(state, &StoriesAction::FetchFailure);

        assert_eq!(
            new_state,
            FetchState {
                data: vec![],
                is_loading: false,
                is_error: true,
            }
        );
    }

    #[test]
    fn test_failure_keeps_existing_data() {
        let state = FetchState {
            data: stories(),
            is_loading: true,
            is_error: false,
        };

        let new_state = reduce_stories(state, &StoriesAction::FetchFailure);

        assert!(new_state.is_error);
        assert_eq!(new_state.data, stories());
    }

    #[test]
    fn test_removes_a_story_from_all_stories() {
        let state = FetchState {
            data: stories(),
            is_loading: false,
            is_error: false,
        };

        let new_state = reduce_stories(state, &StoriesAction::Remove(story_one()));

        assert_eq!(
            new_state,
            FetchState {
                data: vec![story_two()],
                is_loading: false,
                is_error: false,
            }
        );
    }

    #[test]
    fn test_repeated_removal_is_noop() {
        let state = FetchState {
            data: stories(),
            is_loading: false,
            is_error: false,
        };

        let once = reduce_stories(state, &StoriesAction::Remove(story_one()));
        let twice = reduce_stories(once.clone(), &StoriesAction::Remove(story_one()));

        assert_eq!(twice, once);
    }

    #[test]
    fn test_removing_unknown_story_is_noop() {
        let state = FetchState {
            data: stories(),
            is_loading: false,
            is_error: false,
        };

        let ghost = Story::new("999", "Ghost", "nobody");
        let new_state = reduce_stories(state.clone(), &StoriesAction::Remove(ghost));

        assert_eq!(new_state, state);
    }

    #[test]
    fn test_reducer_is_deterministic() {
        let action = StoriesAction::Remove(story_one());
        let state = FetchState {
            data: stories(),
            is_loading: false,
            is_error: false,
        };

        let first = reduce_stories(state.clone(), &action);
        let second = reduce_stories(state, &action);

        assert_eq!(first, second);
    }

    #[test]
    fn test_transition_leaves_input_value_usable() {
        let state = FetchState {
            data: stories(),
            is_loading: false,
            is_error: false,
        };

        // Transitions are value-to-value: a clone handed to the reducer
        // never affects the original
        let before = state.clone();
        let _ = reduce_stories(state.clone(), &StoriesAction::FetchInit);
        let _ = reduce_stories(state.clone(), &StoriesAction::Remove(story_two()));

        assert_eq!(state, before);
    }
}
