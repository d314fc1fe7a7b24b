//! KeyboardMiddleware - translates key events into actions
//!
//! The search input is always focused, so the translation is layered:
//!
//! ## Layer 1: Priority keys
//! Ctrl+C and Esc always quit, regardless of anything else.
//!
//! ## Layer 2: Modifier bindings
//! Ctrl and Alt combinations drive sorting, refresh, removal, and history
//! recall, leaving plain characters free for the input field.
//!
//! ## Layer 3: Text input
//! Remaining plain keys edit the search input; Enter submits it; arrows
//! move the list cursor.

use crate::actions::{Action, GlobalAction, SearchAction, StoryListAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::SortKey;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Middleware translating raw key presses into domain actions
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        // Layer 1: priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }
        if key.code == KeyCode::Esc {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        // Layer 2: modifier bindings
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char(c) = key.code {
                let action = match c {
                    'r' => Some(Action::StoryList(StoryListAction::Refresh)),
                    'u' => Some(Action::Search(SearchAction::ClearLine)),
                    't' => Some(Action::StoryList(StoryListAction::SelectSort(
                        SortKey::Title,
                    ))),
                    'a' => Some(Action::StoryList(StoryListAction::SelectSort(
                        SortKey::Author,
                    ))),
                    'o' => Some(Action::StoryList(StoryListAction::SelectSort(
                        SortKey::Comments,
                    ))),
                    'p' => Some(Action::StoryList(StoryListAction::SelectSort(
                        SortKey::Points,
                    ))),
                    'n' => Some(Action::StoryList(StoryListAction::SelectSort(
                        SortKey::None,
                    ))),
                    _ => None,
                };

                if let Some(action) = action {
                    log::debug!("Key Ctrl+{} -> {:?}", c, action);
                    dispatcher.dispatch(action);
                }
                return;
            }
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c) = key.code {
                if let Some(slot) = c.to_digit(10) {
                    self.recall_slot(slot as usize, state, dispatcher);
                }
                return;
            }
        }

        // Layer 3: text input and list navigation
        match key.code {
            KeyCode::Char(c) => {
                dispatcher.dispatch(Action::Search(SearchAction::Input(c)));
            }
            KeyCode::Backspace => {
                dispatcher.dispatch(Action::Search(SearchAction::Backspace));
            }
            KeyCode::Enter => {
                dispatcher.dispatch(Action::Search(SearchAction::Submit));
            }
            KeyCode::Down => {
                dispatcher.dispatch(Action::StoryList(StoryListAction::NavigateNext));
            }
            KeyCode::Up => {
                dispatcher.dispatch(Action::StoryList(StoryListAction::NavigatePrevious));
            }
            KeyCode::Home => {
                dispatcher.dispatch(Action::StoryList(StoryListAction::NavigateToTop));
            }
            KeyCode::End => {
                dispatcher.dispatch(Action::StoryList(StoryListAction::NavigateToBottom));
            }
            KeyCode::Delete => {
                dispatcher.dispatch(Action::StoryList(StoryListAction::RemoveSelected));
            }
            _ => {
                log::debug!("Unbound key: {:?}", key);
            }
        }
    }

    /// Recall the nth recent search (1-based, Alt+1 .. Alt+5)
    fn recall_slot(&self, slot: usize, state: &AppState, dispatcher: &Dispatcher) {
        if slot == 0 {
            return;
        }

        match state.search.history.recent().get(slot - 1) {
            Some(term) => {
                log::debug!("Recalling search slot {}: {:?}", slot, term);
                dispatcher.dispatch(Action::Search(SearchAction::Recall(term.clone())));
            }
            None => {
                log::debug!("No recent search in slot {}", slot);
            }
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept raw key presses
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            return false; // Consumed - translated actions re-enter the chain
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use std::sync::mpsc::channel;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, modifiers)))
    }

    fn translate(state: &AppState, action: Action) -> Vec<Action> {
        let (tx, rx) = channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();

        let passed = middleware.handle(&action, state, &dispatcher);
        assert!(!passed, "key presses must be consumed");

        rx.try_iter().collect()
    }

    #[test]
    fn test_ctrl_c_quits() {
        let out = translate(
            &AppState::default(),
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(matches!(out[..], [Action::Global(GlobalAction::Quit)]));
    }

    #[test]
    fn test_plain_chars_edit_the_input() {
        let out = translate(
            &AppState::default(),
            press(KeyCode::Char('r'), KeyModifiers::NONE),
        );
        assert!(matches!(
            out[..],
            [Action::Search(SearchAction::Input('r'))]
        ));
    }

    #[test]
    fn test_enter_submits() {
        let out = translate(
            &AppState::default(),
            press(KeyCode::Enter, KeyModifiers::NONE),
        );
        assert!(matches!(out[..], [Action::Search(SearchAction::Submit)]));
    }

    #[test]
    fn test_ctrl_p_selects_points_sort() {
        let out = translate(
            &AppState::default(),
            press(KeyCode::Char('p'), KeyModifiers::CONTROL),
        );
        assert!(matches!(
            out[..],
            [Action::StoryList(StoryListAction::SelectSort(
                SortKey::Points
            ))]
        ));
    }

    #[test]
    fn test_alt_digit_recalls_history_slot() {
        let mut state = AppState::default();
        state.search.history = crate::domain_models::SearchHistory::new("react")
            .submit("redux")
            .submit("vue");
        // recent is now ["redux", "react"]

        let out = translate(&state, press(KeyCode::Char('2'), KeyModifiers::ALT));
        match &out[..] {
            [Action::Search(SearchAction::Recall(term))] => assert_eq!(term, "react"),
            other => panic!("unexpected translation: {:?}", other),
        }
    }

    #[test]
    fn test_alt_digit_without_history_is_silent() {
        let out = translate(
            &AppState::default(),
            press(KeyCode::Char('1'), KeyModifiers::ALT),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_delete_requests_removal() {
        let out = translate(
            &AppState::default(),
            press(KeyCode::Delete, KeyModifiers::NONE),
        );
        assert!(matches!(
            out[..],
            [Action::StoryList(StoryListAction::RemoveSelected)]
        ));
    }
}
