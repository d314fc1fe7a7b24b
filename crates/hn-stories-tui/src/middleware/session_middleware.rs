//! Session Middleware
//!
//! Persists the active search term across runs.
//!
//! - Loads the session on bootstrap and dispatches the restore action that
//!   seeds the search form and triggers the initial fetch
//! - Writes the term back on every submit/recall and on quit
//! - Uses the local session file if it exists, otherwise the global one

use crate::actions::{Action, BootstrapAction, GlobalAction, SearchAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use hn_stories_config::Session;

/// Middleware for session state persistence
pub struct SessionMiddleware {
    session: Session,
    loaded: bool,
}

impl SessionMiddleware {
    pub fn new() -> Self {
        Self {
            session: Session::default(),
            loaded: false,
        }
    }

    fn save_term(&mut self, term: &str) {
        self.session.set_search_term(term);
        if let Err(e) = self.session.save() {
            log::error!("Failed to save session: {}", e);
        }
    }
}

impl Default for SessionMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for SessionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                if !self.loaded {
                    log::info!("SessionMiddleware: Loading session");
                    self.session = Session::load();
                    self.loaded = true;

                    let term = self
                        .session
                        .search_term()
                        .unwrap_or(&state.app_config.default_search_term)
                        .to_string();

                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                        format!("Restored last search {:?}", term),
                        "Session",
                    )));
                    dispatcher.dispatch(Action::Search(SearchAction::Restore { term }));
                }
                true // Pass through
            }

            // The input field becomes the active term on submit
            Action::Search(SearchAction::Submit) => {
                self.save_term(&state.search.input);
                true
            }

            Action::Search(SearchAction::Recall(term)) => {
                self.save_term(term);
                true
            }

            // Save the active term on quit
            Action::Global(GlobalAction::Quit) => {
                log::info!("SessionMiddleware: Saving session before quit");
                let term = state.search.history.active_term().to_string();
                self.save_term(&term);
                true
            }

            _ => true,
        }
    }
}
