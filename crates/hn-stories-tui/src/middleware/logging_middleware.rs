//! Logging Middleware
//!
//! Traces the action stream at debug level. Key events and fetch payloads
//! are summarized instead of dumped.

use crate::actions::{Action, GlobalAction, StoriesAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that logs every dispatched action
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Too noisy to log raw; the keyboard middleware logs what it
            // translates them into
            Action::Global(GlobalAction::KeyPressed(_)) => {}
            Action::Stories(StoriesAction::FetchSuccess(stories)) => {
                log::debug!("Action: Stories(FetchSuccess({} stories))", stories.len());
            }
            other => {
                log::debug!("Action: {:?}", other);
            }
        }

        true // Always pass through
    }
}
