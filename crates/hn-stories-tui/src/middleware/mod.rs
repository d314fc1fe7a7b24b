use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod search_middleware;
pub mod session_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware may perform side effects (API calls, file I/O) and dispatch
/// follow-up actions through the dispatcher; those re-enter the chain
/// from the beginning.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter the chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
