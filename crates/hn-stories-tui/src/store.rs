//! Redux-style store
//!
//! The Store holds the application state and manages the dispatch loop:
//! - Actions flow through the middleware chain (side effects live there)
//! - Unconsumed actions reach the pure root reducer
//! - State is replaced on each action, never mutated in place
//! - Actions queued by middleware are drained afterwards, in order

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{channel, Receiver};

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware runs in the order it was added. Add middleware before
    /// starting the event loop.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }

        // Process any actions dispatched by middleware or async tasks
        self.drain_pending();
    }

    /// Apply actions queued by async tasks since the last dispatch
    ///
    /// The event loop calls this every tick so fetch results land even
    /// while no keys are pressed.
    pub fn drain_pending(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
        }
    }
}
