//! Status Bar Reducer

use crate::actions::{Action, StatusBarAction};
use crate::state::{StatusBarState, StatusMessage};

/// Reduce status bar state based on actions
pub fn reduce_status_bar(mut state: StatusBarState, action: &Action) -> StatusBarState {
    let Action::StatusBar(status_action) = action else {
        return state;
    };

    match status_action {
        StatusBarAction::Push {
            kind,
            message,
            source,
        } => {
            state.current = Some(StatusMessage {
                kind: *kind,
                message: message.clone(),
                source: source.clone(),
            });
        }

        StatusBarAction::Clear => {
            state.current = None;
        }
    }

    state
}
