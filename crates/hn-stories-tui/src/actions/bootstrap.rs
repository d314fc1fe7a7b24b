//! Bootstrap/initialization actions

/// Actions driving the startup sequence
#[derive(Debug, Clone)]
pub enum BootstrapAction {
    /// Kick off startup: restore the persisted session and run the
    /// initial search
    Start,
}
