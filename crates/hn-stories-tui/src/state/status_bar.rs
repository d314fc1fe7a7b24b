//! Status Bar State

/// Kind of a status message, drives its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Running,
    Success,
    Error,
}

/// One status bar message
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
    /// Short label of the operation that produced the message
    pub source: String,
}

/// Status bar state - the most recent message wins
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    pub current: Option<StatusMessage>,
}
