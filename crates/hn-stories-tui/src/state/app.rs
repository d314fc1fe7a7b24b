//! Application State

use super::{SearchState, StatusBarState, StoryListState};
use crate::theme::Theme;
use hn_stories_config::AppConfig;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub search: SearchState,
    pub story_list: StoryListState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    /// Application configuration
    pub app_config: AppConfig,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            running: true,
            search: SearchState::default(),
            story_list: StoryListState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            app_config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
