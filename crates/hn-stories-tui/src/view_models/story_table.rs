//! View model for the story table
//!
//! Separates presentation logic from domain models and view rendering.

use crate::domain_models::{sort_stories, SortKey, Story};
use crate::state::StoryListState;
use crate::theme::Theme;
use ratatui::style::Color;
use strum::IntoEnumIterator;

/// View model for the entire story table
#[derive(Debug, Clone)]
pub struct StoryTableViewModel {
    /// Table title: the active search term
    pub title: String,
    /// Status text: "Searching...", "Updated 12:34:56", etc.
    pub status_text: String,
    /// Status color (from theme)
    pub status_color: Color,
    /// Sortable column headers with the active one marked
    pub columns: Vec<ColumnHeaderViewModel>,
    /// Pre-computed rows in display order
    pub rows: Vec<StoryRowViewModel>,
    /// Current cursor position (for keyboard navigation)
    pub selected_index: usize,
}

/// One sortable column header
#[derive(Debug, Clone)]
pub struct ColumnHeaderViewModel {
    /// Label including the direction arrow when active
    pub label: String,
    /// Whether this column drives the current ordering
    pub is_active: bool,
}

/// View model for a single story row
#[derive(Debug, Clone)]
pub struct StoryRowViewModel {
    pub title: String,
    pub url: String,
    pub author: String,
    pub comments: String,
    pub points: String,

    /// Pre-computed row colors (alternating backgrounds)
    pub fg_color: Color,
    pub bg_color: Color,
}

impl StoryTableViewModel {
    /// Transform state into a display-ready view model
    pub fn from_state(list: &StoryListState, active_term: &str, theme: &Theme) -> Self {
        let sorted = sort_stories(&list.fetch.data, list.sort);

        let (status_text, status_color) = Self::format_status(list, theme);

        let rows = sorted
            .iter()
            .enumerate()
            .map(|(index, story)| Self::build_row(story, index, theme))
            .collect();

        Self {
            title: format!(" Hacker Stories: {:?} ", active_term),
            status_text,
            status_color,
            columns: Self::build_columns(list),
            rows,
            selected_index: list.cursor,
        }
    }

    /// One header per sortable column, active one marked with a direction
    /// arrow derived from the sort selection
    fn build_columns(list: &StoryListState) -> Vec<ColumnHeaderViewModel> {
        SortKey::iter()
            .filter(|key| *key != SortKey::None)
            .map(|key| {
                let is_active = list.sort.key == key;
                let label = if is_active {
                    let ascending = match key {
                        SortKey::Title | SortKey::Author => !list.sort.reverse,
                        SortKey::Comments | SortKey::Points => list.sort.reverse,
                        SortKey::None => unreachable!("filtered above"),
                    };
                    let arrow = if ascending { "▲" } else { "▼" };
                    format!("{} {}", key, arrow)
                } else {
                    key.to_string()
                };

                ColumnHeaderViewModel { label, is_active }
            })
            .collect()
    }

    fn build_row(story: &Story, index: usize, theme: &Theme) -> StoryRowViewModel {
        let bg_color = if index % 2 == 0 {
            Color::Reset
        } else {
            theme.table_row_bg_alt
        };

        StoryRowViewModel {
            title: story.title.clone(),
            url: story.url.clone(),
            author: story.author.clone(),
            comments: story.num_comments.to_string(),
            points: story.points.to_string(),
            fg_color: theme.text_primary,
            bg_color,
        }
    }

    /// Format the fetch lifecycle for the table header
    fn format_status(list: &StoryListState, theme: &Theme) -> (String, Color) {
        if list.fetch.is_loading {
            return ("Searching...".to_string(), theme.status_warning);
        }

        if list.fetch.is_error {
            return (
                "Search failed [Ctrl+r to retry]".to_string(),
                theme.status_error,
            );
        }

        let status_text = match &list.last_updated {
            Some(timestamp) => format!(
                "Updated {} [Ctrl+r to refresh]",
                timestamp.format("%H:%M:%S")
            ),
            None => "Idle".to_string(),
        };
        (status_text, theme.status_success)
    }
}
