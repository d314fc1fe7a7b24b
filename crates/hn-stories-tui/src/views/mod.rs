//! Views
//!
//! Rendering only: views consume view models and lay widgets out. All
//! display decisions (ordering, active column, status text) are made in
//! the view models.

pub mod main_view;

use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    main_view::render(state, area, f);
}
