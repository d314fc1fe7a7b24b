//! View models
//!
//! Pre-compute display text, colors, and styles from state so views only
//! lay widgets out. Everything here is derived: the active sort column,
//! for instance, is read from the sort selection, never from rendered
//! output.

mod last_searches;
mod story_table;

pub use last_searches::{LastSearchEntryViewModel, LastSearchesViewModel};
pub use story_table::{ColumnHeaderViewModel, StoryRowViewModel, StoryTableViewModel};
