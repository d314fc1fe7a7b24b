//! Actions module
//!
//! All actions in the application use a tagged action architecture: the
//! root `Action` enum is tagged by domain, and each domain carries its own
//! closed enum. Closed enums give exhaustiveness checking everywhere an
//! action is matched, so an unhandled action kind is a compile error
//! rather than a silently ignored runtime case.

pub mod bootstrap;
pub mod global;
pub mod search;
pub mod status_bar;
pub mod stories;
pub mod story_list;

pub use bootstrap::BootstrapAction;
pub use global::GlobalAction;
pub use search::SearchAction;
pub use status_bar::StatusBarAction;
pub use stories::StoriesAction;
pub use story_list::StoryListAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions (quit, raw key input)
    Global(GlobalAction),
    /// Startup sequence actions
    Bootstrap(BootstrapAction),
    /// Search input and term history actions
    Search(SearchAction),
    /// Fetch lifecycle and removal actions for the story data
    Stories(StoriesAction),
    /// Cursor, sorting, and list-level request actions
    StoryList(StoryListAction),
    /// Status bar feedback actions
    StatusBar(StatusBarAction),
}
