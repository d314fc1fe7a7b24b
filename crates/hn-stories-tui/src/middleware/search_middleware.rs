//! Search Middleware
//!
//! Owns all interaction with the story search API:
//! - Runs the search for submit/recall/refresh and the restored session term
//! - Dispatches the fetch lifecycle actions around each request
//! - Supersedes stale requests: every search bumps a generation counter,
//!   and a response whose generation is no longer current is dropped so an
//!   out-of-order reply can never overwrite a newer list
//! - Resolves removal requests against the sorted view the user sees

use crate::actions::{Action, SearchAction, StatusBarAction, StoriesAction, StoryListAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{sort_stories, Story};
use crate::middleware::Middleware;
use crate::state::AppState;
use anyhow::Context;
use hn_search_client::{HttpSearchClient, SearchClient};
use hn_stories_config::AppConfig;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for story search API operations
pub struct SearchMiddleware {
    /// Tokio runtime for async requests
    runtime: Runtime,
    client: Arc<dyn SearchClient>,
    /// Generation of the newest search; older in-flight results are stale
    generation: Arc<AtomicU64>,
}

impl SearchMiddleware {
    /// Create the middleware with a client for the configured API
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let client =
            HttpSearchClient::new(&config.api_base_url).context("Failed to create search client")?;

        Ok(Self {
            runtime,
            client: Arc::new(client),
            generation: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Kick off a search for a term
    ///
    /// Dispatches `FetchInit` immediately; the spawned task dispatches
    /// `FetchSuccess`/`FetchFailure` unless a newer search superseded it.
    fn spawn_search(&self, term: &str, dispatcher: &Dispatcher) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!("Searching for {:?} (generation {})", term, generation);

        dispatcher.dispatch(Action::Stories(StoriesAction::FetchInit));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Searching for {:?}...", term),
            "Search",
        )));

        let client = Arc::clone(&self.client);
        let current = Arc::clone(&self.generation);
        let dispatcher = dispatcher.clone();
        let term = term.to_string();

        self.runtime.spawn(async move {
            let result = client.search_stories(&term).await;

            if current.load(Ordering::SeqCst) != generation {
                log::debug!(
                    "Dropping stale result for {:?} (generation {})",
                    term,
                    generation
                );
                return;
            }

            match result {
                Ok(page) => {
                    let stories: Vec<Story> = page.hits.into_iter().map(Story::from).collect();
                    log::info!("Search for {:?} returned {} stories", term, stories.len());
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        format!("Loaded {} of {} stories", stories.len(), page.nb_hits),
                        "Search",
                    )));
                    dispatcher.dispatch(Action::Stories(StoriesAction::FetchSuccess(stories)));
                }
                Err(e) => {
                    log::error!("Search for {:?} failed: {}", term, e);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        format!("Search failed: {}", e),
                        "Search",
                    )));
                    dispatcher.dispatch(Action::Stories(StoriesAction::FetchFailure));
                }
            }
        });
    }

    /// The story under the cursor, in the order the user currently sees
    fn selected_story(&self, state: &AppState) -> Option<Story> {
        let list = &state.story_list;
        let sorted = sort_stories(&list.fetch.data, list.sort);
        sorted.get(list.cursor).cloned()
    }
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            // Session restored - run the initial search
            Action::Search(SearchAction::Restore { term }) => {
                self.spawn_search(term, dispatcher);
                true // Let the reducer seed input and history
            }

            // The input field is the submitted term; history catches up in
            // the reducer
            Action::Search(SearchAction::Submit) => {
                self.spawn_search(&state.search.input, dispatcher);
                true
            }

            Action::Search(SearchAction::Recall(term)) => {
                self.spawn_search(term, dispatcher);
                true
            }

            Action::StoryList(StoryListAction::Refresh) => {
                self.spawn_search(state.search.history.active_term(), dispatcher);
                true
            }

            // Resolve the cursor against the sorted view, then dispatch
            // the actual removal
            Action::StoryList(StoryListAction::RemoveSelected) => {
                match self.selected_story(state) {
                    Some(story) => {
                        log::debug!("Dismissing story {} ({:?})", story.id, story.title);
                        dispatcher.dispatch(Action::Stories(StoriesAction::Remove(story)));
                    }
                    None => {
                        log::debug!("RemoveSelected with no story under cursor");
                    }
                }
                false // Consume - the Remove action carries the payload
            }

            _ => true,
        }
    }
}
