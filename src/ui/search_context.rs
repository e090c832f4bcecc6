use crate::config::use_config;
use crate::github::UserSource;
use crate::search::{run_fetch, FetchOutcome, FetchTicket, SearchState};
use dioxus::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// User source shared through the component tree
pub type SharedUserSource = Arc<dyn UserSource>;

/// Search state plus the handle needed to refresh it
#[derive(Clone)]
pub struct SearchContext {
    pub state: Signal<SearchState>,
    source: SharedUserSource,
    debounce: Duration,
}

impl SearchContext {
    /// Load the default listing (no debounce)
    pub fn load_initial(&self) {
        let mut state = self.state;
        let ticket = state.write().begin_initial_fetch();
        self.drive(ticket);
    }

    /// Record the text of the search box and fetch for it if it changed
    pub fn set_query(&self, query: String) {
        let mut state = self.state;
        // Writing marks every subscriber dirty, so check before taking the write
        if state.peek().query() == query {
            return;
        }

        if let Some(ticket) = state.write().update_query(query) {
            self.drive(ticket);
        };
    }

    pub fn paginate(&self, page: usize) {
        let mut state = self.state;
        if !state.write().paginate(page) {
            debug!("Ignoring navigation to page {}", page);
        }
    }

    fn drive(&self, ticket: FetchTicket) {
        let mut state = self.state;
        let source = self.source.clone();
        let debounce = self.debounce;

        spawn(async move {
            let outcome = run_fetch(source.as_ref(), &ticket, debounce, |t| {
                state.peek().is_current(t)
            })
            .await;

            if let FetchOutcome::Finished(result) = outcome {
                state.write().complete(&ticket, result);
            }
        });
    }
}

/// Provider component to make search context available throughout the app
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let config = use_config();
    let source = use_context::<SharedUserSource>();
    let state = use_signal(|| SearchState::new(config.page_size));

    let search_ctx = SearchContext {
        state,
        source,
        debounce: config.debounce,
    };

    use_context_provider(move || search_ctx);

    rsx! {
        {children}
    }
}

/// Hook to access the search context
pub fn use_search() -> SearchContext {
    use_context::<SearchContext>()
}
