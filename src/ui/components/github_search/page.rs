use dioxus::prelude::*;

use super::{
    pagination::SearchPagination, search_input::SearchInput, status::SearchStatus,
    user_table::UserTable,
};
use crate::ui::search_context::use_search;

/// GitHub users page: search box, status, results table and page buttons
#[component]
pub fn GitHubSearch() -> Element {
    let search_ctx = use_search();

    // Load the default listing on component mount
    use_effect(move || search_ctx.load_initial());

    rsx! {
        div {
            class: "container",
            h1 {
                class: "title",
                "GitHub Users - Sorted by Followers"
            }

            SearchInput {}
            SearchStatus {}
            UserTable {}
            SearchPagination {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::github::Endpoint;
    use crate::test_support::MockUserSource;
    use crate::ui::search_context::{SearchContextProvider, SharedUserSource};
    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use std::sync::Arc;
    use std::time::Duration;

    #[component]
    fn Harness() -> Element {
        rsx! {
            SearchContextProvider {
                GitHubSearch {}
            }
        }
    }

    #[tokio::test]
    async fn mount_loads_the_listing_once() {
        let mock = Arc::new(MockUserSource::new().with_users(&Endpoint::Listing, 45));
        let source: SharedUserSource = mock.clone();

        let mut dom = VirtualDom::new(Harness)
            .with_root_context(Config::default())
            .with_root_context(source);
        dom.rebuild_in_place();

        let loaded = tokio::time::timeout(Duration::from_secs(5), async {
            while mock.requests().is_empty() {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;
        assert!(loaded.is_ok(), "listing was never requested");

        // Let the completed fetch re-render the page
        let _ = tokio::time::timeout(Duration::from_millis(200), async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;

        assert_eq!(mock.requests(), vec![Endpoint::Listing]);
    }
}
