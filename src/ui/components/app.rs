use crate::ui::search_context::SearchContextProvider;
use crate::ui::MAIN_CSS;
use dioxus::prelude::*;
use tracing::debug;

use super::github_search::GitHubSearch;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SearchContextProvider {
            GitHubSearch {}
        }
    }
}
