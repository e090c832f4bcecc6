use crate::ui::search_context::use_search;
use dioxus::prelude::*;

/// Displays loading and error states for the users fetch
#[component]
pub fn SearchStatus() -> Element {
    let search_ctx = use_search();
    let state = search_ctx.state.read();

    rsx! {
        if state.is_loading() {
            div {
                class: "loader",
                div { class: "spinner" }
                p { "Loading..." }
            }
        }
        if let Some(error) = state.error() {
            div {
                class: "error-banner",
                role: "alert",
                "{error}"
            }
        }
    }
}
