use crate::ui::search_context::use_search;
use dioxus::prelude::*;

/// Search box; every change of its text triggers a (debounced) fetch
#[component]
pub fn SearchInput() -> Element {
    let search_ctx = use_search();
    let query = search_ctx.state.read().query().to_string();

    rsx! {
        div {
            class: "search-input",
            span { class: "search-icon", "🔍" }
            input {
                r#type: "search",
                onmounted: move |element| {
                    spawn(async move {
                        let _ = element.set_focus(true).await;
                    });
                },
                placeholder: "Search GitHub users...",
                value: "{query}",
                oninput: move |event: FormEvent| {
                    search_ctx.set_query(event.value());
                }
            }
        }
    }
}
