use crate::pagination::PageButton;
use crate::ui::search_context::use_search;
use dioxus::prelude::*;

/// Prev, numbered and next buttons for the users table
#[component]
pub fn SearchPagination() -> Element {
    let search_ctx = use_search();
    let buttons = search_ctx.state.read().pages().buttons();

    rsx! {
        div {
            class: "pagination",
            for button in buttons {
                PaginationButton {
                    key: "{button_key(&button)}",
                    button: button
                }
            }
        }
    }
}

#[component]
fn PaginationButton(button: PageButton) -> Element {
    let search_ctx = use_search();
    let target = button.target();

    let (label, class) = match button {
        PageButton::Prev { .. } => ("‹".to_string(), "pagination-btn prev-btn"),
        PageButton::Next { .. } => ("›".to_string(), "pagination-btn next-btn"),
        PageButton::Page { number, active: true } => (number.to_string(), "pagination-btn active"),
        PageButton::Page { number, .. } => (number.to_string(), "pagination-btn"),
    };

    rsx! {
        button {
            class: "{class}",
            disabled: button.is_disabled(),
            onclick: move |_| search_ctx.paginate(target),
            "{label}"
        }
    }
}

fn button_key(button: &PageButton) -> String {
    match button {
        PageButton::Prev { .. } => "prev".to_string(),
        PageButton::Next { .. } => "next".to_string(),
        PageButton::Page { number, .. } => number.to_string(),
    }
}
