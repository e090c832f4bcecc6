use crate::github::GitHubUser;
use crate::ui::search_context::use_search;
use dioxus::prelude::*;
use tracing::warn;

/// Users on the current page
#[component]
pub fn UserTable() -> Element {
    let search_ctx = use_search();
    let state = search_ctx.state.read();

    rsx! {
        table {
            class: "user-table",
            thead {
                tr {
                    th { "Avatar" }
                    th { "User" }
                    th { "Profile URL" }
                }
            }
            tbody {
                for user in state.visible_users().iter() {
                    UserRow {
                        key: "{user.id}",
                        user: user.clone()
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: GitHubUser) -> Element {
    let profile_url = user.html_url.clone();

    rsx! {
        tr {
            td {
                img {
                    class: "avatar",
                    src: "{user.avatar_url}",
                    alt: "{user.login}"
                }
            }
            td { "{user.login}" }
            td {
                a {
                    href: "{user.html_url}",
                    onclick: move |event: MouseEvent| {
                        event.prevent_default();
                        if let Err(e) = open::that(&profile_url) {
                            warn!("Failed to open {}: {}", profile_url, e);
                        }
                    },
                    "{user.html_url}"
                }
            }
        }
    }
}
