//! Root application component — sidebar + main panel layout.

use dioxus::prelude::*;

use crate::sidebar::SearchHistory;
use crate::state::*;
use crate::INITIAL_STATE;

static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Consume the pre-runtime snapshot on first render
    use_hook(|| {
        if let Some(initial) = INITIAL_STATE.lock().unwrap().take() {
            *USER.write() = initial.user;
            *SESSIONS.write() = initial.sessions;
        }
    });

    let sidebar_open = *SIDEBAR_OPEN.read();
    let user = USER.read().clone();

    rsx! {
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            if sidebar_open {
                SearchHistory { user }
            }

            div {
                class: "content-area",

                if !sidebar_open {
                    button {
                        class: "sidebar-reopen",
                        title: "Show sidebar",
                        onclick: move |_| { *SIDEBAR_OPEN.write() = true; },
                        "\u{2630}"
                    }
                }

                MainPanel {}
            }
        }
    }
}

/// Main panel — the selected session, or a new-search prompt.
#[component]
fn MainPanel() -> Element {
    let selected = SELECTED_SESSION.read();
    let sessions = SESSIONS.read();

    let title = selected
        .as_deref()
        .and_then(|id| sessions.iter().find(|s| s.id == id))
        .map(|s| s.title.clone());

    match title {
        Some(title) => rsx! {
            div {
                class: "main-panel",
                h2 { class: "session-title", "{title}" }
            }
        },
        None => rsx! {
            div {
                class: "main-panel main-panel-empty",
                span { "Start a new search..." }
            }
        },
    }
}
