//! Session list — prior searches, most recent first.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn SidebarList(user: Option<SidebarUser>) -> Element {
    let sessions = SESSIONS.read();
    let selected = SELECTED_SESSION.read();

    if sessions.is_empty() {
        let hint = if user.is_some() { "No search history" } else { "Your searches will show up here" };
        return rsx! {
            div {
                class: "session-list-empty",
                span { "{hint}" }
            }
        };
    }

    rsx! {
        div {
            class: "session-list",
            for session in sessions.iter().cloned() {
                button {
                    class: if selected.as_deref() == Some(session.id.as_str()) {
                        "session-item active"
                    } else {
                        "session-item"
                    },
                    onclick: {
                        let id = session.id.clone();
                        move |_| { *SELECTED_SESSION.write() = Some(id.clone()); }
                    },
                    span { class: "session-title", "{session.title}" }
                }
            }
        }
    }
}
