//! Search history panel — brand header, conditional sign-in, new search, session list.

use dioxus::prelude::*;

use crate::sidebar::SidebarList;
use crate::state::*;

/// The sign-in prompt is only for anonymous visitors.
fn needs_sign_in(user: &Option<SidebarUser>) -> bool {
    user.is_none()
}

#[component]
pub fn SearchHistory(user: Option<SidebarUser>) -> Element {
    rsx! {
        div {
            class: "sidebar",

            // Brand row: mark + name linking home, close control on the right
            div {
                class: "sidebar-header",
                a {
                    class: "brand",
                    href: "/",
                    onclick: move |_| { *SELECTED_SESSION.write() = None; },
                    svg {
                        class: "brand-mark",
                        width: "22",
                        height: "22",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        circle { cx: "12", cy: "12", r: "9" }
                        path { d: "M12 3v18M3 12h18" }
                    }
                    span { class: "brand-name", "VectorGate" }
                }
                div {
                    class: "sidebar-header-spacer",
                    SidebarClose {}
                }
            }

            if needs_sign_in(&user) {
                SignInButton {}
            }

            // New search action, styled as an outline button
            div {
                class: "new-search",
                button {
                    class: "btn-outline",
                    onclick: move |_| { *SELECTED_SESSION.write() = None; },
                    svg {
                        class: "new-search-icon",
                        width: "16",
                        height: "16",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "1.5",
                        circle { cx: "11", cy: "11", r: "8" }
                        line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                    }
                    "New Search"
                }
            }

            SidebarList { user }
        }
    }
}

/// Close control — hides the sidebar.
#[component]
fn SidebarClose() -> Element {
    rsx! {
        button {
            class: "sidebar-close",
            title: "Hide sidebar",
            onclick: move |_| { *SIDEBAR_OPEN.write() = false; },
            "\u{00D7}"
        }
    }
}

/// Sign-in affordance shown to anonymous visitors.
#[component]
fn SignInButton() -> Element {
    rsx! {
        div {
            class: "sign-in",
            span { class: "sign-in-hint", "Sign in to keep your search history" }
            button {
                class: "btn-primary",
                // Sign-in flow lives outside this panel; the button only
                // surfaces the affordance.
                "Sign In"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_shown_only_when_no_user_present() {
        assert!(needs_sign_in(&None));

        let user = Some(SidebarUser { id: "u-100".to_string(), name: "Ada".to_string() });
        assert!(!needs_sign_in(&user));
    }
}
