//! Global application state using Dioxus signals.

use std::path::PathBuf;

use dioxus::prelude::*;
use serde::Deserialize;

/// Signed-in user handle. The sidebar only cares about presence; attributes
/// are passed through to child components.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SidebarUser {
    pub id: String,
    pub name: String,
}

/// One prior search session shown in the sidebar list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchSession {
    pub id: String,
    pub title: String,
}

/// On-disk profile file (`~/.vectorgate/profile.json`).
#[derive(Default, Deserialize)]
struct Profile {
    user: Option<SidebarUser>,
    #[serde(default)]
    sessions: Vec<SearchSession>,
}

/// Snapshot loaded once at startup — signed-in user and prior sessions.
pub struct AppState {
    pub user: Option<SidebarUser>,
    pub sessions: Vec<SearchSession>,
}

impl AppState {
    /// Load the profile from the home directory. No profile file means an
    /// anonymous user with an empty history.
    pub fn load() -> Self {
        let path = home_dir().map(|h| h.join(".vectorgate").join("profile.json"));
        Self::from_profile_path(path.as_deref())
    }

    fn from_profile_path(path: Option<&std::path::Path>) -> Self {
        let profile = path
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|content| serde_json::from_str::<Profile>(&content).ok())
            .unwrap_or_default();
        AppState { user: profile.user, sessions: profile.sessions }
    }
}

/// Platform-aware home directory: `HOME` on Unix, `USERPROFILE` on Windows.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).ok().map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Signed-in user — set once at startup from the profile
pub static USER: GlobalSignal<Option<SidebarUser>> = Signal::global(|| None);

/// Prior search sessions shown in the sidebar
pub static SESSIONS: GlobalSignal<Vec<SearchSession>> = Signal::global(|| vec![]);

/// Session currently open in the main panel (None = new search)
pub static SELECTED_SESSION: GlobalSignal<Option<String>> = Signal::global(|| None);

/// Whether the sidebar is visible
pub static SIDEBAR_OPEN: GlobalSignal<bool> = Signal::global(|| true);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_profile_is_anonymous_with_empty_history() {
        let state = AppState::from_profile_path(Some(std::path::Path::new(
            "/nonexistent/profile.json",
        )));
        assert!(state.user.is_none());
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn profile_parses_user_and_sessions() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "user": {{ "id": "u-100", "name": "Ada" }},
                "sessions": [{{ "id": "s-1", "title": "rust async traits" }}]
            }}"#
        )
        .unwrap();

        let state = AppState::from_profile_path(Some(file.path()));
        assert_eq!(state.user.unwrap().name, "Ada");
        assert_eq!(state.sessions.len(), 1);
        assert_eq!(state.sessions[0].title, "rust async traits");
    }
}
