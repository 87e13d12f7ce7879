//! VectorGate Desktop — Dioxus-powered search history companion.

use std::sync::Mutex;

mod app;
mod sidebar;
mod state;

use app::App;
use state::AppState;

/// Pre-runtime storage — profile loaded before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vectorgate=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Load the local profile at startup (blocking) — store in Mutex, NOT in the signal
    let initial_state = AppState::load();
    *INITIAL_STATE.lock().unwrap() = Some(initial_state);

    dioxus::launch(App);
}
