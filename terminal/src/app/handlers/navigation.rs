//! # Navigation Handlers
//!
//! Handlers for screen navigation and tab changes.

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Switch to `screen`. Returns whether the screen actually changed.
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) -> bool {
    let mut state = state.write();
    if state.current_screen == screen {
        return false;
    }
    tracing::debug!(from = state.current_screen.title(), to = screen.title(), "Screen change");
    state.current_screen = screen;
    true
}

/// Navigate to next screen in Tab order, wrapping around
///
/// Internal handler function - use [`crate::app::App::next_screen`] instead.
pub(crate) fn next_screen(state: Arc<RwLock<AppState>>) -> Option<Screen> {
    step_screen(state, 1)
}

/// Navigate to previous screen in Tab order, wrapping around
///
/// Internal handler function - use [`crate::app::App::previous_screen`] instead.
pub(crate) fn previous_screen(state: Arc<RwLock<AppState>>) -> Option<Screen> {
    let len = Screen::all().len();
    step_screen(state, len - 1)
}

fn step_screen(state: Arc<RwLock<AppState>>, offset: usize) -> Option<Screen> {
    let mut state = match state.try_write() {
        Some(guard) => guard,
        None => {
            tracing::warn!("Skipped screen navigation - state locked");
            return None;
        }
    };

    let screens = Screen::all();
    let current_idx = screens
        .iter()
        .position(|&s| s == state.current_screen)
        .unwrap_or(0);

    let screen = screens[(current_idx + offset) % screens.len()];
    state.current_screen = screen;
    Some(screen)
}
