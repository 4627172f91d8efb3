//! # Navigation Handlers
//!
//! Route changes from the nav bar, quick actions and in-page links.

use crate::app::routes::{normalize_path, Route};
use crate::app::state::AppState;
use crate::pages::dashboard::QuickAction;
use parking_lot::RwLock;
use std::sync::Arc;

/// Navigate to `path`; unknown paths land on the not-found view
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn navigate(state: Arc<RwLock<AppState>>, path: &str) {
    let path = normalize_path(path);
    let route = Route::from_path(&path);
    if let Route::NotFound(ref unknown) = route {
        tracing::warn!(path = %unknown, "Navigation to unknown path");
    } else {
        tracing::debug!(path = %path, "Navigating");
    }

    let mut state = state.write();
    state.route = route;
    state.current_path = path;
}

/// Handle a dashboard quick action
///
/// Internal handler function - use [`crate::app::App::handle_quick_action`] instead.
pub(crate) fn handle_quick_action(state: Arc<RwLock<AppState>>, action: QuickAction) {
    tracing::info!(action = action.label(), "Quick action");
    navigate(state, &action.route().path());
}
