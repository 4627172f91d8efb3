//! # Markets Handlers
//!
//! Search, filter, sort, tab and favorite changes on the markets page.

use crate::app::state::AppState;
use crate::pages::markets::{MarketFilter, MarketSort, MarketTab};
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn handle_search_change(state: Arc<RwLock<AppState>>, search: String) {
    state.write().markets.search = search;
}

pub(crate) fn handle_filter_change(state: Arc<RwLock<AppState>>, filter: MarketFilter) {
    state.write().markets.filter = filter;
}

pub(crate) fn handle_sort_change(state: Arc<RwLock<AppState>>, sort: MarketSort) {
    state.write().markets.sort = sort;
}

pub(crate) fn handle_tab_change(state: Arc<RwLock<AppState>>, tab: MarketTab) {
    state.write().markets.tab = tab;
}

/// Flip the favorite star of one listing
///
/// Internal handler function - use [`crate::app::App::handle_toggle_favorite`] instead.
pub(crate) fn handle_toggle_favorite(state: Arc<RwLock<AppState>>, id: &str) {
    let mut state = state.write();
    if !state.markets.toggle_favorite(id) {
        tracing::warn!(id, "Favorite toggle for unknown listing");
    }
}
