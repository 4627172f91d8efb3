//! # Earn Handlers
//!
//! Tabs, the stake dialog and launchpad participation.

use crate::app::state::{AppState, Notification};
use crate::pages::earn::EarnTab;
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn handle_tab_change(state: Arc<RwLock<AppState>>, tab: EarnTab) {
    if !state.write().earn.select_tab(tab) {
        tracing::debug!(tab = tab.label(), "Disabled earn tab selected");
    }
}

/// Open the stake dialog for a product
///
/// Internal handler function - use [`crate::app::App::handle_stake_click`] instead.
pub(crate) fn handle_stake_click(state: Arc<RwLock<AppState>>, product_id: &str) {
    state.write().earn.open_stake(product_id);
}

pub(crate) fn handle_stake_amount_change(state: Arc<RwLock<AppState>>, amount: String) {
    state.write().earn.set_stake_amount(amount);
}

/// Confirm the stake dialog. Failures stay on the dialog.
///
/// Internal handler function - use [`crate::app::App::handle_stake_confirm`] instead.
pub(crate) fn handle_stake_confirm(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if let Ok(request) = state.earn.confirm_stake() {
        state.notify(Notification::success(
            "Stake Confirmed",
            format!("Staked {} {}.", request.amount, request.asset_symbol),
        ));
    }
}

pub(crate) fn handle_stake_close(state: Arc<RwLock<AppState>>) {
    state.write().earn.close_stake();
}

/// Join a launchpad project
///
/// Internal handler function - use [`crate::app::App::handle_participate_click`] instead.
pub(crate) fn handle_participate_click(state: Arc<RwLock<AppState>>, project_id: &str) {
    let mut state = state.write();
    let notification = match state.earn.participate(project_id) {
        Ok(project) => Notification::info(
            "Participation Requested",
            format!("You have requested to join {}.", project.name),
        ),
        Err(e) => Notification::warning("Cannot Participate", e.user_message()),
    };
    state.notify(notification);
}
