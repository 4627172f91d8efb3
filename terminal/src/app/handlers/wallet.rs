//! # Wallet Handlers
//!
//! Deposit and withdraw dialogs of the wallet page.

use crate::app::state::{AppState, Notification};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// Open the deposit dialog for a holding
///
/// Internal handler function - use [`crate::app::App::handle_deposit_click`] instead.
pub(crate) fn handle_deposit_click(state: Arc<RwLock<AppState>>, holding_id: &str) {
    if !state.write().wallet.open_deposit(holding_id) {
        warn!(holding_id, "Deposit requested for unknown holding");
    }
}

/// Open the withdraw dialog for a holding
///
/// Internal handler function - use [`crate::app::App::handle_withdraw_click`] instead.
pub(crate) fn handle_withdraw_click(state: Arc<RwLock<AppState>>, holding_id: &str) {
    if !state.write().wallet.open_withdraw(holding_id) {
        warn!(holding_id, "Withdraw requested for unknown holding");
    }
}

pub(crate) fn handle_withdraw_edit(
    state: Arc<RwLock<AppState>>,
    address: Option<String>,
    amount: Option<String>,
) {
    state.write().wallet.update_withdraw(address, amount);
}

/// Submit the withdraw dialog. Failures stay on the dialog.
///
/// Internal handler function - use [`crate::app::App::handle_withdraw_submit`] instead.
pub(crate) fn handle_withdraw_submit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if let Ok(request) = state.wallet.submit_withdrawal() {
        state.notify(Notification::info(
            "Withdrawal Submitted",
            format!(
                "Withdrawal of {} {} to {} submitted.",
                request.amount, request.symbol, request.address
            ),
        ));
    }
}

pub(crate) fn handle_dialog_close(state: Arc<RwLock<AppState>>) {
    state.write().wallet.close_dialog();
}

/// Deposit address was put on the clipboard
pub(crate) fn handle_address_copied(state: Arc<RwLock<AppState>>, address: &str) {
    info!(address, "Deposit address copied");
    state
        .write()
        .notify(Notification::success("Copied", "Deposit address copied to clipboard."));
}
