//! # Trading Handlers
//!
//! Order form edits, order submission and the confirmation dialog.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Notification};
use crate::app::tasks;
use crate::core::service::OrderSubmitter;
use crate::pages::trading::HistoryTab;
use crate::trading::confirmation::ConfirmationController;
use crate::trading::market_data::Timeframe;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::{OrderKind, OrderSide};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Field of the order form being edited
#[derive(Debug, Clone, PartialEq)]
pub enum OrderFormEdit {
    Side(OrderSide),
    Kind(OrderKind),
    Price(String),
    Quantity(String),
    TriggerPrice(String),
    PostOnly(bool),
    /// Balance slider, in percent
    Percentage(f64),
}

/// Apply one edit to the order form. Only the side can change while an order awaits
/// confirmation.
///
/// Internal handler function - use [`crate::app::App::handle_order_form_edit`] instead.
pub(crate) fn handle_order_form_edit(state: Arc<RwLock<AppState>>, edit: OrderFormEdit) {
    let mut state = state.write();
    let trading = &mut state.trading;
    if trading.form.is_submitting() && !matches!(edit, OrderFormEdit::Side(_)) {
        warn!(edit = ?edit, "Order form edit refused, an order is awaiting confirmation");
        return;
    }
    match edit {
        OrderFormEdit::Side(side) => trading.side = side,
        OrderFormEdit::Kind(kind) => trading.form.set_kind(kind),
        OrderFormEdit::Price(price) => trading.form.set_price(price),
        OrderFormEdit::Quantity(quantity) => trading.form.set_quantity(quantity),
        OrderFormEdit::TriggerPrice(trigger) => trading.form.set_trigger_price(trigger),
        OrderFormEdit::PostOnly(post_only) => trading.form.set_post_only(post_only),
        OrderFormEdit::Percentage(percentage) => trading.apply_percentage(percentage),
    }
}

/// Validate the form and hand the order to the submitter.
///
/// Invalid fields stay on the form as inline messages. A submit while another order is
/// still outstanding is refused.
///
/// Internal handler function - use [`crate::app::App::handle_order_submit`] instead.
pub(crate) fn handle_order_submit(
    state: Arc<RwLock<AppState>>,
    submitter: Arc<dyn OrderSubmitter>,
    event_tx: Sender<AppEvent>,
) {
    let request = {
        let mut state = state.write();
        if state.trading.form.is_submitting() {
            warn!("Order submit ignored, a submission is already in progress");
            return;
        }

        let side = state.trading.side;
        let pair = state.trading.pair.clone();
        match state.trading.form.submit(side, &pair) {
            Ok(request) => {
                state.trading.form.begin_submission();
                request
            }
            Err(_) => return,
        }
    };

    info!(
        pair = %request.pair,
        side = %request.side,
        kind = %request.draft.kind,
        quantity = request.draft.quantity,
        price = ?request.draft.price,
        total = request.draft.total,
        "Order submitted"
    );
    tasks::orders::submit_order(submitter, request, event_tx);
}

/// Confirm the order shown in the confirmation dialog
///
/// Internal handler function - use [`crate::app::App::handle_order_confirm`] instead.
pub(crate) fn handle_order_confirm(state: Arc<RwLock<AppState>>, confirmation: &ConfirmationController) {
    match confirmation.confirm() {
        Some(request) => {
            state
                .write()
                .notify(Notification::success("Order Placed!", request.summary()));
        }
        None => debug!("Confirm with no order pending"),
    }
}

/// Dismiss the confirmation dialog; the waiting submission fails as cancelled
///
/// Internal handler function - use [`crate::app::App::handle_order_cancel`] instead.
pub(crate) fn handle_order_cancel(confirmation: &ConfirmationController) {
    if !confirmation.cancel() {
        debug!("Cancel with no order pending");
    }
}

pub(crate) fn handle_timeframe_change(state: Arc<RwLock<AppState>>, timeframe: Timeframe) {
    let mut state = state.write();
    if state.trading.chart.timeframe != timeframe {
        debug!(timeframe = timeframe.label(), "Chart timeframe changed");
        state.trading.chart.set_timeframe(timeframe);
    }
}

pub(crate) fn handle_history_tab_change(state: Arc<RwLock<AppState>>, tab: HistoryTab) {
    state.write().trading.history_tab = tab;
}
