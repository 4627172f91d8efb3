//! # Event Handler
//!
//! Applies async task results to the application state.

use shared::dto::OrderRequest;
use tracing::{info, warn};

use crate::app::state::Notification;
use crate::app::{App, AppEvent};
use crate::core::error::OrderError;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Write lock is taken per event and released before returning.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::OrderSubmitted { request, result } => {
                self.handle_order_submitted(request, result);
            }
        }
    }
}

impl App {
    fn handle_order_submitted(&mut self, request: OrderRequest, result: Result<(), OrderError>) {
        let mut state = self.state.write();
        match result {
            Ok(()) => {
                info!(order = %request.summary(), "Order submission completed");
                state.trading.form.finish_submission(true);
                state.notify(Notification::success(
                    "Order Placed",
                    format!(
                        "{} order for {} {} submitted successfully.",
                        request.side.label(),
                        request.draft.quantity,
                        request.pair.base
                    ),
                ));
            }
            Err(e) => {
                warn!(order = %request.summary(), error = %e, "Order submission failed");
                state.trading.form.finish_submission(false);
                state.notify(Notification::error(
                    "Order Failed",
                    "Could not place your order. Please try again.",
                ));
            }
        }
    }
}
