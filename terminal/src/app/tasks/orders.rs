//! # Order Tasks
//!
//! Runs an order submission off the UI thread and reports the outcome as an event.

use std::sync::Arc;

use async_channel::Sender;
use shared::dto::OrderRequest;
use tracing::{debug, error};

use crate::app::events::AppEvent;
use crate::core::service::OrderSubmitter;
use crate::utils::runtime::TOKIO_RT;

/// Hand `request` to `submitter` on the shared runtime.
///
/// The submitter may suspend for as long as the user takes to confirm; the UI thread only
/// sees the final [`AppEvent::OrderSubmitted`].
pub(crate) fn submit_order(
    submitter: Arc<dyn OrderSubmitter>,
    request: OrderRequest,
    event_tx: Sender<AppEvent>,
) {
    TOKIO_RT.spawn(async move {
        debug!(order = %request.summary(), "Order submission started");
        let result = submitter.submit(request.clone()).await;

        if let Err(e) = event_tx.send(AppEvent::OrderSubmitted { request, result }).await {
            error!(error = %e, "Failed to report order submission, event channel closed");
        }
    });
}
