//! # Order Confirmation
//!
//! Two-phase submit → confirm workflow for the trading page.
//!
//! ```text
//! Drafting ──begin──▶ PendingConfirmation ──confirm──▶ Resolved(Confirmed) ──▶ Drafting
//!                              │
//!                              └──────cancel─────────▶ Resolved(Cancelled) ──▶ Drafting
//! ```
//!
//! [`ConfirmationController::begin`] captures the request and hands back a
//! [`ConfirmationTicket`] whose [`outcome`](ConfirmationTicket::outcome) resolves once the
//! user confirms or cancels. The resolver is a `tokio::sync::oneshot` sender owned by the
//! controller, so resolution happens at most once and dropping the controller resolves the
//! waiter with [`OrderError::Abandoned`].

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::dto::OrderRequest;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::OrderError;
use crate::core::service::OrderSubmitter;

/// Workflow phase as seen by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationPhase {
    /// Nothing pending; the form is editable
    Drafting,
    /// An order is frozen and waiting in the dialog
    PendingConfirmation,
}

struct PendingOrder {
    ticket: Uuid,
    request: OrderRequest,
    resolver: oneshot::Sender<Result<(), OrderError>>,
}

/// Handle held by the submitting task while the dialog is open
#[derive(Debug)]
pub struct ConfirmationTicket {
    id: Uuid,
    receiver: oneshot::Receiver<Result<(), OrderError>>,
}

impl ConfirmationTicket {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Wait for the user's decision
    pub async fn outcome(self) -> Result<(), OrderError> {
        match self.receiver.await {
            Ok(result) => result,
            Err(_) => Err(OrderError::Abandoned),
        }
    }
}

/// Owner of the single outstanding order awaiting confirmation
#[derive(Default)]
pub struct ConfirmationController {
    pending: Mutex<Option<PendingOrder>>,
}

impl ConfirmationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze `request` and open the confirmation step.
    ///
    /// Refused with [`OrderError::AlreadyPending`] while another order is waiting.
    pub fn begin(&self, request: OrderRequest) -> Result<ConfirmationTicket, OrderError> {
        let mut pending = self.pending.lock();
        if let Some(existing) = pending.as_ref() {
            warn!(pending_ticket = %existing.ticket, "Order refused, another is awaiting confirmation");
            return Err(OrderError::AlreadyPending);
        }

        let (resolver, receiver) = oneshot::channel();
        let ticket = Uuid::new_v4();
        debug!(ticket = %ticket, order = %request.summary(), "Order awaiting confirmation");
        *pending = Some(PendingOrder {
            ticket,
            request,
            resolver,
        });

        Ok(ConfirmationTicket { id: ticket, receiver })
    }

    /// The frozen request shown in the dialog
    pub fn pending_request(&self) -> Option<OrderRequest> {
        self.pending.lock().as_ref().map(|p| p.request.clone())
    }

    pub fn is_pending(&self) -> bool {
        self.pending.lock().is_some()
    }

    pub fn phase(&self) -> ConfirmationPhase {
        if self.is_pending() {
            ConfirmationPhase::PendingConfirmation
        } else {
            ConfirmationPhase::Drafting
        }
    }

    /// Place the pending order. Returns the placed request, or `None` if nothing was pending.
    pub fn confirm(&self) -> Option<OrderRequest> {
        let pending = self.pending.lock().take()?;
        info!(
            ticket = %pending.ticket,
            pair = %pending.request.pair,
            side = %pending.request.side,
            kind = %pending.request.draft.kind,
            quantity = pending.request.draft.quantity,
            price = ?pending.request.draft.price,
            "Order confirmed"
        );

        // The submitting task may already be gone; the order is confirmed either way
        let _ = pending.resolver.send(Ok(()));
        Some(pending.request)
    }

    /// Cancel the pending order. Returns `false` if nothing was pending.
    pub fn cancel(&self) -> bool {
        let Some(pending) = self.pending.lock().take() else {
            return false;
        };
        info!(ticket = %pending.ticket, order = %pending.request.summary(), "Order cancelled by user");

        let _ = pending.resolver.send(Err(OrderError::Cancelled));
        true
    }
}

#[async_trait]
impl OrderSubmitter for ConfirmationController {
    async fn submit(&self, request: OrderRequest) -> Result<(), OrderError> {
        let ticket = self.begin(request)?;
        let id = ticket.id();
        let result = ticket.outcome().await;
        debug!(ticket = %id, placed = result.is_ok(), "Order submission settled");
        result
    }
}
