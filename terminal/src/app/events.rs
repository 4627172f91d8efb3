//! # Application Events
//!
//! Results sent from async tasks back to the UI thread.

use shared::dto::OrderRequest;

use crate::core::error::OrderError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// An order submission settled, either confirmed or refused
    OrderSubmitted {
        request: OrderRequest,
        result: Result<(), OrderError>,
    },
}
