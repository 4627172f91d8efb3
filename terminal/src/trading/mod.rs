//! # Trading
//!
//! Order entry and confirmation logic for the trading page, kept apart from rendering.
//!
//! - **[`order_form`]**: Editable draft with total/slider calculation and field validation
//! - **[`confirmation`]**: Single-slot submit → confirm workflow implementing
//!   [`OrderSubmitter`](crate::core::service::OrderSubmitter)
//! - **[`market_data`]**: Demo candles and order book depth for the charts

pub mod confirmation;
pub mod market_data;
pub mod order_form;

pub use confirmation::{ConfirmationController, ConfirmationPhase, ConfirmationTicket};
pub use market_data::{Candle, ChartData, DepthBook, DepthLevel, Timeframe};
pub use order_form::{FieldErrors, OrderForm};
