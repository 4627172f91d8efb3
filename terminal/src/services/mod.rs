//! # Services Module
//!
//! Implementations of the [`crate::core::service`] traits.
//!
//! ```text
//! services/
//! └── catalog.rs   - DemoCatalog: in-memory seed records for every page
//! ```
//!
//! Order submission is served by
//! [`ConfirmationController`](crate::trading::confirmation::ConfirmationController), which
//! lives with the rest of the trading logic.

pub mod catalog;

pub use catalog::DemoCatalog;
