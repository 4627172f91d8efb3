//! # Display Records
//!
//! This module contains every record the exchange pages display. All of them are seeded in
//! memory by the terminal's demo catalog; none is persisted.
//!
//! ## Module Organization
//!
//! - [`market`] - Asset listing rows and global market statistics
//! - [`order`] - Order kinds/sides, validated order drafts, open-order and trade rows
//! - [`wallet`] - Wallet holdings and transaction log entries
//! - [`earn`] - Staking products and launchpad projects
//! - [`dashboard`] - Portfolio cards, trending movers and news items
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to the spelling the exchange UI uses (`"buy"`, `"stop-limit"`, `"Deposit"`)
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "kind": "stop-limit",
//!   "price": 64000.0,
//!   "quantity": 0.25,
//!   "total": 16000.0,
//!   "trigger_price": 64500.0,
//!   "post_only": false
//! }
//! ```

pub mod dashboard;
pub mod earn;
pub mod market;
pub mod order;
pub mod wallet;

pub use dashboard::*;
pub use earn::*;
pub use market::*;
pub use order::*;
pub use wallet::*;
