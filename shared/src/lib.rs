//! # Shared Exchange Records
//!
//! Plain data records shared by every page of the exchange terminal, plus the small
//! numeric helpers (rounding, formatting, pair parsing) that those records need.
//!
//! ## Structure
//!
//! - **[`dto`]**: Display records
//!   - **[`dto::market`]**: Asset listings and global market statistics
//!   - **[`dto::order`]**: Order kinds, sides, validated drafts and order table rows
//!   - **[`dto::wallet`]**: Holdings and the transaction log
//!   - **[`dto::earn`]**: Staking products and launchpad projects
//!   - **[`dto::dashboard`]**: Portfolio cards, trending movers and news items
//! - **[`utils`]**: Shared helpers
//!   - **[`utils::round_to`]**: Fixed-precision rounding used for order math
//!   - **[`utils::format_number`]**: Thousands-separated number formatting
//!   - **[`utils::TradingPair`]**: `BASE/QUOTE` symbol parsing
//!
//! ## Wire Format
//!
//! Every record derives `Serialize`/`Deserialize` so a real backend could hand the same
//! shapes to the terminal as JSON:
//! - Field names stay **snake_case**
//! - Enums use their display spelling where the exchange UI shows one (`"stop-limit"`)
//! - Optional fields are omitted when `None`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::order::{OrderKind, OrderSide};
//! use shared::utils::{round_to, TradingPair};
//!
//! let pair: TradingPair = "BTC/USDT".parse().unwrap();
//! assert_eq!(pair.base, "BTC");
//! assert_eq!(round_to(100.0 * 2.0, 8), 200.0);
//! assert_eq!(OrderKind::StopLimit.label(), "Stop-limit");
//! assert_eq!(OrderSide::Buy.label(), "BUY");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
