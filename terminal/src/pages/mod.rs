//! # Page State
//!
//! One state container per page, rebuilt from a [`CatalogService`](crate::core::service::CatalogService)
//! each session. Containers expose pure transitions and never render; `ui::screens`
//! reads them and routes user input through the `App` handlers.
//!
//! - **[`dashboard`]**: Portfolio overview, feed widgets and quick actions
//! - **[`markets`]**: Listing search/filter/sort and favorites
//! - **[`trading`]**: Pair, order form, balances, order tables, charts
//! - **[`wallet`]**: Holdings, allocation and deposit/withdraw dialogs
//! - **[`earn`]**: Staking products, stake dialog, launchpad, FAQ

pub mod dashboard;
pub mod earn;
pub mod markets;
pub mod trading;
pub mod wallet;

pub use dashboard::DashboardState;
pub use earn::EarnState;
pub use markets::MarketsState;
pub use trading::TradingState;
pub use wallet::WalletPageState;
