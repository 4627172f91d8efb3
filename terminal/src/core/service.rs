//! # Service Traits
//!
//! Seams between page state and whatever backs it, enabling dependency injection in tests.
//!
//! - [`OrderSubmitter`]: receives a validated order and resolves once the order is placed
//!   or refused. The trading page plugs in
//!   [`ConfirmationController`](crate::trading::confirmation::ConfirmationController).
//! - [`CatalogService`]: yields the seed records every page is built from. The desktop app
//!   uses [`DemoCatalog`](crate::services::catalog::DemoCatalog).

use async_trait::async_trait;
use shared::dto::{
    AssetHolding, AssetListing, LaunchpadProject, MarketStats, NewsItem, OrderRequest, OrderRow,
    PortfolioAsset, StakingProduct, TrendingAsset, WalletTransaction,
};

use crate::core::error::OrderError;

/// Asynchronous order submission handler.
///
/// Resolves `Ok(())` once the order is placed and `Err` for every other outcome. The
/// caller keeps the draft editable on `Err` and clears it on `Ok`.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit(&self, request: OrderRequest) -> Result<(), OrderError>;
}

/// Source of the records every page is constructed from.
///
/// Every call returns a fresh copy; pages own and mutate their copy for the session.
pub trait CatalogService: Send + Sync {
    /// Market listing rows
    fn market_listings(&self) -> Vec<AssetListing>;

    /// Global market headline numbers
    fn market_stats(&self) -> MarketStats;

    /// Open orders shown under the trading terminal
    fn open_orders(&self) -> Vec<OrderRow>;

    /// Executed trades shown under the trading terminal
    fn trade_history(&self) -> Vec<OrderRow>;

    fn holdings(&self) -> Vec<AssetHolding>;

    fn transactions(&self) -> Vec<WalletTransaction>;

    fn staking_products(&self) -> Vec<StakingProduct>;

    fn launchpad_projects(&self) -> Vec<LaunchpadProject>;

    /// Dashboard asset cards
    fn portfolio(&self) -> Vec<PortfolioAsset>;

    fn trending(&self) -> Vec<TrendingAsset>;

    fn news(&self) -> Vec<NewsItem>;
}
