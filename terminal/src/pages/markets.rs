//! # Markets Page State
//!
//! Search, gainer/loser filter, descending sort and favorites over the market listing.

use shared::dto::{AssetListing, MarketStats};
use std::cmp::Ordering;
use tracing::debug;

use crate::core::service::CatalogService;

/// Shown on the favorites tab when nothing is starred
pub const NO_FAVORITES_MESSAGE: &str = "No favorites yet. Click the star to add.";

/// Change-direction filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketFilter {
    #[default]
    All,
    /// 24h change above zero
    Gainers,
    /// 24h change below zero
    Losers,
}

impl MarketFilter {
    pub fn all() -> &'static [MarketFilter] {
        &[MarketFilter::All, MarketFilter::Gainers, MarketFilter::Losers]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketFilter::All => "All",
            MarketFilter::Gainers => "Gainers",
            MarketFilter::Losers => "Losers",
        }
    }

    pub fn matches(&self, listing: &AssetListing) -> bool {
        match self {
            MarketFilter::All => true,
            MarketFilter::Gainers => listing.change_24h > 0.0,
            MarketFilter::Losers => listing.change_24h < 0.0,
        }
    }
}

/// Sort key; always descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketSort {
    #[default]
    MarketCap,
    Price,
    Change24h,
}

impl MarketSort {
    pub fn all() -> &'static [MarketSort] {
        &[MarketSort::MarketCap, MarketSort::Price, MarketSort::Change24h]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketSort::MarketCap => "Market Cap",
            MarketSort::Price => "Price",
            MarketSort::Change24h => "24h Change",
        }
    }

    fn key(&self, listing: &AssetListing) -> f64 {
        match self {
            MarketSort::MarketCap => listing.market_cap,
            MarketSort::Price => listing.price,
            MarketSort::Change24h => listing.change_24h,
        }
    }

    /// Descending comparison on this key
    pub fn compare(&self, a: &AssetListing, b: &AssetListing) -> Ordering {
        self.key(b).total_cmp(&self.key(a))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketTab {
    #[default]
    AllCoins,
    Favorites,
}

impl MarketTab {
    pub fn label(&self) -> &'static str {
        match self {
            MarketTab::AllCoins => "All Coins",
            MarketTab::Favorites => "Favorites",
        }
    }
}

/// Markets page state
#[derive(Debug, Clone, PartialEq)]
pub struct MarketsState {
    pub listings: Vec<AssetListing>,
    pub stats: MarketStats,
    pub search: String,
    pub filter: MarketFilter,
    pub sort: MarketSort,
    pub tab: MarketTab,
}

impl MarketsState {
    pub fn new(catalog: &dyn CatalogService) -> Self {
        Self {
            listings: catalog.market_listings(),
            stats: catalog.market_stats(),
            search: String::new(),
            filter: MarketFilter::default(),
            sort: MarketSort::default(),
            tab: MarketTab::default(),
        }
    }

    /// Rows passing search and filter, sorted descending on the chosen key
    pub fn visible_rows(&self) -> Vec<AssetListing> {
        let mut rows: Vec<AssetListing> = self
            .listings
            .iter()
            .filter(|l| l.matches_search(&self.search))
            .filter(|l| self.filter.matches(l))
            .cloned()
            .collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }

    /// [`visible_rows`](Self::visible_rows) restricted to favorites
    pub fn favorite_rows(&self) -> Vec<AssetListing> {
        self.visible_rows().into_iter().filter(|l| l.is_favorite).collect()
    }

    /// Rows for the active tab
    pub fn tab_rows(&self) -> Vec<AssetListing> {
        match self.tab {
            MarketTab::AllCoins => self.visible_rows(),
            MarketTab::Favorites => self.favorite_rows(),
        }
    }

    /// Flip one row's favorite flag. Unknown ids are ignored and report `false`.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        match self.listings.iter_mut().find(|l| l.id == id) {
            Some(listing) => {
                listing.is_favorite = !listing.is_favorite;
                debug!(id, favorite = listing.is_favorite, "Favorite toggled");
                true
            }
            None => false,
        }
    }

    /// Active-crypto count as shown in the stats header, e.g. "10,000+"
    pub fn active_cryptos_label(&self) -> String {
        format!("{}+", shared::utils::format_number(self.stats.active_cryptos as f64, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::DemoCatalog;

    fn symbols(rows: &[AssetListing]) -> Vec<&str> {
        rows.iter().map(|r| r.symbol.as_str()).collect()
    }

    #[test]
    fn test_default_sort_is_market_cap_descending() {
        let state = MarketsState::new(&DemoCatalog);
        assert_eq!(
            symbols(&state.visible_rows()),
            vec!["BTC", "ETH", "SOL", "XRP", "ADA"]
        );
    }

    #[test]
    fn test_sort_by_price_and_change() {
        let mut state = MarketsState::new(&DemoCatalog);
        state.sort = MarketSort::Price;
        assert_eq!(
            symbols(&state.visible_rows()),
            vec!["BTC", "ETH", "SOL", "XRP", "ADA"]
        );
        state.sort = MarketSort::Change24h;
        assert_eq!(
            symbols(&state.visible_rows()),
            vec!["SOL", "ADA", "BTC", "ETH", "XRP"]
        );
    }

    #[test]
    fn test_gainers_and_losers() {
        let mut state = MarketsState::new(&DemoCatalog);
        state.filter = MarketFilter::Gainers;
        assert_eq!(symbols(&state.visible_rows()), vec!["BTC", "SOL", "ADA"]);
        state.filter = MarketFilter::Losers;
        assert_eq!(symbols(&state.visible_rows()), vec!["ETH", "XRP"]);
    }

    #[test]
    fn test_search_matches_name_or_symbol_case_insensitively() {
        let mut state = MarketsState::new(&DemoCatalog);
        state.search = "sol".to_string();
        assert_eq!(symbols(&state.visible_rows()), vec!["SOL"]);
        state.search = "ETHER".to_string();
        assert_eq!(symbols(&state.visible_rows()), vec!["ETH"]);
        state.search = "x".to_string();
        assert_eq!(symbols(&state.visible_rows()), vec!["XRP"]);
        state.search = "nothing".to_string();
        assert!(state.visible_rows().is_empty());
    }

    #[test]
    fn test_search_and_filter_combine() {
        let mut state = MarketsState::new(&DemoCatalog);
        state.search = "a".to_string();
        state.filter = MarketFilter::Gainers;
        // Solana and Cardano contain "a" and are up; Ethereum is down
        assert_eq!(symbols(&state.visible_rows()), vec!["SOL", "ADA"]);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut state = MarketsState::new(&DemoCatalog);
        assert_eq!(symbols(&state.favorite_rows()), vec!["BTC", "ETH"]);

        assert!(state.toggle_favorite("solana"));
        assert!(state.toggle_favorite("bitcoin"));
        assert_eq!(symbols(&state.favorite_rows()), vec!["ETH", "SOL"]);

        assert!(!state.toggle_favorite("dogecoin"));
        assert_eq!(state.listings.len(), 5);
    }

    #[test]
    fn test_favorites_tab_respects_filter() {
        let mut state = MarketsState::new(&DemoCatalog);
        state.tab = MarketTab::Favorites;
        state.filter = MarketFilter::Gainers;
        assert_eq!(symbols(&state.tab_rows()), vec!["BTC"]);
    }

    #[test]
    fn test_active_cryptos_label() {
        let state = MarketsState::new(&DemoCatalog);
        assert_eq!(state.active_cryptos_label(), "10,000+");
    }
}
