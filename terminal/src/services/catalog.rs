//! # Demo Catalog
//!
//! In-memory seed data for every page. Each call builds fresh records, so page state can
//! mutate its copy (favorites, form edits) without touching the source.

use chrono::{NaiveDate, NaiveDateTime};
use shared::dto::{
    AssetHolding, AssetListing, LaunchpadProject, LaunchpadStatus, MarketStats, NewsImpact,
    NewsItem, OrderKind, OrderRow, OrderRowStatus, OrderSide, PortfolioAsset, StakingProduct,
    TransactionStatus, TransactionType, TrendingAsset, WalletTransaction,
};

use crate::core::service::CatalogService;

/// Seed data source used by the desktop app
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCatalog;

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    symbol: &str,
    price: f64,
    change_24h: f64,
    volume_24h: f64,
    market_cap: f64,
    is_favorite: bool,
) -> AssetListing {
    AssetListing {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        price,
        change_24h,
        volume_24h,
        market_cap,
        is_favorite,
    }
}

fn holding(id: &str, symbol: &str, name: &str, balance: f64, value_usd: f64, color: [u8; 3]) -> AssetHolding {
    AssetHolding {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        balance,
        value_usd,
        color,
    }
}

fn transaction(
    id: &str,
    tx_type: TransactionType,
    asset_symbol: &str,
    amount: f64,
    status: TransactionStatus,
    (y, m, d): (i32, u32, u32),
    details: &str,
) -> WalletTransaction {
    WalletTransaction {
        id: id.to_string(),
        tx_type,
        asset_symbol: asset_symbol.to_string(),
        amount,
        status,
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        details: details.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn staking(
    id: &str,
    asset_name: &str,
    asset_symbol: &str,
    apy: f64,
    duration_days: Option<u32>,
    min_stake_amount: f64,
    total_staked: f64,
    capacity: f64,
) -> StakingProduct {
    StakingProduct {
        id: id.to_string(),
        asset_name: asset_name.to_string(),
        asset_symbol: asset_symbol.to_string(),
        apy,
        duration_days,
        min_stake_amount,
        total_staked: Some(total_staked),
        capacity: Some(capacity),
    }
}

fn portfolio_asset(symbol: &str, name: &str, current_value: f64, change: f64) -> PortfolioAsset {
    PortfolioAsset {
        symbol: symbol.to_string(),
        name: name.to_string(),
        current_value,
        value_currency: "USD".to_string(),
        change_percentage: Some(change),
    }
}

impl CatalogService for DemoCatalog {
    fn market_listings(&self) -> Vec<AssetListing> {
        vec![
            listing("bitcoin", "Bitcoin", "BTC", 67000.50, 1.25, 35e9, 1.3e12, true),
            listing("ethereum", "Ethereum", "ETH", 3500.75, -0.50, 18e9, 420e9, true),
            listing("solana", "Solana", "SOL", 150.20, 5.60, 2.5e9, 67e9, false),
            listing("cardano", "Cardano", "ADA", 0.45, 2.10, 500e6, 16e9, false),
            listing("xrp", "XRP", "XRP", 0.52, -1.15, 1.2e9, 28e9, false),
        ]
    }

    fn market_stats(&self) -> MarketStats {
        MarketStats {
            global_market_cap: 2.17e12,
            volume_24h: 78.5e9,
            btc_dominance: 51.3,
            active_cryptos: 10_000,
        }
    }

    fn open_orders(&self) -> Vec<OrderRow> {
        vec![
            OrderRow {
                id: "1".to_string(),
                symbol: "BTC/USDT".to_string(),
                kind: OrderKind::Limit,
                side: OrderSide::Buy,
                price: 65000.0,
                amount: 0.1,
                filled_pct: 0.0,
                total: 6500.0,
                status: OrderRowStatus::Open,
                time: None,
            },
            OrderRow {
                id: "2".to_string(),
                symbol: "ETH/USDT".to_string(),
                kind: OrderKind::Market,
                side: OrderSide::Sell,
                price: 3400.0,
                amount: 2.0,
                filled_pct: 100.0,
                total: 6800.0,
                status: OrderRowStatus::Filled,
                time: None,
            },
        ]
    }

    fn trade_history(&self) -> Vec<OrderRow> {
        vec![OrderRow {
            id: "3".to_string(),
            symbol: "ADA/USDT".to_string(),
            kind: OrderKind::Limit,
            side: OrderSide::Buy,
            price: 0.45,
            amount: 1000.0,
            filled_pct: 100.0,
            total: 450.0,
            status: OrderRowStatus::Filled,
            time: NaiveDateTime::parse_from_str("2024-07-28 10:30:00", "%Y-%m-%d %H:%M:%S").ok(),
        }]
    }

    fn holdings(&self) -> Vec<AssetHolding> {
        vec![
            holding("btc", "BTC", "Bitcoin", 0.5, 33500.0, [0xF7, 0x93, 0x1A]),
            holding("eth", "ETH", "Ethereum", 10.0, 35000.0, [0x62, 0x7E, 0xEA]),
            holding("ada", "ADA", "Cardano", 5000.0, 2250.0, [0x00, 0x33, 0xAD]),
            holding("usdt", "USDT", "Tether", 10000.0, 10000.0, [0x26, 0xA1, 0x7B]),
        ]
    }

    fn transactions(&self) -> Vec<WalletTransaction> {
        use TransactionStatus::*;
        use TransactionType::*;
        vec![
            transaction("1", Deposit, "BTC", 0.1, Completed, (2024, 7, 27), "From external wallet"),
            transaction("2", Trade, "ETH", -2.0, Completed, (2024, 7, 26), "Sold ETH for USDT"),
            transaction("3", Withdraw, "USDT", -1000.0, Pending, (2024, 7, 28), "To Binance"),
            transaction("4", Earn, "ADA", 50.0, Completed, (2024, 7, 25), "Staking reward"),
        ]
    }

    fn staking_products(&self) -> Vec<StakingProduct> {
        vec![
            staking("eth-stake-flex", "Ethereum", "ETH", 4.5, None, 0.1, 7500.0, 10000.0),
            staking("usdt-stake-30", "Tether", "USDT", 8.0, Some(30), 100.0, 1_500_000.0, 2_000_000.0),
            staking("ada-stake-90", "Cardano", "ADA", 6.2, Some(90), 500.0, 800_000.0, 1_000_000.0),
            staking("sol-stake-flex", "Solana", "SOL", 7.1, None, 1.0, 4500.0, 5000.0),
        ]
    }

    fn launchpad_projects(&self) -> Vec<LaunchpadProject> {
        vec![
            LaunchpadProject {
                id: "projX".to_string(),
                name: "Project X Token (PXT)".to_string(),
                description: "Next-gen DeFi protocol.".to_string(),
                status: LaunchpadStatus::SubscriptionOpen,
                ends_in: "3 days".to_string(),
            },
            LaunchpadProject {
                id: "projY".to_string(),
                name: "Metaverse Game Coin (MGC)".to_string(),
                description: "Decentralized gaming currency.".to_string(),
                status: LaunchpadStatus::Upcoming,
                ends_in: "10 days".to_string(),
            },
        ]
    }

    fn portfolio(&self) -> Vec<PortfolioAsset> {
        vec![
            portfolio_asset("BTC", "Bitcoin", 50000.75, 2.5),
            portfolio_asset("ETH", "Ethereum", 15000.20, -1.2),
            portfolio_asset("ADA", "Cardano", 2500.00, 5.1),
        ]
    }

    fn trending(&self) -> Vec<TrendingAsset> {
        [("Solana (SOL)", 7.8), ("Dogecoin (DOGE)", 3.2), ("Polygon (MATIC)", -0.5)]
            .into_iter()
            .map(|(name, change)| TrendingAsset {
                name: name.to_string(),
                change,
            })
            .collect()
    }

    fn news(&self) -> Vec<NewsItem> {
        vec![
            NewsItem {
                title: "Market Update: Bitcoin Reaches New High".to_string(),
                source: "CryptoNews".to_string(),
                impact: NewsImpact::High,
                time: "2h ago".to_string(),
            },
            NewsItem {
                title: "Ethereum Merge Nearing Completion".to_string(),
                source: "ETH Foundation".to_string(),
                impact: NewsImpact::Medium,
                time: "5h ago".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unique<T, K: std::hash::Hash + Eq>(items: &[T], key: impl Fn(&T) -> K) -> bool {
        let keys: HashSet<K> = items.iter().map(key).collect();
        keys.len() == items.len()
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = DemoCatalog;
        assert!(unique(&catalog.market_listings(), |l| l.id.clone()));
        assert!(unique(&catalog.market_listings(), |l| l.symbol.clone()));
        assert!(unique(&catalog.holdings(), |h| h.id.clone()));
        assert!(unique(&catalog.transactions(), |t| t.id.clone()));
        assert!(unique(&catalog.staking_products(), |p| p.id.clone()));
        assert!(unique(&catalog.launchpad_projects(), |p| p.id.clone()));
    }

    #[test]
    fn test_btc_and_eth_start_favorited() {
        let favorites: Vec<String> = DemoCatalog
            .market_listings()
            .into_iter()
            .filter(|l| l.is_favorite)
            .map(|l| l.symbol)
            .collect();
        assert_eq!(favorites, vec!["BTC", "ETH"]);
    }

    #[test]
    fn test_seed_dates_parse() {
        let history = DemoCatalog.trade_history();
        assert!(history[0].time.is_some());
        let dates: Vec<String> = DemoCatalog
            .transactions()
            .iter()
            .map(|t| t.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-07-27", "2024-07-26", "2024-07-28", "2024-07-25"]);
    }
}
