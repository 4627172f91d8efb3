//! # Dashboard Page State
//!
//! Portfolio cards, market status, trending movers, news, recommendations and the quick
//! actions that jump to other pages.

use shared::dto::{NewsItem, PortfolioAsset, TrendingAsset};

use crate::app::routes::Route;
use crate::core::service::CatalogService;

/// Greeting at the top of the dashboard
pub const WELCOME_TITLE: &str = "Welcome Back, User!";

/// Buttons that navigate away from the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Deposit,
    Withdraw,
    StartTrading,
    /// "Trade" on a portfolio card
    TradeAsset,
    ExploreStaking,
}

impl QuickAction {
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::Deposit => "Deposit Funds",
            QuickAction::Withdraw => "Withdraw Funds",
            QuickAction::StartTrading => "Start Trading",
            QuickAction::TradeAsset => "Trade",
            QuickAction::ExploreStaking => "Explore Staking",
        }
    }

    /// Page the action opens
    pub fn route(&self) -> Route {
        match self {
            QuickAction::Deposit | QuickAction::Withdraw => Route::Wallet,
            QuickAction::StartTrading | QuickAction::TradeAsset => Route::Trading,
            QuickAction::ExploreStaking => Route::Earn,
        }
    }
}

/// A recommendation card
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub action_label: &'static str,
    /// Navigation target, when the action leads somewhere
    pub action: Option<QuickAction>,
}

pub const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        title: "New Staking Opportunity",
        description: "Earn up to 12% APY on stablecoins.",
        action_label: "Explore Staking",
        action: Some(QuickAction::ExploreStaking),
    },
    Recommendation {
        title: "Hot Airdrop Alert",
        description: "Participate in the latest token airdrop from Project X.",
        action_label: "Learn More",
        action: None,
    },
];

/// Global market cap widget
#[derive(Debug, Clone, PartialEq)]
pub struct MarketStatus {
    /// Headline figure, already scaled to `suffix`
    pub value: f64,
    pub suffix: &'static str,
    pub change_percentage: f64,
}

/// Dashboard page state
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub portfolio: Vec<PortfolioAsset>,
    pub trending: Vec<TrendingAsset>,
    pub news: Vec<NewsItem>,
    pub market_status: MarketStatus,
    /// Caption under the total value, e.g. "+3.5% in last 24h"
    pub portfolio_change_label: String,
}

impl DashboardState {
    pub fn new(catalog: &dyn CatalogService) -> Self {
        let stats = catalog.market_stats();
        Self {
            portfolio: catalog.portfolio(),
            trending: catalog.trending(),
            news: catalog.news(),
            market_status: MarketStatus {
                value: shared::utils::round_to(stats.global_market_cap / 1e12, 2),
                suffix: " Trillion USD",
                change_percentage: -1.8,
            },
            portfolio_change_label: "+3.5% in last 24h".to_string(),
        }
    }

    /// Sum of the portfolio cards
    pub fn total_value(&self) -> f64 {
        self.portfolio.iter().map(|a| a.current_value).sum()
    }
}
