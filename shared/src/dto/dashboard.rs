//! # Dashboard Records
//!
//! Portfolio cards, trending movers and the curated news feed.

use serde::{Deserialize, Serialize};

/// Asset card on the dashboard ("Your Assets")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAsset {
    pub symbol: String,
    pub name: String,
    /// Value of the position
    pub current_value: f64,
    /// Currency code of `current_value`; "USD" renders with a `$` prefix
    pub value_currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingAsset {
    pub name: String,
    /// Weekly change in percent
    pub change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsImpact {
    High,
    Medium,
    Low,
}

impl NewsImpact {
    pub fn label(&self) -> &'static str {
        match self {
            NewsImpact::High => "High",
            NewsImpact::Medium => "Medium",
            NewsImpact::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub impact: NewsImpact,
    /// Relative age, e.g. "2h ago"
    pub time: String,
}
