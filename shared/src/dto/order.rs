//! # Order Records
//!
//! Order kinds and sides, the validated order draft handed to a submitter, and the rows of
//! the open-order / trade-history tables.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::TradingPair;

/// Order type offered by the order form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderKind {
    Limit,
    Market,
    StopLimit,
}

impl OrderKind {
    /// All kinds in form order
    pub fn all() -> &'static [OrderKind] {
        &[OrderKind::Limit, OrderKind::Market, OrderKind::StopLimit]
    }

    /// Label for the order type selector
    pub fn label(&self) -> &'static str {
        match self {
            OrderKind::Limit => "Limit",
            OrderKind::Market => "Market",
            OrderKind::StopLimit => "Stop-limit",
        }
    }

    /// Limit and stop-limit orders carry a price; market orders don't
    pub fn requires_price(&self) -> bool {
        !matches!(self, OrderKind::Market)
    }

    pub fn requires_trigger_price(&self) -> bool {
        matches!(self, OrderKind::StopLimit)
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Limit => write!(f, "limit"),
            OrderKind::Market => write!(f, "market"),
            OrderKind::StopLimit => write!(f, "stop-limit"),
        }
    }
}

/// Buy or sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Upper-case label used on buttons and in notifications
    pub fn label(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

/// A validated order draft.
///
/// Produced by the order form only when every required field holds a positive number, so
/// consumers never re-check the values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub kind: OrderKind,
    /// Limit price; `None` for market orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub quantity: f64,
    /// `price * quantity` rounded to 8 decimals (0 for market orders without a price)
    pub total: f64,
    /// Stop trigger; only set for stop-limit orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<f64>,
    /// Maker-only flag; only meaningful for limit orders
    #[serde(default)]
    pub post_only: bool,
    /// Balance percentage last chosen on the slider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_percentage: Option<f64>,
}

/// A draft bound to a pair and side, as handed to an order submitter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub pair: TradingPair,
    pub side: OrderSide,
    pub draft: OrderDraft,
}

impl OrderRequest {
    /// One-line summary, e.g. `BUY 0.5 BTC at $65000` or `SELL 2 ETH at Market`
    pub fn summary(&self) -> String {
        let price = match self.draft.price {
            Some(price) => format!("${}", price),
            None => "Market".to_string(),
        };
        format!(
            "{} {} {} at {}",
            self.side.label(),
            self.draft.quantity,
            self.pair.base,
            price
        )
    }
}

/// Status of a row in the order tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderRowStatus {
    Open,
    Filled,
    Cancelled,
}

impl OrderRowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderRowStatus::Open => "Open",
            OrderRowStatus::Filled => "Filled",
            OrderRowStatus::Cancelled => "Cancelled",
        }
    }
}

/// Row of the open-orders or trade-history table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: String,
    /// Pair symbol, e.g. "BTC/USDT"
    pub symbol: String,
    pub kind: OrderKind,
    pub side: OrderSide,
    pub price: f64,
    pub amount: f64,
    /// Filled share in percent
    pub filled_pct: f64,
    pub total: f64,
    pub status: OrderRowStatus,
    /// Execution time for trade-history rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(side: OrderSide, price: Option<f64>, quantity: f64) -> OrderRequest {
        OrderRequest {
            pair: "BTC/USDT".parse().unwrap(),
            side,
            draft: OrderDraft {
                kind: if price.is_some() { OrderKind::Limit } else { OrderKind::Market },
                price,
                quantity,
                total: 0.0,
                trigger_price: None,
                post_only: false,
                amount_percentage: None,
            },
        }
    }

    #[test]
    fn test_order_kind_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&OrderKind::StopLimit).unwrap(), "\"stop-limit\"");
        let kind: OrderKind = serde_json::from_str("\"market\"").unwrap();
        assert_eq!(kind, OrderKind::Market);
        assert_eq!(OrderKind::StopLimit.to_string(), "stop-limit");
    }

    #[test]
    fn test_price_and_trigger_requirements_by_kind() {
        assert!(OrderKind::Limit.requires_price());
        assert!(!OrderKind::Market.requires_price());
        assert!(OrderKind::StopLimit.requires_price());
        assert!(OrderKind::StopLimit.requires_trigger_price());
        assert!(!OrderKind::Limit.requires_trigger_price());
        assert!(!OrderKind::Market.requires_trigger_price());
    }

    #[test]
    fn test_summary_mentions_price_or_market() {
        assert_eq!(request(OrderSide::Buy, Some(65000.0), 0.5).summary(), "BUY 0.5 BTC at $65000");
        assert_eq!(request(OrderSide::Sell, None, 2.0).summary(), "SELL 2 BTC at Market");
    }
}
