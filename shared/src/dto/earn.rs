//! # Earn Records
//!
//! Staking products and launchpad projects of the earn page.

use serde::{Deserialize, Serialize};

/// A fixed-catalog staking offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingProduct {
    pub id: String,
    pub asset_name: String,
    pub asset_symbol: String,
    /// Annual yield in percent (4.5 = 4.5%)
    pub apy: f64,
    /// Lock duration; `None` means flexible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    pub min_stake_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_staked: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
}

impl StakingProduct {
    /// "30 Days" or "Flexible"
    pub fn duration_label(&self) -> String {
        match self.duration_days {
            Some(days) => format!("{} Days", days),
            None => "Flexible".to_string(),
        }
    }

    /// Share of the pool already filled, in percent.
    ///
    /// `None` unless both the staked amount and a positive capacity are known.
    pub fn pool_fill_percentage(&self) -> Option<f64> {
        match (self.total_staked, self.capacity) {
            (Some(staked), Some(capacity)) if capacity > 0.0 => Some(staked / capacity * 100.0),
            _ => None,
        }
    }

    /// Reward for one day at the current APY
    pub fn estimated_daily_reward(&self, amount: f64) -> f64 {
        amount * self.apy / 100.0 / 365.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchpadStatus {
    SubscriptionOpen,
    Upcoming,
}

impl LaunchpadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LaunchpadStatus::SubscriptionOpen => "Subscription Open",
            LaunchpadStatus::Upcoming => "Upcoming",
        }
    }
}

/// Token launch listed on the launchpad tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchpadProject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: LaunchpadStatus,
    /// Human-readable countdown, e.g. "3 days"
    pub ends_in: String,
}

impl LaunchpadProject {
    pub fn can_participate(&self) -> bool {
        self.status == LaunchpadStatus::SubscriptionOpen
    }
}
