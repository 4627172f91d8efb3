//! # Wallet Records
//!
//! Holdings shown on the wallet page and the entries of its transaction log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Balance of one asset with its USD valuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetHolding {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub balance: f64,
    pub value_usd: f64,
    /// Allocation chart colour as RGB
    pub color: [u8; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Deposit,
    Withdraw,
    Trade,
    Earn,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "Deposit",
            TransactionType::Withdraw => "Withdraw",
            TransactionType::Trade => "Trade",
            TransactionType::Earn => "Earn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        }
    }
}

/// Wallet transaction log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub id: String,
    pub tx_type: TransactionType,
    pub asset_symbol: String,
    /// Signed amount: outflows are negative
    pub amount: f64,
    pub status: TransactionStatus,
    pub date: NaiveDate,
    pub details: String,
}
