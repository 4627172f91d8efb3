//! # Wallet Page State
//!
//! Holdings, allocation shares, the transaction log and the deposit/withdraw dialogs.
//! Withdrawals are logged and acknowledged only; balances never change.

use shared::dto::{AssetHolding, WalletTransaction};
use tracing::{info, warn};

use crate::core::error::{AppError, Result};
use crate::core::service::CatalogService;
use crate::utils::validation::{parse_number, validate_required};

/// Minimum deposit shown in the deposit dialog, in units of the asset
pub const MIN_DEPOSIT: f64 = 0.001;

/// Example network fee shown in the withdraw dialog, in units of the asset
pub const WITHDRAWAL_FEE: f64 = 0.0005;

/// Placeholder address for depositing `symbol`
pub fn deposit_address(symbol: &str) -> String {
    format!("YOUR_{}_DEPOSIT_ADDRESS", symbol)
}

/// Open wallet dialog
#[derive(Debug, Clone, PartialEq)]
pub enum WalletDialog {
    Deposit { holding_id: String },
    Withdraw(WithdrawDraft),
}

/// Inputs of the withdraw dialog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WithdrawDraft {
    pub holding_id: String,
    pub address: String,
    pub amount: String,
    pub error: Option<String>,
}

/// A withdrawal that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawalRequest {
    pub symbol: String,
    pub address: String,
    pub amount: f64,
}

/// One slice of the allocation chart
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub symbol: String,
    pub name: String,
    pub value_usd: f64,
    /// Share of the total in percent
    pub share: f64,
    pub color: [u8; 3],
}

/// Wallet page state
#[derive(Debug, Clone, PartialEq)]
pub struct WalletPageState {
    pub holdings: Vec<AssetHolding>,
    pub transactions: Vec<WalletTransaction>,
    pub dialog: Option<WalletDialog>,
}

impl WalletPageState {
    pub fn new(catalog: &dyn CatalogService) -> Self {
        Self {
            holdings: catalog.holdings(),
            transactions: catalog.transactions(),
            dialog: None,
        }
    }

    /// Sum of every holding's USD value
    pub fn total_value(&self) -> f64 {
        self.holdings.iter().map(|h| h.value_usd).sum()
    }

    /// Per-holding share of the total (all zero when the total is zero)
    pub fn allocations(&self) -> Vec<Allocation> {
        let total = self.total_value();
        self.holdings
            .iter()
            .map(|h| Allocation {
                symbol: h.symbol.clone(),
                name: h.name.clone(),
                value_usd: h.value_usd,
                share: if total > 0.0 { h.value_usd / total * 100.0 } else { 0.0 },
                color: h.color,
            })
            .collect()
    }

    pub fn holding(&self, id: &str) -> Option<&AssetHolding> {
        self.holdings.iter().find(|h| h.id == id)
    }

    /// Holding the open dialog refers to
    pub fn dialog_holding(&self) -> Option<&AssetHolding> {
        match self.dialog.as_ref()? {
            WalletDialog::Deposit { holding_id } => self.holding(holding_id),
            WalletDialog::Withdraw(draft) => self.holding(&draft.holding_id),
        }
    }

    /// Open the deposit dialog; unknown ids are ignored
    pub fn open_deposit(&mut self, holding_id: &str) -> bool {
        if self.holding(holding_id).is_none() {
            return false;
        }
        self.dialog = Some(WalletDialog::Deposit {
            holding_id: holding_id.to_string(),
        });
        true
    }

    /// Open the withdraw dialog with empty inputs; unknown ids are ignored
    pub fn open_withdraw(&mut self, holding_id: &str) -> bool {
        if self.holding(holding_id).is_none() {
            return false;
        }
        self.dialog = Some(WalletDialog::Withdraw(WithdrawDraft {
            holding_id: holding_id.to_string(),
            ..WithdrawDraft::default()
        }));
        true
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Edit the withdraw inputs. No-op unless the withdraw dialog is open.
    pub fn update_withdraw(&mut self, address: Option<String>, amount: Option<String>) {
        if let Some(WalletDialog::Withdraw(draft)) = self.dialog.as_mut() {
            if let Some(address) = address {
                draft.address = address;
            }
            if let Some(amount) = amount {
                draft.amount = amount;
            }
        }
    }

    /// Validate the withdraw dialog, close it and clear its inputs.
    ///
    /// On a validation failure the message is also kept on the dialog.
    pub fn submit_withdrawal(&mut self) -> Result<WithdrawalRequest> {
        let result = self.check_withdrawal();
        match &result {
            Ok(request) => {
                info!(
                    symbol = %request.symbol,
                    amount = request.amount,
                    address = %request.address,
                    "Withdrawal submitted"
                );
                self.dialog = None;
            }
            Err(e) => {
                warn!(error = %e, "Withdrawal refused");
                if let Some(WalletDialog::Withdraw(draft)) = self.dialog.as_mut() {
                    draft.error = Some(e.user_message());
                }
            }
        }
        result
    }

    fn check_withdrawal(&self) -> Result<WithdrawalRequest> {
        let Some(WalletDialog::Withdraw(draft)) = self.dialog.as_ref() else {
            return Err(AppError::State("No withdrawal in progress".to_string()));
        };
        let holding = self
            .holding(&draft.holding_id)
            .ok_or_else(|| AppError::State(format!("Unknown holding '{}'", draft.holding_id)))?;

        if !validate_required(&draft.address, "Address").is_valid
            || !validate_required(&draft.amount, "Amount").is_valid
        {
            return Err(AppError::Validation("Please fill all fields".to_string()));
        }

        let amount = parse_number(&draft.amount)
            .filter(|a| *a > 0.0)
            .ok_or_else(|| AppError::Validation("Amount must be a positive number".to_string()))?;

        if amount > holding.balance {
            return Err(AppError::Validation(format!(
                "Amount exceeds available balance of {} {}",
                holding.balance, holding.symbol
            )));
        }

        Ok(WithdrawalRequest {
            symbol: holding.symbol.clone(),
            address: draft.address.trim().to_string(),
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::DemoCatalog;

    fn withdraw_state(address: &str, amount: &str) -> WalletPageState {
        let mut state = WalletPageState::new(&DemoCatalog);
        assert!(state.open_withdraw("btc"));
        state.update_withdraw(Some(address.to_string()), Some(amount.to_string()));
        state
    }

    #[test]
    fn test_total_and_allocation() {
        let state = WalletPageState::new(&DemoCatalog);
        assert_eq!(state.total_value(), 80_750.0);

        let allocations = state.allocations();
        let shares: f64 = allocations.iter().map(|a| a.share).sum();
        assert!((shares - 100.0).abs() < 1e-9);
        let eth = allocations.iter().find(|a| a.symbol == "ETH").unwrap();
        assert!((eth.share - 35_000.0 / 80_750.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_allocation_with_zero_total() {
        let mut state = WalletPageState::new(&DemoCatalog);
        for holding in &mut state.holdings {
            holding.value_usd = 0.0;
        }
        assert!(state.allocations().iter().all(|a| a.share == 0.0));
    }

    #[test]
    fn test_deposit_dialog() {
        let mut state = WalletPageState::new(&DemoCatalog);
        assert!(!state.open_deposit("doge"));
        assert!(state.dialog.is_none());

        assert!(state.open_deposit("eth"));
        assert_eq!(state.dialog_holding().unwrap().symbol, "ETH");
        assert_eq!(deposit_address("ETH"), "YOUR_ETH_DEPOSIT_ADDRESS");

        state.close_dialog();
        assert!(state.dialog.is_none());
    }

    #[test]
    fn test_withdrawal_requires_both_fields() {
        let mut state = withdraw_state("", "0.1");
        let err = state.submit_withdrawal().unwrap_err();
        assert_eq!(err.user_message(), "Please fill all fields");
        match &state.dialog {
            Some(WalletDialog::Withdraw(draft)) => {
                assert_eq!(draft.error.as_deref(), Some("Please fill all fields"))
            }
            other => panic!("withdraw dialog should stay open, got {:?}", other),
        }

        let mut state = withdraw_state("bc1qxyz", "  ");
        assert!(state.submit_withdrawal().is_err());
    }

    #[test]
    fn test_withdrawal_amount_rules() {
        assert!(withdraw_state("bc1qxyz", "abc").submit_withdrawal().is_err());
        assert!(withdraw_state("bc1qxyz", "-1").submit_withdrawal().is_err());
        // BTC balance is 0.5
        assert!(withdraw_state("bc1qxyz", "0.6").submit_withdrawal().is_err());
    }

    #[test]
    fn test_successful_withdrawal_closes_dialog() {
        let mut state = withdraw_state("bc1qxyz", "0.5");
        let request = state.submit_withdrawal().unwrap();
        assert_eq!(
            request,
            WithdrawalRequest {
                symbol: "BTC".to_string(),
                address: "bc1qxyz".to_string(),
                amount: 0.5,
            }
        );
        assert!(state.dialog.is_none());
        assert_eq!(state.holding("btc").unwrap().balance, 0.5);

        // Reopening starts from empty inputs
        state.open_withdraw("btc");
        match &state.dialog {
            Some(WalletDialog::Withdraw(draft)) => {
                assert!(draft.address.is_empty() && draft.amount.is_empty())
            }
            other => panic!("expected withdraw dialog, got {:?}", other),
        }
    }

    #[test]
    fn test_withdrawal_without_dialog_is_state_error() {
        let mut state = WalletPageState::new(&DemoCatalog);
        assert!(matches!(state.submit_withdrawal(), Err(AppError::State(_))));
    }
}
