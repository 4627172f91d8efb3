//! # Earn Page State
//!
//! Staking catalog, the stake dialog, launchpad projects and the FAQ.

use shared::dto::{LaunchpadProject, StakingProduct};
use tracing::{info, warn};

use crate::core::error::{AppError, Result};
use crate::core::service::CatalogService;
use crate::utils::validation::parse_number;

/// Static FAQ entries as `(question, answer)`
pub const FAQ: &[(&str, &str)] = &[
    (
        "What is Staking?",
        "Staking is the process of actively participating in transaction validation (similar \
         to mining) on a proof-of-stake (PoS) blockchain. By staking your coins, you help \
         secure the network and earn rewards.",
    ),
    (
        "Are there any risks?",
        "While staking is generally considered lower risk than trading, potential risks \
         include smart contract vulnerabilities (for DeFi staking) and market volatility \
         affecting the value of staked assets and rewards. Locked staking also means your \
         assets are illiquid for the duration.",
    ),
    (
        "How are APYs calculated?",
        "Annual Percentage Yield (APY) is the real rate of return earned on an investment, \
         taking into account the effect of compounding interest. Staking APYs can fluctuate \
         based on network conditions, total staked amount, and other factors.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EarnTab {
    #[default]
    Staking,
    /// Not available yet; the tab is shown disabled
    Savings,
    Launchpad,
}

impl EarnTab {
    pub fn all() -> &'static [EarnTab] {
        &[EarnTab::Staking, EarnTab::Savings, EarnTab::Launchpad]
    }

    pub fn label(&self) -> &'static str {
        match self {
            EarnTab::Staking => "Staking",
            EarnTab::Savings => "Savings (Soon)",
            EarnTab::Launchpad => "Launchpad",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, EarnTab::Savings)
    }
}

/// Open stake dialog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StakeDialog {
    pub product_id: String,
    pub amount: String,
    pub error: Option<String>,
}

/// A stake that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct StakeRequest {
    pub product_id: String,
    pub asset_symbol: String,
    pub amount: f64,
    pub estimated_daily_reward: f64,
}

/// Earn page state
#[derive(Debug, Clone, PartialEq)]
pub struct EarnState {
    pub products: Vec<StakingProduct>,
    pub launchpad: Vec<LaunchpadProject>,
    pub tab: EarnTab,
    pub stake_dialog: Option<StakeDialog>,
}

impl EarnState {
    pub fn new(catalog: &dyn CatalogService) -> Self {
        Self {
            products: catalog.staking_products(),
            launchpad: catalog.launchpad_projects(),
            tab: EarnTab::default(),
            stake_dialog: None,
        }
    }

    /// Switch tab; disabled tabs are refused
    pub fn select_tab(&mut self, tab: EarnTab) -> bool {
        if !tab.is_enabled() {
            return false;
        }
        self.tab = tab;
        true
    }

    pub fn product(&self, id: &str) -> Option<&StakingProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Product of the open stake dialog
    pub fn dialog_product(&self) -> Option<&StakingProduct> {
        self.product(&self.stake_dialog.as_ref()?.product_id)
    }

    /// Open the stake dialog; unknown ids are ignored
    pub fn open_stake(&mut self, product_id: &str) -> bool {
        if self.product(product_id).is_none() {
            warn!(product_id, "Stake requested for unknown product");
            return false;
        }
        self.stake_dialog = Some(StakeDialog {
            product_id: product_id.to_string(),
            ..StakeDialog::default()
        });
        true
    }

    pub fn set_stake_amount(&mut self, amount: impl Into<String>) {
        if let Some(dialog) = self.stake_dialog.as_mut() {
            dialog.amount = amount.into();
            dialog.error = None;
        }
    }

    pub fn close_stake(&mut self) {
        self.stake_dialog = None;
    }

    /// Daily reward for the amount currently typed, if it parses
    pub fn estimated_daily_reward(&self) -> Option<f64> {
        let dialog = self.stake_dialog.as_ref()?;
        let product = self.product(&dialog.product_id)?;
        let amount = parse_number(&dialog.amount).filter(|a| *a > 0.0)?;
        Some(product.estimated_daily_reward(amount))
    }

    /// Validate the stake, close the dialog and clear it
    pub fn confirm_stake(&mut self) -> Result<StakeRequest> {
        let result = self.check_stake();
        match &result {
            Ok(request) => {
                info!(
                    product_id = %request.product_id,
                    symbol = %request.asset_symbol,
                    amount = request.amount,
                    "Stake confirmed"
                );
                self.stake_dialog = None;
            }
            Err(e) => {
                warn!(error = %e, "Stake refused");
                if let Some(dialog) = self.stake_dialog.as_mut() {
                    dialog.error = Some(e.user_message());
                }
            }
        }
        result
    }

    fn check_stake(&self) -> Result<StakeRequest> {
        let dialog = self
            .stake_dialog
            .as_ref()
            .ok_or_else(|| AppError::State("No stake in progress".to_string()))?;
        let product = self
            .product(&dialog.product_id)
            .ok_or_else(|| AppError::State(format!("Unknown product '{}'", dialog.product_id)))?;

        let amount = parse_number(&dialog.amount)
            .filter(|a| *a > 0.0)
            .ok_or_else(|| AppError::Validation("Amount must be a positive number".to_string()))?;

        if amount < product.min_stake_amount {
            return Err(AppError::Validation(format!(
                "Minimum stake is {} {}",
                product.min_stake_amount, product.asset_symbol
            )));
        }

        Ok(StakeRequest {
            product_id: product.id.clone(),
            asset_symbol: product.asset_symbol.clone(),
            amount,
            estimated_daily_reward: product.estimated_daily_reward(amount),
        })
    }

    /// Join a launchpad project. Only projects with an open subscription accept.
    pub fn participate(&self, project_id: &str) -> Result<&LaunchpadProject> {
        let project = self
            .launchpad
            .iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| AppError::State(format!("Unknown project '{}'", project_id)))?;

        if !project.can_participate() {
            return Err(AppError::Validation(format!(
                "{} is not open for subscription",
                project.name
            )));
        }

        info!(project = %project.name, "Launchpad participation requested");
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::DemoCatalog;

    #[test]
    fn test_catalog_and_labels() {
        let state = EarnState::new(&DemoCatalog);
        let labels: Vec<String> = state.products.iter().map(|p| p.duration_label()).collect();
        assert_eq!(labels, vec!["Flexible", "30 Days", "90 Days", "Flexible"]);
        assert_eq!(state.product("usdt-stake-30").unwrap().pool_fill_percentage(), Some(75.0));
        assert_eq!(FAQ.len(), 3);
    }

    #[test]
    fn test_savings_tab_is_disabled() {
        let mut state = EarnState::new(&DemoCatalog);
        assert!(!state.select_tab(EarnTab::Savings));
        assert_eq!(state.tab, EarnTab::Staking);
        assert!(state.select_tab(EarnTab::Launchpad));
        assert_eq!(state.tab, EarnTab::Launchpad);
    }

    #[test]
    fn test_open_stake_ignores_unknown_product() {
        let mut state = EarnState::new(&DemoCatalog);
        assert!(!state.open_stake("btc-stake"));
        assert!(state.stake_dialog.is_none());
        assert!(state.open_stake("ada-stake-90"));
        assert_eq!(state.dialog_product().unwrap().asset_symbol, "ADA");
    }

    #[test]
    fn test_stake_enforces_minimum() {
        let mut state = EarnState::new(&DemoCatalog);
        state.open_stake("ada-stake-90");
        state.set_stake_amount("499");
        let err = state.confirm_stake().unwrap_err();
        assert_eq!(err.user_message(), "Minimum stake is 500 ADA");
        assert_eq!(
            state.stake_dialog.as_ref().unwrap().error.as_deref(),
            Some("Minimum stake is 500 ADA")
        );

        state.set_stake_amount("abc");
        assert!(state.confirm_stake().is_err());
        state.set_stake_amount("0");
        assert!(state.confirm_stake().is_err());
    }

    #[test]
    fn test_stake_confirmation_closes_dialog() {
        let mut state = EarnState::new(&DemoCatalog);
        state.open_stake("usdt-stake-30");
        state.set_stake_amount("365");
        assert_eq!(state.estimated_daily_reward(), Some(365.0 * 8.0 / 100.0 / 365.0));

        let request = state.confirm_stake().unwrap();
        assert_eq!(request.asset_symbol, "USDT");
        assert_eq!(request.amount, 365.0);
        assert!(state.stake_dialog.is_none());

        // Reopening starts from an empty amount
        state.open_stake("usdt-stake-30");
        assert_eq!(state.stake_dialog.as_ref().unwrap().amount, "");
        assert_eq!(state.estimated_daily_reward(), None);
    }

    #[test]
    fn test_participation_only_when_subscription_open() {
        let state = EarnState::new(&DemoCatalog);
        assert_eq!(state.participate("projX").unwrap().name, "Project X Token (PXT)");
        assert!(matches!(state.participate("projY"), Err(AppError::Validation(_))));
        assert!(matches!(state.participate("projZ"), Err(AppError::State(_))));
    }
}
