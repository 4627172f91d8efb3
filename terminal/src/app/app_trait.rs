//! # App Trait
//!
//! The action surface screen renderers call into. Screens take `&mut impl AppLike` so they
//! can be driven by [`App`](crate::app::App) or by a test double.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::OrderRequest;

use crate::app::handlers::trading::OrderFormEdit;
use crate::app::AppState;
use crate::pages::dashboard::QuickAction;
use crate::pages::earn::EarnTab;
use crate::pages::markets::{MarketFilter, MarketSort, MarketTab};
use crate::pages::trading::HistoryTab;
use crate::trading::market_data::Timeframe;

/// Trait for application-like types that screen renderers can use.
pub trait AppLike {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    // Navigation
    fn navigate(&mut self, path: &str);
    fn handle_quick_action(&mut self, action: QuickAction);

    // Markets
    fn handle_market_search(&mut self, search: String);
    fn handle_market_filter(&mut self, filter: MarketFilter);
    fn handle_market_sort(&mut self, sort: MarketSort);
    fn handle_market_tab(&mut self, tab: MarketTab);
    fn handle_toggle_favorite(&mut self, id: &str);

    // Trading
    fn handle_order_form_edit(&mut self, edit: OrderFormEdit);
    fn handle_order_submit(&mut self);
    fn pending_confirmation(&self) -> Option<OrderRequest>;
    fn handle_order_confirm(&mut self);
    fn handle_order_cancel(&mut self);
    fn handle_timeframe_change(&mut self, timeframe: Timeframe);
    fn handle_history_tab_change(&mut self, tab: HistoryTab);

    // Wallet
    fn handle_deposit_click(&mut self, holding_id: &str);
    fn handle_withdraw_click(&mut self, holding_id: &str);
    fn handle_withdraw_edit(&mut self, address: Option<String>, amount: Option<String>);
    fn handle_withdraw_submit(&mut self);
    fn handle_wallet_dialog_close(&mut self);
    fn handle_address_copied(&mut self, address: &str);

    // Earn
    fn handle_earn_tab(&mut self, tab: EarnTab);
    fn handle_stake_click(&mut self, product_id: &str);
    fn handle_stake_amount_change(&mut self, amount: String);
    fn handle_stake_confirm(&mut self);
    fn handle_stake_close(&mut self);
    fn handle_participate_click(&mut self, project_id: &str);
}
