//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, the async order task and
//! application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  App                                                        │
//! │  - on_tick()          drains AppEvents every frame          │
//! │  - handle_*()         user actions, delegate to handlers    │
//! │  - state              Arc<RwLock<AppState>>                 │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Tokio runtime (TOKIO_RT)                       │
//! │  tasks::orders::submit_order                                │
//! │  - awaits the OrderSubmitter (the ConfirmationController)   │
//! │  - sends AppEvent::OrderSubmitted when it settles           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Order Flow
//!
//! 1. [`App::handle_order_submit`] validates the form and spawns the submission.
//! 2. The controller holds the request; the UI shows it via [`App::pending_confirmation`].
//! 3. [`App::handle_order_confirm`] or [`App::handle_order_cancel`] resolves it.
//! 4. The task reports back and [`App::on_tick`] applies the result to the form.
//!
//! Locks are held for the duration of one handler and never across an await.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use ascend_terminal::app::App;
//! use ascend_terminal::core::TerminalConfig;
//!
//! let mut app = App::new(TerminalConfig::default());
//!
//! // In the egui update loop:
//! app.on_tick();
//! let state = app.state.read().clone();
//! // render from `state`, route input to `app.handle_*`
//! ```

mod app_trait;
mod event_handler;
mod events;
mod handlers;
pub mod routes;
mod state;
mod tasks;

pub use app_trait::AppLike;
pub use events::AppEvent;
pub use handlers::trading::OrderFormEdit;
pub use routes::{NavItem, Route, NAV_ITEMS};
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::dto::OrderRequest;
use std::sync::Arc;

use crate::core::config::TerminalConfig;
use crate::core::service::{CatalogService, OrderSubmitter};
use crate::pages::dashboard::QuickAction;
use crate::pages::earn::EarnTab;
use crate::pages::markets::{MarketFilter, MarketSort, MarketTab};
use crate::pages::trading::HistoryTab;
use crate::services::catalog::DemoCatalog;
use crate::trading::confirmation::ConfirmationController;
use crate::trading::market_data::Timeframe;

/// Main application orchestrator that coordinates UI rendering, async tasks, and state management.
///
/// # Thread Safety
///
/// - **Main Thread**: All UI operations run on the main thread (egui requirement)
/// - **Async Tasks**: The order submission runs on the shared Tokio runtime
/// - **State Access**: `Arc<RwLock<AppState>>` (multiple readers, exclusive writers)
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for minimal duration to prevent UI freezing.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    ///
    /// Polled in `on_tick()` using `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender for async task results (internal use).
    event_tx: Sender<AppEvent>,

    /// Owner of the order awaiting confirmation
    confirmation: Arc<ConfirmationController>,

    /// Where validated orders are sent; the confirmation controller by default
    order_submitter: Arc<dyn OrderSubmitter>,
}

impl App {
    /// Create an application seeded from the demo catalog.
    pub fn new(config: TerminalConfig) -> Self {
        Self::with_catalog(config, &DemoCatalog)
    }

    /// Create an application seeded from `catalog`.
    pub fn with_catalog(config: TerminalConfig, catalog: &dyn CatalogService) -> Self {
        let state = AppState::new(&config, catalog);
        let (event_tx, event_rx) = unbounded();

        let confirmation = Arc::new(ConfirmationController::new());
        let order_submitter: Arc<dyn OrderSubmitter> = confirmation.clone();

        tracing::info!(
            route = %state.route,
            pair = %state.trading.pair,
            "App state initialized"
        );

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            confirmation,
            order_submitter,
        }
    }

    /// Called every frame to process async events.
    ///
    /// Non-blocking: drains whatever is in the channel and returns.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            events_processed += 1;
        }

        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: Processed events from event channel");
        }
    }

    /// Handle async event results
    ///
    /// Delegates to the event_handler module for processing.
    pub fn handle_event(&mut self, event: AppEvent) {
        event_handler::AppEventHandler::handle_event_impl(self, event);
    }

    /// Sender for tasks that report back to this app
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }

    // ========== Navigation ==========

    pub fn navigate(&mut self, path: &str) {
        handlers::navigation::navigate(self.state.clone(), path);
    }

    pub fn handle_quick_action(&mut self, action: QuickAction) {
        handlers::navigation::handle_quick_action(self.state.clone(), action);
    }

    // ========== Markets ==========

    pub fn handle_market_search(&mut self, search: String) {
        handlers::markets::handle_search_change(self.state.clone(), search);
    }

    pub fn handle_market_filter(&mut self, filter: MarketFilter) {
        handlers::markets::handle_filter_change(self.state.clone(), filter);
    }

    pub fn handle_market_sort(&mut self, sort: MarketSort) {
        handlers::markets::handle_sort_change(self.state.clone(), sort);
    }

    pub fn handle_market_tab(&mut self, tab: MarketTab) {
        handlers::markets::handle_tab_change(self.state.clone(), tab);
    }

    pub fn handle_toggle_favorite(&mut self, id: &str) {
        handlers::markets::handle_toggle_favorite(self.state.clone(), id);
    }

    // ========== Trading ==========

    pub fn handle_order_form_edit(&mut self, edit: OrderFormEdit) {
        handlers::trading::handle_order_form_edit(self.state.clone(), edit);
    }

    /// Validate the order form and start the two-phase submission
    pub fn handle_order_submit(&mut self) {
        handlers::trading::handle_order_submit(
            self.state.clone(),
            self.order_submitter.clone(),
            self.event_tx.clone(),
        );
    }

    /// Order shown in the confirmation dialog, if one is waiting
    pub fn pending_confirmation(&self) -> Option<OrderRequest> {
        self.confirmation.pending_request()
    }

    pub fn handle_order_confirm(&mut self) {
        handlers::trading::handle_order_confirm(self.state.clone(), &self.confirmation);
    }

    pub fn handle_order_cancel(&mut self) {
        handlers::trading::handle_order_cancel(&self.confirmation);
    }

    pub fn handle_timeframe_change(&mut self, timeframe: Timeframe) {
        handlers::trading::handle_timeframe_change(self.state.clone(), timeframe);
    }

    pub fn handle_history_tab_change(&mut self, tab: HistoryTab) {
        handlers::trading::handle_history_tab_change(self.state.clone(), tab);
    }

    // ========== Wallet ==========

    pub fn handle_deposit_click(&mut self, holding_id: &str) {
        handlers::wallet::handle_deposit_click(self.state.clone(), holding_id);
    }

    pub fn handle_withdraw_click(&mut self, holding_id: &str) {
        handlers::wallet::handle_withdraw_click(self.state.clone(), holding_id);
    }

    pub fn handle_withdraw_edit(&mut self, address: Option<String>, amount: Option<String>) {
        handlers::wallet::handle_withdraw_edit(self.state.clone(), address, amount);
    }

    pub fn handle_withdraw_submit(&mut self) {
        handlers::wallet::handle_withdraw_submit(self.state.clone());
    }

    pub fn handle_wallet_dialog_close(&mut self) {
        handlers::wallet::handle_dialog_close(self.state.clone());
    }

    pub fn handle_address_copied(&mut self, address: &str) {
        handlers::wallet::handle_address_copied(self.state.clone(), address);
    }

    // ========== Earn ==========

    pub fn handle_earn_tab(&mut self, tab: EarnTab) {
        handlers::earn::handle_tab_change(self.state.clone(), tab);
    }

    pub fn handle_stake_click(&mut self, product_id: &str) {
        handlers::earn::handle_stake_click(self.state.clone(), product_id);
    }

    pub fn handle_stake_amount_change(&mut self, amount: String) {
        handlers::earn::handle_stake_amount_change(self.state.clone(), amount);
    }

    pub fn handle_stake_confirm(&mut self) {
        handlers::earn::handle_stake_confirm(self.state.clone());
    }

    pub fn handle_stake_close(&mut self) {
        handlers::earn::handle_stake_close(self.state.clone());
    }

    pub fn handle_participate_click(&mut self, project_id: &str) {
        handlers::earn::handle_participate_click(self.state.clone(), project_id);
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn navigate(&mut self, path: &str) {
        self.navigate(path);
    }

    fn handle_quick_action(&mut self, action: QuickAction) {
        self.handle_quick_action(action);
    }

    fn handle_market_search(&mut self, search: String) {
        self.handle_market_search(search);
    }

    fn handle_market_filter(&mut self, filter: MarketFilter) {
        self.handle_market_filter(filter);
    }

    fn handle_market_sort(&mut self, sort: MarketSort) {
        self.handle_market_sort(sort);
    }

    fn handle_market_tab(&mut self, tab: MarketTab) {
        self.handle_market_tab(tab);
    }

    fn handle_toggle_favorite(&mut self, id: &str) {
        self.handle_toggle_favorite(id);
    }

    fn handle_order_form_edit(&mut self, edit: OrderFormEdit) {
        self.handle_order_form_edit(edit);
    }

    fn handle_order_submit(&mut self) {
        self.handle_order_submit();
    }

    fn pending_confirmation(&self) -> Option<OrderRequest> {
        self.pending_confirmation()
    }

    fn handle_order_confirm(&mut self) {
        self.handle_order_confirm();
    }

    fn handle_order_cancel(&mut self) {
        self.handle_order_cancel();
    }

    fn handle_timeframe_change(&mut self, timeframe: Timeframe) {
        self.handle_timeframe_change(timeframe);
    }

    fn handle_history_tab_change(&mut self, tab: HistoryTab) {
        self.handle_history_tab_change(tab);
    }

    fn handle_deposit_click(&mut self, holding_id: &str) {
        self.handle_deposit_click(holding_id);
    }

    fn handle_withdraw_click(&mut self, holding_id: &str) {
        self.handle_withdraw_click(holding_id);
    }

    fn handle_withdraw_edit(&mut self, address: Option<String>, amount: Option<String>) {
        self.handle_withdraw_edit(address, amount);
    }

    fn handle_withdraw_submit(&mut self) {
        self.handle_withdraw_submit();
    }

    fn handle_wallet_dialog_close(&mut self) {
        self.handle_wallet_dialog_close();
    }

    fn handle_address_copied(&mut self, address: &str) {
        self.handle_address_copied(address);
    }

    fn handle_earn_tab(&mut self, tab: EarnTab) {
        self.handle_earn_tab(tab);
    }

    fn handle_stake_click(&mut self, product_id: &str) {
        self.handle_stake_click(product_id);
    }

    fn handle_stake_amount_change(&mut self, amount: String) {
        self.handle_stake_amount_change(amount);
    }

    fn handle_stake_confirm(&mut self) {
        self.handle_stake_confirm();
    }

    fn handle_stake_close(&mut self) {
        self.handle_stake_close();
    }

    fn handle_participate_click(&mut self, project_id: &str) {
        self.handle_participate_click(project_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::OrderError;
    use shared::dto::{OrderDraft, OrderKind, OrderSide};
    use std::time::Duration;

    fn new_app() -> App {
        App::new(TerminalConfig::default())
    }

    fn fill_limit_order(app: &mut App, price: &str, quantity: &str) {
        app.handle_order_form_edit(OrderFormEdit::Price(price.to_string()));
        app.handle_order_form_edit(OrderFormEdit::Quantity(quantity.to_string()));
    }

    async fn wait_for_pending(app: &App) -> OrderRequest {
        for _ in 0..200 {
            if let Some(request) = app.pending_confirmation() {
                return request;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("order never reached the confirmation step");
    }

    fn sample_request() -> OrderRequest {
        OrderRequest {
            pair: shared::utils::TradingPair::new("BTC", "USDT"),
            side: OrderSide::Sell,
            draft: OrderDraft {
                kind: OrderKind::Market,
                price: None,
                quantity: 0.25,
                total: 0.0,
                trigger_price: None,
                post_only: false,
                amount_percentage: Some(50.0),
            },
        }
    }

    // ========== Navigation Tests ==========

    #[test]
    fn test_navigation_and_not_found() {
        let mut app = new_app();
        assert_eq!(app.state.read().route, Route::Dashboard);

        app.navigate("/markets");
        assert_eq!(app.state.read().route, Route::Markets);
        assert_eq!(app.state.read().current_path, "/markets");

        app.navigate("/trade");
        assert_eq!(app.state.read().route, Route::NotFound("/trade".to_string()));

        app.navigate("/");
        assert_eq!(app.state.read().route, Route::Dashboard);
    }

    #[test]
    fn test_quick_action_navigates() {
        let mut app = new_app();
        app.handle_quick_action(QuickAction::ExploreStaking);
        assert_eq!(app.state.read().route, Route::Earn);
        app.handle_quick_action(QuickAction::Deposit);
        assert_eq!(app.state.read().current_path, "/wallet");
    }

    // ========== Page Handler Tests ==========

    #[test]
    fn test_market_handlers() {
        let mut app = new_app();
        app.handle_market_search("bit".to_string());
        app.handle_market_filter(MarketFilter::Gainers);
        app.handle_toggle_favorite("bitcoin");
        app.handle_toggle_favorite("unknown");

        let state = app.state.read();
        let rows = state.markets.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].symbol, "BTC");
        assert!(!rows[0].is_favorite);
    }

    #[test]
    fn test_withdraw_success_notifies() {
        let mut app = new_app();
        app.handle_withdraw_click("btc");
        app.handle_withdraw_edit(Some("bc1qxyz".to_string()), Some("0.1".to_string()));
        app.handle_withdraw_submit();

        let state = app.state.read();
        assert!(state.wallet.dialog.is_none());
        let last = state.pending_notifications.last().unwrap();
        assert_eq!(last.level, NotificationLevel::Info);
        assert_eq!(last.title, "Withdrawal Submitted");
    }

    #[test]
    fn test_withdraw_failure_keeps_dialog() {
        let mut app = new_app();
        app.handle_withdraw_click("btc");
        app.handle_withdraw_submit();

        let state = app.state.read();
        assert!(state.wallet.dialog.is_some());
        assert!(state.pending_notifications.is_empty());
    }

    #[test]
    fn test_stake_and_participate_notify() {
        let mut app = new_app();
        app.handle_stake_click("ada-stake-90");
        app.handle_stake_amount_change("600".to_string());
        app.handle_stake_confirm();
        app.handle_participate_click("projY");

        let state = app.state.read();
        assert!(state.earn.stake_dialog.is_none());
        let levels: Vec<NotificationLevel> =
            state.pending_notifications.iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![NotificationLevel::Success, NotificationLevel::Warning]);
    }

    // ========== Order Workflow Tests ==========

    #[test]
    fn test_invalid_submit_keeps_errors_and_spawns_nothing() {
        let mut app = new_app();
        app.handle_order_submit();

        let state = app.state.read();
        assert!(!state.trading.form.is_submitting());
        assert_eq!(state.trading.form.errors().price.as_deref(), Some("Price is required"));
        assert!(app.pending_confirmation().is_none());
    }

    #[tokio::test]
    async fn test_confirmed_order_clears_form() {
        let mut app = new_app();
        fill_limit_order(&mut app, "100", "2");
        app.handle_order_submit();
        assert!(app.state.read().trading.form.is_submitting());

        let pending = wait_for_pending(&app).await;
        assert_eq!(pending.draft.total, 200.0);
        assert_eq!(pending.side, OrderSide::Buy);

        app.handle_order_confirm();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        let state = app.state.read();
        assert!(!state.trading.form.is_submitting());
        assert_eq!(state.trading.form.price(), "");
        assert_eq!(state.trading.form.quantity(), "");
        let titles: Vec<&str> = state.pending_notifications.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Order Placed!", "Order Placed"]);
        assert_eq!(
            state.pending_notifications[1].message,
            "BUY order for 2 BTC submitted successfully."
        );
    }

    #[tokio::test]
    async fn test_cancelled_order_keeps_form() {
        let mut app = new_app();
        fill_limit_order(&mut app, "100", "2");
        app.handle_order_submit();
        wait_for_pending(&app).await;

        app.handle_order_cancel();
        let event = app.event_rx.recv().await.unwrap();
        match &event {
            AppEvent::OrderSubmitted { result, .. } => {
                assert_eq!(result, &Err(OrderError::Cancelled))
            }
        }
        app.handle_event(event);

        let state = app.state.read();
        assert!(!state.trading.form.is_submitting());
        assert_eq!(state.trading.form.price(), "100");
        assert_eq!(state.trading.form.quantity(), "2");
        let last = state.pending_notifications.last().unwrap();
        assert_eq!(last.title, "Order Failed");
        assert_eq!(last.level, NotificationLevel::Error);
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_ignored() {
        let mut app = new_app();
        fill_limit_order(&mut app, "100", "2");
        app.handle_order_submit();
        let first = wait_for_pending(&app).await;

        app.handle_order_submit();
        assert_eq!(app.pending_confirmation(), Some(first));

        app.handle_order_cancel();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);
        assert!(app.event_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_form_is_frozen_while_awaiting_confirmation() {
        let mut app = new_app();
        fill_limit_order(&mut app, "100", "2");
        app.handle_order_submit();
        let pending = wait_for_pending(&app).await;

        fill_limit_order(&mut app, "999", "7");
        app.handle_order_form_edit(OrderFormEdit::Percentage(100.0));
        app.handle_order_form_edit(OrderFormEdit::Side(OrderSide::Sell));
        {
            let state = app.state.read();
            assert_eq!(state.trading.form.price(), "100");
            assert_eq!(state.trading.form.quantity(), "2");
            assert_eq!(state.trading.form.total(), pending.draft.total);
            assert_eq!(state.trading.side, OrderSide::Sell);
        }

        app.handle_order_cancel();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);
        fill_limit_order(&mut app, "150", "2");
        assert_eq!(app.state.read().trading.form.total(), 300.0);
    }

    #[test]
    fn test_confirm_and_cancel_without_pending_are_noops() {
        let mut app = new_app();
        app.handle_order_confirm();
        app.handle_order_cancel();
        assert!(app.state.read().pending_notifications.is_empty());
    }

    #[test]
    fn test_on_tick_drains_events() {
        let mut app = new_app();
        app.state.write().trading.form.begin_submission();
        app.event_tx()
            .try_send(AppEvent::OrderSubmitted {
                request: sample_request(),
                result: Err(OrderError::Rejected("exchange offline".to_string())),
            })
            .unwrap();

        app.on_tick();

        let state = app.state.read();
        assert!(!state.trading.form.is_submitting());
        assert_eq!(state.pending_notifications.len(), 1);
        assert_eq!(
            state.pending_notifications[0].message,
            "Could not place your order. Please try again."
        );
    }
}
