//! # Trading Page State
//!
//! Pair, buy/sell tab, the shared order form, balances, order tables and chart data.
//! Both side tabs edit the same draft; switching tabs only changes which side a submit
//! targets and which balance the slider reads.

use shared::dto::{OrderRow, OrderRowStatus, OrderSide};
use shared::utils::TradingPair;

use crate::core::config::TerminalConfig;
use crate::core::service::CatalogService;
use crate::trading::market_data::{ChartData, DepthBook};
use crate::trading::order_form::OrderForm;

/// Candles kept on the price chart
pub const CHART_CANDLES: usize = 100;

/// Levels per side in the depth chart
pub const DEPTH_LEVELS: usize = 25;

/// Tabs of the order table under the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryTab {
    #[default]
    OpenOrders,
    OrderHistory,
    TradeHistory,
}

/// Trading page state
#[derive(Debug, Clone, PartialEq)]
pub struct TradingState {
    pub pair: TradingPair,
    pub side: OrderSide,
    pub form: OrderForm,
    pub available_quote: f64,
    pub available_base: f64,
    pub open_orders: Vec<OrderRow>,
    pub trade_history: Vec<OrderRow>,
    pub history_tab: HistoryTab,
    pub chart: ChartData,
    pub depth: DepthBook,
}

impl TradingState {
    /// Page state for the configured pair. An unparseable symbol falls back to `BTC/USDT`.
    pub fn new(catalog: &dyn CatalogService, config: &TerminalConfig) -> Self {
        let pair = config
            .trading_pair()
            .unwrap_or_else(|_| TradingPair::new("BTC", "USDT"));

        // Seed the charts from the listed price of the base asset
        let reference_price = catalog
            .market_listings()
            .into_iter()
            .find(|l| l.symbol == pair.base)
            .map(|l| l.price)
            .unwrap_or(100.0);

        let mut chart = ChartData::new(pair.to_string(), reference_price);
        chart.generate_demo_data(CHART_CANDLES);

        Self {
            depth: DepthBook::generate(reference_price, DEPTH_LEVELS),
            pair,
            side: OrderSide::Buy,
            form: OrderForm::new(),
            available_quote: config.available_quote_balance,
            available_base: config.available_base_balance,
            open_orders: catalog.open_orders(),
            trade_history: catalog.trade_history(),
            history_tab: HistoryTab::default(),
            chart,
        }
    }

    /// Count shown on the "Open Orders" tab
    pub fn open_order_count(&self) -> usize {
        self.open_orders
            .iter()
            .filter(|o| o.status == OrderRowStatus::Open)
            .count()
    }

    /// Balance the slider works against for the active side, with its currency
    pub fn available_for_side(&self) -> (f64, &str) {
        match self.side {
            OrderSide::Buy => (self.available_quote, self.pair.quote.as_str()),
            OrderSide::Sell => (self.available_base, self.pair.base.as_str()),
        }
    }

    pub fn apply_percentage(&mut self, percentage: f64) {
        self.form
            .apply_percentage(percentage, self.side, self.available_quote, self.available_base);
    }
}
