//! # Order Form
//!
//! Editable order draft behind the trading page's buy/sell panel.
//!
//! ## Invariants
//!
//! - `total` is `round8(price * quantity)` whenever both fields hold positive numbers, and
//!   exactly `0` otherwise. Every setter recomputes it.
//! - Field problems are reported through [`FieldErrors`] and never block editing.
//! - Validation first runs on submit. After a failed submit every edit re-validates, so
//!   messages disappear as soon as the field is fixed.
//! - While a submission is outstanding every setter is a no-op, so the draft matches the
//!   request shown in the confirmation dialog.
//!
//! ## Balance Slider
//!
//! [`OrderForm::apply_percentage`] derives the quantity from a share of the available
//! balance: quote balance divided by price when buying, base balance when selling.

use serde::{Deserialize, Serialize};
use shared::dto::{OrderDraft, OrderKind, OrderRequest, OrderSide};
use shared::utils::{round8, TradingPair};
use tracing::{debug, warn};

use crate::utils::validation::{parse_number, parse_positive, validate_positive};

/// `round8(price * quantity)` when both are positive, otherwise `0`
///
/// ```rust
/// use ascend_terminal::trading::order_form::compute_total;
///
/// assert_eq!(compute_total(Some(100.0), Some(2.0)), 200.0);
/// assert_eq!(compute_total(Some(0.0), Some(2.0)), 0.0);
/// assert_eq!(compute_total(None, Some(2.0)), 0.0);
/// ```
pub fn compute_total(price: Option<f64>, quantity: Option<f64>) -> f64 {
    match (price, quantity) {
        (Some(p), Some(q)) if p > 0.0 && q > 0.0 => round8(p * q),
        _ => 0.0,
    }
}

/// Quantity for a balance percentage, or `None` when it cannot be derived.
///
/// The percentage is clamped to `[0, 100]`. Buying needs a positive price; selling
/// ignores it.
pub fn quantity_for_percentage(
    percentage: f64,
    side: OrderSide,
    price: Option<f64>,
    available_quote: f64,
    available_base: f64,
) -> Option<f64> {
    let share = clamp_percentage(percentage) / 100.0;
    match side {
        OrderSide::Buy => price
            .filter(|p| *p > 0.0)
            .map(|p| round8(available_quote * share / p)),
        OrderSide::Sell => Some(round8(available_base * share)),
    }
}

fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}

/// Inline messages shown under the order form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub trigger_price: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.quantity.is_none() && self.trigger_price.is_none()
    }
}

/// Editable order draft.
///
/// Numeric fields are kept as the text the user typed so half-typed values ("0.", "")
/// survive between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    kind: OrderKind,
    price: String,
    quantity: String,
    trigger_price: String,
    post_only: bool,
    amount_percentage: Option<f64>,
    total: f64,
    errors: FieldErrors,
    submit_attempted: bool,
    submitting: bool,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderForm {
    /// Empty limit-order draft
    pub fn new() -> Self {
        Self {
            kind: OrderKind::Limit,
            price: String::new(),
            quantity: String::new(),
            trigger_price: String::new(),
            post_only: false,
            amount_percentage: None,
            total: 0.0,
            errors: FieldErrors::default(),
            submit_attempted: false,
            submitting: false,
        }
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn trigger_price(&self) -> &str {
        &self.trigger_price
    }

    pub fn post_only(&self) -> bool {
        self.post_only
    }

    pub fn amount_percentage(&self) -> Option<f64> {
        self.amount_percentage
    }

    /// Current `price * quantity`, see [`compute_total`]
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// True while a submission is waiting for confirmation
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Label for the submit button
    pub fn submit_label(&self, side: OrderSide, base: &str) -> String {
        if self.submitting {
            "Processing...".to_string()
        } else {
            format!("{} {}", side.label(), base)
        }
    }

    /// Total is only an estimate for market orders (the price field is hidden)
    pub fn total_is_estimate(&self) -> bool {
        self.kind == OrderKind::Market
    }

    pub fn set_kind(&mut self, kind: OrderKind) {
        if self.is_frozen("kind") {
            return;
        }
        if self.kind != kind {
            debug!(from = %self.kind, to = %kind, "Order type changed");
            self.kind = kind;
            self.after_edit();
        }
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        if self.is_frozen("price") {
            return;
        }
        self.price = price.into();
        self.after_edit();
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        if self.is_frozen("quantity") {
            return;
        }
        self.quantity = quantity.into();
        self.after_edit();
    }

    pub fn set_trigger_price(&mut self, trigger_price: impl Into<String>) {
        if self.is_frozen("trigger_price") {
            return;
        }
        self.trigger_price = trigger_price.into();
        self.after_edit();
    }

    pub fn set_post_only(&mut self, post_only: bool) {
        if self.is_frozen("post_only") {
            return;
        }
        self.post_only = post_only;
    }

    /// Move the balance slider.
    ///
    /// The clamped percentage is always stored. The quantity only changes when it can be
    /// derived (a buy without a positive price leaves it untouched).
    pub fn apply_percentage(
        &mut self,
        percentage: f64,
        side: OrderSide,
        available_quote: f64,
        available_base: f64,
    ) {
        if self.is_frozen("amount_percentage") {
            return;
        }
        let percentage = clamp_percentage(percentage);
        self.amount_percentage = Some(percentage);

        let price = parse_number(&self.price);
        match quantity_for_percentage(percentage, side, price, available_quote, available_base) {
            Some(quantity) => {
                self.quantity = quantity.to_string();
                self.after_edit();
            }
            None => debug!(percentage, "No price set, slider leaves quantity unchanged"),
        }
    }

    /// Recompute the field messages for the current kind
    pub fn validate(&mut self) -> bool {
        let check = |input: &str, field: &str| validate_positive(input, field).error;

        self.errors = FieldErrors {
            price: if self.kind.requires_price() {
                check(&self.price, "Price")
            } else {
                None
            },
            quantity: check(&self.quantity, "Quantity"),
            trigger_price: if self.kind.requires_trigger_price() {
                check(&self.trigger_price, "Trigger price")
            } else {
                None
            },
        };
        self.errors.is_empty()
    }

    /// Validate and freeze the draft into a request for `side` on `pair`.
    ///
    /// Fails with the field messages when anything required is missing or non-positive.
    pub fn submit(&mut self, side: OrderSide, pair: &TradingPair) -> Result<OrderRequest, FieldErrors> {
        self.submit_attempted = true;
        if !self.validate() {
            warn!(side = %side, pair = %pair, errors = ?self.errors, "Order form has invalid fields");
            return Err(self.errors.clone());
        }

        let draft = OrderDraft {
            kind: self.kind,
            price: if self.kind.requires_price() {
                parse_positive(&self.price)
            } else {
                None
            },
            quantity: parse_positive(&self.quantity).unwrap_or_default(),
            total: self.total,
            trigger_price: if self.kind.requires_trigger_price() {
                parse_positive(&self.trigger_price)
            } else {
                None
            },
            post_only: self.kind == OrderKind::Limit && self.post_only,
            amount_percentage: self.amount_percentage,
        };

        Ok(OrderRequest {
            pair: pair.clone(),
            side,
            draft,
        })
    }

    /// Mark the draft as handed to the submitter
    pub fn begin_submission(&mut self) {
        self.submitting = true;
    }

    /// Submission finished. A placed order clears the draft (the order type is kept); a
    /// failed one leaves it editable.
    pub fn finish_submission(&mut self, placed: bool) {
        self.submitting = false;
        if placed {
            *self = Self {
                kind: self.kind,
                ..Self::new()
            };
        }
    }

    /// The draft is frozen while a submission waits for confirmation
    fn is_frozen(&self, field: &'static str) -> bool {
        if self.submitting {
            warn!(field, "Order form edit ignored, draft is awaiting confirmation");
        }
        self.submitting
    }

    fn after_edit(&mut self) {
        self.total = compute_total(parse_number(&self.price), parse_number(&self.quantity));
        if self.submit_attempted {
            self.validate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc_usdt() -> TradingPair {
        TradingPair::new("BTC", "USDT")
    }

    #[test]
    fn test_total_follows_price_and_quantity() {
        let mut form = OrderForm::new();
        form.set_price("100");
        form.set_quantity("2");
        assert_eq!(form.total(), 200.0);

        form.set_price("0");
        assert_eq!(form.total(), 0.0);

        form.set_price("0.1");
        form.set_quantity("0.2");
        assert_eq!(form.total(), 0.02);

        form.set_quantity("");
        assert_eq!(form.total(), 0.0);

        form.set_quantity("abc");
        assert_eq!(form.total(), 0.0);

        form.set_price("-5");
        form.set_quantity("3");
        assert_eq!(form.total(), 0.0);
    }

    #[test]
    fn test_total_rounds_to_eight_decimals() {
        assert_eq!(compute_total(Some(1.0 / 3.0), Some(1.0)), 0.33333333);
        assert_eq!(compute_total(Some(67000.5), Some(0.123456789)), round8(67000.5 * 0.123456789));
    }

    #[test]
    fn test_buy_slider_uses_quote_balance_and_price() {
        let mut form = OrderForm::new();
        form.set_price("100");
        form.apply_percentage(50.0, OrderSide::Buy, 1000.0, 0.5);
        assert_eq!(form.quantity(), "5");
        assert_eq!(form.amount_percentage(), Some(50.0));
        assert_eq!(form.total(), 500.0);
    }

    #[test]
    fn test_buy_slider_without_price_keeps_quantity() {
        let mut form = OrderForm::new();
        form.set_quantity("1.5");
        form.apply_percentage(25.0, OrderSide::Buy, 1000.0, 0.5);
        assert_eq!(form.quantity(), "1.5");
        assert_eq!(form.amount_percentage(), Some(25.0));
    }

    #[test]
    fn test_sell_slider_uses_base_balance() {
        let mut form = OrderForm::new();
        form.apply_percentage(25.0, OrderSide::Sell, 10_000.0, 0.5);
        assert_eq!(form.quantity(), "0.125");
    }

    #[test]
    fn test_slider_clamps_percentage() {
        let mut form = OrderForm::new();
        form.apply_percentage(150.0, OrderSide::Sell, 10_000.0, 0.5);
        assert_eq!(form.amount_percentage(), Some(100.0));
        assert_eq!(form.quantity(), "0.5");

        form.apply_percentage(-20.0, OrderSide::Sell, 10_000.0, 0.5);
        assert_eq!(form.amount_percentage(), Some(0.0));
        assert_eq!(form.quantity(), "0");
    }

    #[test]
    fn test_buy_slider_rounds_quantity() {
        assert_eq!(
            quantity_for_percentage(100.0, OrderSide::Buy, Some(3.0), 1.0, 0.0),
            Some(0.33333333)
        );
        assert_eq!(quantity_for_percentage(50.0, OrderSide::Buy, Some(0.0), 1000.0, 0.0), None);
    }

    #[test]
    fn test_limit_submit_requires_price_and_quantity() {
        let mut form = OrderForm::new();
        let errors = form.submit(OrderSide::Buy, &btc_usdt()).unwrap_err();
        assert_eq!(errors.price.as_deref(), Some("Price is required"));
        assert_eq!(errors.quantity.as_deref(), Some("Quantity is required"));
        assert_eq!(errors.trigger_price, None);
    }

    #[test]
    fn test_stop_limit_requires_positive_trigger() {
        let mut form = OrderForm::new();
        form.set_kind(OrderKind::StopLimit);
        form.set_price("100");
        form.set_quantity("1");
        let errors = form.submit(OrderSide::Sell, &btc_usdt()).unwrap_err();
        assert_eq!(errors.trigger_price.as_deref(), Some("Trigger price is required"));

        form.set_trigger_price("0");
        assert_eq!(
            form.errors().trigger_price.as_deref(),
            Some("Trigger price must be positive")
        );

        form.set_trigger_price("95");
        let request = form.submit(OrderSide::Sell, &btc_usdt()).unwrap();
        assert_eq!(request.draft.trigger_price, Some(95.0));
        assert_eq!(request.draft.kind, OrderKind::StopLimit);
    }

    #[test]
    fn test_limit_and_market_ignore_trigger() {
        let mut form = OrderForm::new();
        form.set_price("100");
        form.set_quantity("1");
        form.set_trigger_price("garbage");
        let request = form.submit(OrderSide::Buy, &btc_usdt()).unwrap();
        assert_eq!(request.draft.trigger_price, None);

        form.set_kind(OrderKind::Market);
        form.set_price("");
        let request = form.submit(OrderSide::Buy, &btc_usdt()).unwrap();
        assert_eq!(request.draft.price, None);
        assert_eq!(request.draft.trigger_price, None);
        assert_eq!(request.summary(), "BUY 1 BTC at Market");
    }

    #[test]
    fn test_non_numeric_message() {
        let mut form = OrderForm::new();
        form.set_price("12a");
        form.set_quantity("1");
        let errors = form.submit(OrderSide::Buy, &btc_usdt()).unwrap_err();
        assert_eq!(errors.price.as_deref(), Some("Price must be a number"));
        assert_eq!(errors.quantity, None);
    }

    #[test]
    fn test_revalidates_on_change_after_failed_submit() {
        let mut form = OrderForm::new();
        form.set_quantity("0");
        // No messages before the first submit
        assert!(form.errors().is_empty());

        assert!(form.submit(OrderSide::Buy, &btc_usdt()).is_err());
        assert_eq!(form.errors().quantity.as_deref(), Some("Quantity must be positive"));

        form.set_quantity("2");
        assert_eq!(form.errors().quantity, None);
        assert!(form.errors().price.is_some());

        form.set_price("100");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_edits_are_ignored_while_submitting() {
        let mut form = OrderForm::new();
        form.set_price("100");
        form.set_quantity("2");
        form.begin_submission();

        form.set_price("999");
        form.set_quantity("7");
        form.set_kind(OrderKind::Market);
        form.set_trigger_price("90");
        form.set_post_only(true);
        form.apply_percentage(50.0, OrderSide::Sell, 10_000.0, 0.5);

        assert_eq!(form.price(), "100");
        assert_eq!(form.quantity(), "2");
        assert_eq!(form.total(), 200.0);
        assert_eq!(form.kind(), OrderKind::Limit);
        assert_eq!(form.trigger_price(), "");
        assert!(!form.post_only());
        assert_eq!(form.amount_percentage(), None);

        form.finish_submission(false);
        form.set_price("150");
        assert_eq!(form.total(), 300.0);
    }

    #[test]
    fn test_post_only_only_carried_for_limit() {
        let mut form = OrderForm::new();
        form.set_price("100");
        form.set_quantity("1");
        form.set_post_only(true);
        assert!(form.submit(OrderSide::Buy, &btc_usdt()).unwrap().draft.post_only);

        form.set_kind(OrderKind::StopLimit);
        form.set_trigger_price("99");
        assert!(!form.submit(OrderSide::Buy, &btc_usdt()).unwrap().draft.post_only);
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut form = OrderForm::new();
        form.set_kind(OrderKind::StopLimit);
        form.set_price("100");
        form.set_quantity("2");
        form.set_trigger_price("98");
        let request = form.submit(OrderSide::Buy, &btc_usdt()).unwrap();
        assert_eq!(request.draft.total, 200.0);

        form.begin_submission();
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(OrderSide::Buy, "BTC"), "Processing...");

        form.finish_submission(false);
        assert!(!form.is_submitting());
        assert_eq!(form.price(), "100");
        assert_eq!(form.submit_label(OrderSide::Buy, "BTC"), "BUY BTC");

        form.begin_submission();
        form.finish_submission(true);
        assert_eq!(form.kind(), OrderKind::StopLimit);
        assert_eq!(form.price(), "");
        assert_eq!(form.quantity(), "");
        assert_eq!(form.total(), 0.0);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_market_total_is_estimate() {
        let mut form = OrderForm::new();
        form.set_price("100");
        form.set_quantity("2");
        form.set_kind(OrderKind::Market);
        assert!(form.total_is_estimate());
        // The hidden price still feeds the estimate
        assert_eq!(form.total(), 200.0);
    }
}
