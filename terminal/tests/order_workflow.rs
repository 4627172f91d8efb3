//! End-to-end order flow through the public `App` API: edit, submit, confirm or cancel,
//! then apply the async result.

use std::time::Duration;

use ascend_terminal::app::{App, AppEvent, NotificationLevel, OrderFormEdit};
use ascend_terminal::core::{OrderError, TerminalConfig};
use shared::dto::{OrderKind, OrderRequest, OrderSide};

async fn wait_for_pending(app: &App) -> OrderRequest {
    for _ in 0..200 {
        if let Some(request) = app.pending_confirmation() {
            return request;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("order never reached the confirmation step");
}

async fn settle(app: &mut App) -> AppEvent {
    let event = app.event_rx.recv().await.unwrap();
    app.handle_event(event.clone());
    event
}

#[tokio::test]
async fn market_sell_from_balance_slider_is_placed() {
    let mut app = App::new(TerminalConfig::default());
    app.navigate("/trading");
    app.handle_order_form_edit(OrderFormEdit::Side(OrderSide::Sell));
    app.handle_order_form_edit(OrderFormEdit::Kind(OrderKind::Market));
    app.handle_order_form_edit(OrderFormEdit::Percentage(50.0));
    assert_eq!(app.state.read().trading.form.quantity(), "0.25");

    app.handle_order_submit();
    let pending = wait_for_pending(&app).await;
    assert_eq!(pending.side, OrderSide::Sell);
    assert_eq!(pending.draft.kind, OrderKind::Market);
    assert_eq!(pending.draft.price, None);
    assert_eq!(pending.summary(), "SELL 0.25 BTC at Market");

    app.handle_order_confirm();
    settle(&mut app).await;
    assert!(app.pending_confirmation().is_none());

    let notifications = app.state.write().take_notifications();
    let messages: Vec<&str> = notifications.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["SELL 0.25 BTC at Market", "SELL order for 0.25 BTC submitted successfully."]
    );
    assert!(app.state.read().pending_notifications.is_empty());

    let state = app.state.read();
    assert_eq!(state.trading.form.kind(), OrderKind::Market);
    assert_eq!(state.trading.form.quantity(), "");
    assert_eq!(state.trading.form.amount_percentage(), None);
}

#[tokio::test]
async fn cancelled_limit_buy_can_be_resubmitted() {
    let mut app = App::new(TerminalConfig::default());
    app.handle_order_form_edit(OrderFormEdit::Price("100".to_string()));
    app.handle_order_form_edit(OrderFormEdit::Quantity("2".to_string()));

    app.handle_order_submit();
    wait_for_pending(&app).await;
    app.handle_order_cancel();
    match settle(&mut app).await {
        AppEvent::OrderSubmitted { result, .. } => assert_eq!(result, Err(OrderError::Cancelled)),
    }
    {
        let state = app.state.read();
        assert!(!state.trading.form.is_submitting());
        assert_eq!(state.trading.form.total(), 200.0);
        assert_eq!(state.pending_notifications.last().map(|n| n.level), Some(NotificationLevel::Error));
    }

    app.handle_order_submit();
    let retry = wait_for_pending(&app).await;
    assert_eq!(retry.draft.total, 200.0);
    app.handle_order_confirm();
    settle(&mut app).await;

    let state = app.state.read();
    assert_eq!(state.trading.form.price(), "");
    assert_eq!(state.pending_notifications.last().map(|n| n.title.as_str()), Some("Order Placed"));
}
