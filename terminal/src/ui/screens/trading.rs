//! # Trading Screen
//!
//! Price and depth charts, the order form, the order tables and the confirmation dialog.

use egui;
use shared::dto::{OrderRequest, OrderSide};
use shared::utils::format_number;

use crate::app::{AppLike, AppState};
use crate::pages::trading::HistoryTab;
use crate::trading::market_data::Timeframe;
use crate::ui::chart::{render_candlestick_chart, render_depth_chart};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::render_primary_button;
use crate::ui::widgets::layouts::render_card;
use crate::ui::widgets::order_form::render_order_form;
use crate::ui::widgets::tables::{render_empty_state, render_order_table};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let trading = &state.trading;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(trading.pair.to_string()).size(24.0).strong());
        if let Some(last) = trading.chart.candles.back() {
            ui.label(egui::RichText::new(format_number(last.close, 2)).size(18.0));
        }
        if let Some(change) = trading.chart.change_percentage() {
            let (text, color) = theme.format_price_change(change);
            ui.colored_label(color, text);
        }
    });
    ui.add_space(8.0);

    let chart_width = (ui.available_width() * 0.68).max(320.0);
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(chart_width);
            render_card(ui, None, theme, |ui| {
                ui.horizontal(|ui| {
                    for timeframe in Timeframe::all() {
                        let active = trading.chart.timeframe == *timeframe;
                        if ui.selectable_label(active, timeframe.label()).clicked() && !active {
                            app.handle_timeframe_change(*timeframe);
                        }
                    }
                });
                render_candlestick_chart(ui, &trading.chart, theme);
            });
            ui.add_space(8.0);
            render_card(ui, Some("Order Book Depth"), theme, |ui| {
                render_depth_chart(ui, &trading.depth, theme);
            });
        });

        ui.vertical(|ui| {
            let heading = format!("Trade {}", trading.pair);
            render_card(ui, Some(heading.as_str()), theme, |ui| {
                render_order_form(ui, trading, app, theme);
            });
        });
    });
    ui.add_space(12.0);

    render_card(ui, None, theme, |ui| {
        ui.horizontal(|ui| {
            let tabs = [
                (HistoryTab::OpenOrders, format!("Open Orders ({})", trading.open_order_count())),
                (HistoryTab::OrderHistory, "Order History".to_string()),
                (HistoryTab::TradeHistory, "Trade History".to_string()),
            ];
            for (tab, label) in tabs {
                if ui.selectable_label(trading.history_tab == tab, label).clicked() {
                    app.handle_history_tab_change(tab);
                }
            }
        });
        ui.separator();

        match trading.history_tab {
            HistoryTab::OpenOrders => {
                render_order_table(ui, "open_orders", &trading.open_orders, "No open orders.", theme)
            }
            HistoryTab::OrderHistory => {
                render_empty_state(ui, "Order history will appear here.", None, theme)
            }
            HistoryTab::TradeHistory => {
                render_order_table(ui, "trade_history", &trading.trade_history, "No trades yet.", theme)
            }
        }
    });
}

/// Modal review of the order awaiting confirmation. Closing the window cancels it.
pub fn render_confirmation_dialog(ctx: &egui::Context, app: &mut impl AppLike, theme: &Theme) {
    let Some(request) = app.pending_confirmation() else {
        return;
    };

    let mut open = true;
    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Confirm Order")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.colored_label(
                theme.colors.text_muted,
                format!(
                    "Please review your {} order for {}:",
                    request.side, request.pair
                ),
            );
            ui.add_space(8.0);
            render_order_summary(ui, &request, theme);
            ui.add_space(12.0);

            let confirm_color = side_color(request.side, theme);
            ui.columns(2, |columns| {
                let width = columns[0].available_width();
                if columns[0]
                    .add(egui::Button::new("Cancel").min_size(egui::vec2(width, 36.0)))
                    .clicked()
                {
                    cancelled = true;
                }
                let label = format!("Confirm {}", request.side.label());
                if render_primary_button(&mut columns[1], &label, confirm_color, true).clicked() {
                    confirmed = true;
                }
            });
        });

    if confirmed {
        app.handle_order_confirm();
    } else if cancelled || !open {
        app.handle_order_cancel();
    }
}

fn render_order_summary(ui: &mut egui::Ui, request: &OrderRequest, theme: &Theme) {
    let draft = &request.draft;
    egui::Grid::new("order_summary")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            let row = |ui: &mut egui::Ui, label: &str, value: egui::RichText| {
                ui.label(egui::RichText::new(label).strong());
                ui.label(value);
                ui.end_row();
            };

            row(ui, "Pair:", request.pair.to_string().into());
            row(
                ui,
                "Side:",
                egui::RichText::new(request.side.label()).color(side_color(request.side, theme)),
            );
            row(ui, "Type:", draft.kind.label().to_uppercase().into());
            if let Some(price) = draft.price {
                row(ui, "Price:", format!("${}", format_number(price, 2)).into());
            }
            row(
                ui,
                "Quantity:",
                format!("{} {}", draft.quantity, request.pair.base).into(),
            );
            row(
                ui,
                "Total:",
                format!("${} {}", format_number(draft.total, 2), request.pair.quote).into(),
            );
            if let Some(trigger) = draft.trigger_price {
                row(ui, "Trigger Price:", format!("${}", format_number(trigger, 2)).into());
            }
        });
}

fn side_color(side: OrderSide, theme: &Theme) -> egui::Color32 {
    match side {
        OrderSide::Buy => theme.colors.gain,
        OrderSide::Sell => theme.colors.loss,
    }
}
