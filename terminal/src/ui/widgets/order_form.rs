//! # Order Form Widget
//!
//! Buy/sell order entry panel. Reads a [`TradingState`] snapshot and reports every edit
//! through [`OrderFormEdit`], so the form itself stays in the page state.

use egui;
use shared::dto::{OrderKind, OrderSide};

use crate::app::{AppLike, OrderFormEdit};
use crate::pages::trading::TradingState;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{render_field_error, render_key_value, render_primary_button, render_text_input};

/// Quick-pick slider stops
const PERCENT_STOPS: [f64; 4] = [25.0, 50.0, 75.0, 100.0];

pub fn render_order_form(ui: &mut egui::Ui, trading: &TradingState, app: &mut impl AppLike, theme: &Theme) {
    let form = &trading.form;
    let editable = !form.is_submitting();

    ui.horizontal(|ui| {
        for side in [OrderSide::Buy, OrderSide::Sell] {
            let color = match side {
                OrderSide::Buy => theme.colors.gain,
                OrderSide::Sell => theme.colors.loss,
            };
            let active = trading.side == side;
            let text = egui::RichText::new(format!("{} {}", side.label(), trading.pair.base)).strong();
            let text = if active { text.color(color) } else { text };
            if ui.selectable_label(active, text).clicked() && !active {
                app.handle_order_form_edit(OrderFormEdit::Side(side));
            }
        }
    });
    ui.add_space(6.0);

    ui.add_enabled_ui(editable, |ui| {
        egui::ComboBox::from_id_salt("order_kind")
            .selected_text(form.kind().label())
            .show_ui(ui, |ui| {
                for kind in OrderKind::all() {
                    if ui.selectable_label(form.kind() == *kind, kind.label()).clicked() {
                        app.handle_order_form_edit(OrderFormEdit::Kind(*kind));
                    }
                }
            });
    });

    let (available, currency) = trading.available_for_side();
    render_key_value(
        ui,
        "Available",
        &format!("{} {}", shared::utils::format_number(available, 2), currency),
        theme,
    );
    ui.add_space(4.0);

    if form.kind().requires_trigger_price() {
        let hint = format!("Trigger price ({})", trading.pair.quote);
        if let Some(text) = render_text_input(ui, "Trigger Price", form.trigger_price(), &hint, editable) {
            app.handle_order_form_edit(OrderFormEdit::TriggerPrice(text));
        }
        render_field_error(ui, form.errors().trigger_price.as_deref(), theme);
    }

    if form.kind().requires_price() {
        let hint = format!("Price ({})", trading.pair.quote);
        if let Some(text) = render_text_input(ui, "Price", form.price(), &hint, editable) {
            app.handle_order_form_edit(OrderFormEdit::Price(text));
        }
        render_field_error(ui, form.errors().price.as_deref(), theme);
    } else {
        render_key_value(ui, "Price", "Market price", theme);
    }

    let hint = format!("Amount ({})", trading.pair.base);
    if let Some(text) = render_text_input(ui, "Amount", form.quantity(), &hint, editable) {
        app.handle_order_form_edit(OrderFormEdit::Quantity(text));
    }
    render_field_error(ui, form.errors().quantity.as_deref(), theme);

    ui.add_space(4.0);
    let mut percentage = form.amount_percentage().unwrap_or(0.0);
    let slider = ui.add_enabled(
        editable,
        egui::Slider::new(&mut percentage, 0.0..=100.0)
            .suffix("%")
            .show_value(true),
    );
    if slider.changed() {
        app.handle_order_form_edit(OrderFormEdit::Percentage(percentage));
    }
    ui.horizontal(|ui| {
        for stop in PERCENT_STOPS {
            if ui.add_enabled(editable, egui::Button::new(format!("{:.0}%", stop))).clicked() {
                app.handle_order_form_edit(OrderFormEdit::Percentage(stop));
            }
        }
    });

    if form.kind() == OrderKind::Limit {
        let mut post_only = form.post_only();
        if ui
            .add_enabled(editable, egui::Checkbox::new(&mut post_only, "Post-only"))
            .changed()
        {
            app.handle_order_form_edit(OrderFormEdit::PostOnly(post_only));
        }
    }

    ui.add_space(6.0);
    let total_label = if form.total_is_estimate() { "Total (est.)" } else { "Total" };
    render_key_value(
        ui,
        total_label,
        &format!("{} {}", shared::utils::format_number(form.total(), 2), trading.pair.quote),
        theme,
    );

    ui.add_space(8.0);
    let fill = match trading.side {
        OrderSide::Buy => theme.colors.gain,
        OrderSide::Sell => theme.colors.loss,
    };
    let label = form.submit_label(trading.side, &trading.pair.base);
    if render_primary_button(ui, &label, fill, editable).clicked() {
        app.handle_order_submit();
    }
}
