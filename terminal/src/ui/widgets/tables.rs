//! # Table Components
//!
//! Grid tables for order and transaction lists, and the empty-state message.

use egui;
use shared::dto::{OrderRow, OrderSide};
use crate::ui::theme::Theme;

/// Render a striped grid with a header row; rows come from the callback
pub fn render_table<F>(ui: &mut egui::Ui, id: &str, headers: &[&str], theme: &Theme, render_rows: F)
where
    F: FnOnce(&mut egui::Ui),
{
    egui::Grid::new(id)
        .num_columns(headers.len())
        .spacing([16.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            for header in headers {
                ui.colored_label(theme.colors.text_muted, *header);
            }
            ui.end_row();
            render_rows(ui);
        });
}

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.colors.text_muted, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(6.0);
            ui.colored_label(theme.colors.text_muted, secondary);
        }
        ui.add_space(20.0);
    });
}

/// Open-order / history table of the trading page
pub fn render_order_table(ui: &mut egui::Ui, id: &str, rows: &[OrderRow], empty_text: &str, theme: &Theme) {
    if rows.is_empty() {
        render_empty_state(ui, empty_text, None, theme);
        return;
    }

    let headers = ["Date", "Pair", "Type", "Side", "Price", "Amount", "Filled", "Total", "Status"];
    render_table(ui, id, &headers, theme, |ui| {
        for row in rows {
            let time = row
                .time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            let side_color = match row.side {
                OrderSide::Buy => theme.colors.gain,
                OrderSide::Sell => theme.colors.loss,
            };

            ui.label(time);
            ui.label(&row.symbol);
            ui.label(row.kind.label());
            ui.colored_label(side_color, row.side.label());
            ui.label(shared::utils::format_number(row.price, 2));
            ui.label(row.amount.to_string());
            ui.label(format!("{:.0}%", row.filled_pct));
            ui.label(shared::utils::format_number(row.total, 2));
            ui.label(row.status.label());
            ui.end_row();
        }
    });
}
