//! # Asset Card Widget
//!
//! Portfolio card for one asset on the dashboard.

use egui;
use shared::dto::PortfolioAsset;

use crate::ui::theme::Theme;
use crate::ui::widgets::animated_value::{render_animated_value, ValueFormat};
use crate::ui::widgets::layouts::render_card;

/// Render a portfolio card. Returns `true` when its "Trade" button was clicked.
pub fn render_portfolio_card(ui: &mut egui::Ui, asset: &PortfolioAsset, theme: &Theme) -> bool {
    let mut trade_clicked = false;
    render_card(ui, None, theme, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&asset.name).strong());
            ui.colored_label(theme.colors.text_muted, &asset.symbol);
        });

        let format = ValueFormat::new("", &format!(" {}", asset.value_currency), 2);
        render_animated_value(ui, &asset.symbol, asset.current_value, &format, 20.0);

        ui.horizontal(|ui| {
            if let Some(change) = asset.change_percentage {
                let (text, color) = theme.format_price_change(change);
                ui.colored_label(color, text);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Trade").clicked() {
                    trade_clicked = true;
                }
            });
        });
    });
    trade_clicked
}
