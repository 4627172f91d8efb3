//! # Staking Card Widget

use egui;
use shared::dto::StakingProduct;

use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{render_key_value, render_primary_button};
use crate::ui::widgets::layouts::render_card;

/// Render one staking product. Returns `true` when "Stake Now" was clicked.
pub fn render_staking_card(ui: &mut egui::Ui, product: &StakingProduct, theme: &Theme) -> bool {
    let mut stake_clicked = false;
    render_card(ui, None, theme, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&product.asset_name).size(16.0).strong());
            ui.colored_label(theme.colors.text_muted, &product.asset_symbol);
        });
        ui.label(
            egui::RichText::new(format!("{:.1}% APY", product.apy))
                .size(22.0)
                .strong()
                .color(theme.colors.gain),
        );
        ui.add_space(4.0);

        render_key_value(ui, "Duration", &product.duration_label(), theme);
        render_key_value(
            ui,
            "Min. Stake",
            &format!("{} {}", product.min_stake_amount, product.asset_symbol),
            theme,
        );

        if let Some(fill) = product.pool_fill_percentage() {
            ui.add_space(4.0);
            ui.add(
                egui::ProgressBar::new((fill / 100.0) as f32)
                    .text(format!("Pool {:.0}% filled", fill)),
            );
        }

        ui.add_space(8.0);
        stake_clicked = render_primary_button(ui, "Stake Now", theme.colors.primary, true).clicked();
    });
    stake_clicked
}
