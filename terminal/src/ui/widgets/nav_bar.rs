//! # Navigation Bar
//!
//! Brand on the left, one entry per page. The entry whose href prefixes the current path
//! is highlighted.

use egui;
use crate::app::{AppLike, AppState, NAV_ITEMS};
use crate::ui::theme::Theme;

/// Render the top navigation bar
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.set_height(36.0);

        let brand = ui.add(
            egui::Label::new(
                egui::RichText::new("AscendEX")
                    .size(20.0)
                    .strong()
                    .color(theme.colors.primary),
            )
            .sense(egui::Sense::click()),
        );
        if brand.clicked() {
            app.navigate("/");
        }

        ui.add_space(24.0);

        for item in NAV_ITEMS {
            let active = item.is_active(&state.current_path);
            let text = if active {
                egui::RichText::new(item.label).strong().color(theme.colors.primary)
            } else {
                egui::RichText::new(item.label).color(theme.colors.text_muted)
            };
            if ui.selectable_label(active, text).clicked() && !active {
                app.navigate(item.href);
            }
        }
    });
}
