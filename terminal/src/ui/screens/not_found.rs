//! # Not Found Screen

use egui;

use crate::app::AppLike;
use crate::ui::theme::Theme;
use crate::ui::widgets::layouts::render_centered;

pub fn render(ui: &mut egui::Ui, path: &str, app: &mut impl AppLike, theme: &Theme) {
    render_centered(ui, |ui| {
        ui.label(egui::RichText::new("404").size(64.0).strong().color(theme.colors.primary));
        ui.label(egui::RichText::new("Page Not Found").size(22.0));
        ui.add_space(6.0);
        ui.colored_label(
            theme.colors.text_muted,
            format!("The page \"{}\" does not exist or has been moved.", path),
        );
        ui.add_space(16.0);
        if ui.link("Go to Dashboard").clicked() {
            app.navigate("/");
        }
    });
}
