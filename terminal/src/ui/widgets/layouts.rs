//! # Layout Components
//!
//! Reusable layout patterns for consistent page organization

use egui;
use crate::ui::theme::Theme;

/// Render a two-column split layout
pub fn render_split_layout<F1, F2>(ui: &mut egui::Ui, left_content: F1, right_content: F2)
where
    F1: FnOnce(&mut egui::Ui),
    F2: FnOnce(&mut egui::Ui),
{
    ui.columns(2, |columns| {
        left_content(&mut columns[0]);
        right_content(&mut columns[1]);
    });
}

/// Render vertically centered content
pub fn render_centered<F>(ui: &mut egui::Ui, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        content(ui);
    });
}

/// Card frame with an optional heading
pub fn render_card<F>(ui: &mut egui::Ui, heading: Option<&str>, theme: &Theme, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    egui::Frame::new()
        .fill(theme.colors.surface)
        .stroke(egui::Stroke::new(1.0, theme.colors.border))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            if let Some(heading_text) = heading {
                ui.label(egui::RichText::new(heading_text).size(16.0).strong());
                ui.add_space(8.0);
            }
            content(ui);
        });
}

/// Page heading with an optional subtitle
pub fn render_page_header(ui: &mut egui::Ui, title: &str, subtitle: Option<&str>, theme: &Theme) {
    ui.label(egui::RichText::new(title).size(26.0).strong());
    if let Some(subtitle) = subtitle {
        ui.colored_label(theme.colors.text_muted, subtitle);
    }
    ui.add_space(12.0);
}
