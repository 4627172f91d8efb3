//! # Form Components
//!
//! Reusable form elements for consistent UI across pages

use egui;
use crate::ui::theme::Theme;

/// Labeled single-line input. Returns the edited text when it changed this frame.
///
/// Inputs are rendered from a state snapshot, so the caller routes the change back
/// through the app.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    hint: &str,
    enabled: bool,
) -> Option<String> {
    ui.label(label);
    let mut text = value.to_string();
    let response = ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut text)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(text)
}

/// Full-width filled button
pub fn render_primary_button(
    ui: &mut egui::Ui,
    text: &str,
    fill: egui::Color32,
    enabled: bool,
) -> egui::Response {
    let button = egui::Button::new(egui::RichText::new(text).strong().color(egui::Color32::WHITE))
        .fill(fill)
        .min_size(egui::vec2(ui.available_width(), 36.0));
    ui.add_enabled(enabled, button)
}

/// Inline field error, if any
pub fn render_field_error(ui: &mut egui::Ui, error: Option<&str>, theme: &Theme) {
    if let Some(error) = error {
        ui.colored_label(theme.colors.loss, error);
    }
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.colored_label(theme.colors.text_muted, hint);
}

/// `label ........ value` row
pub fn render_key_value(ui: &mut egui::Ui, label: &str, value: &str, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.colored_label(theme.colors.text_muted, label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}
