//! # GUI Theme
//!
//! AscendEX dark theme: deep navy panels, a teal primary accent and green/red for
//! gains and losses.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

use crate::app::NotificationLevel;

/// Color palette
#[derive(Debug, Clone)]
pub struct Palette {
    /// Window background
    pub background: Color32,
    /// Card and panel fill
    pub surface: Color32,
    /// Raised elements (inputs, table headers)
    pub surface_raised: Color32,
    pub text: Color32,
    /// Secondary text
    pub text_muted: Color32,
    /// Primary accent (buttons, active nav item)
    pub primary: Color32,
    pub border: Color32,
    pub gain: Color32,
    pub loss: Color32,
    pub warning: Color32,
    pub info: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color32::from_rgb(11, 14, 23),       // #0B0E17
            surface: Color32::from_rgb(20, 25, 38),          // #141926
            surface_raised: Color32::from_rgb(30, 36, 53),   // #1E2435
            text: Color32::from_rgb(234, 236, 239),          // #EAECEF
            text_muted: Color32::from_rgb(132, 142, 156),    // #848E9C
            primary: Color32::from_rgb(0, 184, 169),         // #00B8A9
            border: Color32::from_rgb(43, 49, 66),           // #2B3142
            gain: Color32::from_rgb(14, 203, 129),           // #0ECB81
            loss: Color32::from_rgb(246, 70, 93),            // #F6465D
            warning: Color32::from_rgb(240, 185, 11),        // #F0B90B
            info: Color32::from_rgb(82, 142, 255),           // #528EFF
        }
    }
}

/// Application theme
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub colors: Palette,
}

impl Theme {
    /// Get color for price change percentage
    pub fn price_change_color(&self, change: f64) -> Color32 {
        if change > 0.0 {
            self.colors.gain
        } else if change < 0.0 {
            self.colors.loss
        } else {
            self.colors.text_muted
        }
    }

    /// Format price change with color
    pub fn format_price_change(&self, change: f64) -> (String, Color32) {
        (
            shared::utils::format_percentage(change),
            self.price_change_color(change),
        )
    }

    pub fn notification_color(&self, level: NotificationLevel) -> Color32 {
        match level {
            NotificationLevel::Success => self.colors.gain,
            NotificationLevel::Error => self.colors.loss,
            NotificationLevel::Warning => self.colors.warning,
            NotificationLevel::Info => self.colors.info,
        }
    }

    /// egui visuals for the palette
    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.faint_bg_color = colors.surface;
        visuals.extreme_bg_color = colors.background;
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.noninteractive.bg_fill = colors.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.surface_raised;
        visuals.widgets.inactive.weak_bg_fill = colors.surface_raised;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.hovered.bg_fill = colors.border;
        visuals.widgets.hovered.weak_bg_fill = colors.border;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.primary);

        visuals.widgets.active.bg_fill = colors.primary.gamma_multiply(0.6);
        visuals.widgets.active.weak_bg_fill = colors.primary.gamma_multiply(0.4);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors.primary);

        visuals.selection.bg_fill = colors.primary.gamma_multiply(0.35);
        visuals.selection.stroke = Stroke::new(1.0, colors.primary);
        visuals.hyperlink_color = colors.primary;
        visuals.slider_trailing_fill = true;

        visuals
    }

    /// Apply the theme to an egui context.
    ///
    /// Uses `style_mut_of` for both egui themes so a system theme switch keeps the palette.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        for egui_theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(egui_theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
                style.spacing.window_margin = egui::Margin::same(12);
            });
        }
        tracing::debug!("Applied terminal theme");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_change_color() {
        let theme = Theme::default();
        assert_eq!(theme.price_change_color(1.25), theme.colors.gain);
        assert_eq!(theme.price_change_color(-0.5), theme.colors.loss);
        assert_eq!(theme.price_change_color(0.0), theme.colors.text_muted);
    }

    #[test]
    fn test_notification_colors_are_distinct() {
        let theme = Theme::default();
        assert_ne!(
            theme.notification_color(NotificationLevel::Success),
            theme.notification_color(NotificationLevel::Error)
        );
    }
}
