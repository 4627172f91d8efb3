//! # GUI Rendering Framework
//!
//! This module orchestrates the UI rendering pipeline using **egui widgets**: a navigation
//! bar on top, the active route in a scrollable central panel, then the order confirmation
//! dialog and toasts layered above everything.

pub mod chart;
pub mod screens;
pub mod theme;
pub mod widgets;

use egui;

use crate::app::{App, Route};
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager, theme: &Theme) {
    for notification in app.state.write().take_notifications() {
        notifications.push(&notification);
    }

    let state = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        // Lock is held by another task, skip this frame
        None => return,
    };

    egui::TopBottomPanel::top("nav_bar")
        .frame(
            egui::Frame::new()
                .fill(theme.colors.surface)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            widgets::nav_bar::render_nav_bar(ui, &state, app, theme);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_salt(state.current_path.as_str())
            .auto_shrink([false, false])
            .show(ui, |ui| match &state.route {
                Route::Dashboard => screens::dashboard::render(ui, &state, app, theme),
                Route::Markets => screens::markets::render(ui, &state, app, theme),
                Route::Trading => screens::trading::render(ui, &state, app, theme),
                Route::Wallet => screens::wallet::render(ui, &state, app, theme),
                Route::Earn => screens::earn::render(ui, &state, app, theme),
                Route::NotFound(path) => screens::not_found::render(ui, path, app, theme),
            });
    });

    screens::trading::render_confirmation_dialog(ctx, app, theme);
    notifications.show(ctx);
}
