//! # Notifications Widget
//!
//! Toast surface using egui-notify. Handlers queue [`Notification`]s on the app state and
//! the frame loop hands them over here.

use egui_notify::Toasts;
use std::time::Duration;

use crate::app::{Notification, NotificationLevel};

const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Notification manager for the application
#[derive(Default)]
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn one queued notification into a toast
    pub fn push(&mut self, notification: &Notification) {
        let text = format!("{}\n{}", notification.title, notification.message);
        let toast = match notification.level {
            NotificationLevel::Success => self.toasts.success(text),
            NotificationLevel::Error => self.toasts.error(text),
            NotificationLevel::Warning => self.toasts.warning(text),
            NotificationLevel::Info => self.toasts.info(text),
        };
        toast.duration(Some(TOAST_DURATION));
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
