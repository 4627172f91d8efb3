//! # Application State Types
//!
//! Global state shared between the UI thread and the handlers: the current route, one
//! container per page and the queue of notifications waiting to be shown.

use crate::app::routes::{normalize_path, Route};
use crate::core::config::TerminalConfig;
use crate::core::service::CatalogService;
use crate::pages::{DashboardState, EarnState, MarketsState, TradingState, WalletPageState};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// A message for the toast surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, message)
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub route: Route,
    /// Normalized path of `route`, used for nav highlighting
    pub current_path: String,
    pub dashboard: DashboardState,
    pub markets: MarketsState,
    pub trading: TradingState,
    pub wallet: WalletPageState,
    pub earn: EarnState,
    /// Drained into toasts by the UI every frame
    pub pending_notifications: Vec<Notification>,
}

impl AppState {
    /// Fresh state for one session, seeded from `catalog`
    pub fn new(config: &TerminalConfig, catalog: &dyn CatalogService) -> Self {
        let current_path = normalize_path(&config.start_path);
        Self {
            route: Route::from_path(&current_path),
            current_path,
            dashboard: DashboardState::new(catalog),
            markets: MarketsState::new(catalog),
            trading: TradingState::new(catalog, config),
            wallet: WalletPageState::new(catalog),
            earn: EarnState::new(catalog),
            pending_notifications: Vec::new(),
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.pending_notifications.push(notification);
    }

    /// Take every queued notification
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending_notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::DemoCatalog;

    #[test]
    fn test_start_path_is_normalized() {
        let state = AppState::new(&TerminalConfig::default(), &DemoCatalog);
        assert_eq!(state.route, Route::Dashboard);
        assert_eq!(state.current_path, "/dashboard");

        let config = TerminalConfig {
            start_path: "/earn/".to_string(),
            ..TerminalConfig::default()
        };
        let state = AppState::new(&config, &DemoCatalog);
        assert_eq!(state.route, Route::Earn);
        assert_eq!(state.current_path, "/earn");
    }

    #[test]
    fn test_take_notifications_drains_queue() {
        let mut state = AppState::new(&TerminalConfig::default(), &DemoCatalog);
        state.notify(Notification::info("Hello", "World"));
        state.notify(Notification::error("Oops", "Failed"));

        let drained = state.take_notifications();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1].level, NotificationLevel::Error);
        assert!(state.pending_notifications.is_empty());
    }
}
