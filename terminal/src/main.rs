//! AscendEX exchange terminal binary.

use ascend_terminal::app::App;
use ascend_terminal::core::TerminalConfig;
use ascend_terminal::debug;
use ascend_terminal::ui::{self, theme::Theme, widgets::notifications::NotificationManager};
use ascend_terminal::utils::runtime::TOKIO_RT;
use std::time::Duration;
use tracing::{error, info};

/// Animated counters and async results need a steady frame rate even without input.
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

struct TerminalApp {
    app: App,
    notifications: NotificationManager,
    theme: Theme,
}

impl eframe::App for TerminalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app, &mut self.notifications, &self.theme);
        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}

fn main() {
    debug::init();

    let config = TerminalConfig::load();
    let _guard = TOKIO_RT.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AscendEX")
            .with_inner_size([1366.0, 860.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    info!("Starting AscendEX terminal");
    let result = eframe::run_native(
        "AscendEX",
        options,
        Box::new(move |cc| {
            let theme = Theme::default();
            theme.apply(&cc.egui_ctx);
            Ok(Box::new(TerminalApp {
                app: App::new(config),
                notifications: NotificationManager::new(),
                theme,
            }))
        }),
    );

    if let Err(e) = result {
        error!(error = %e, "Terminal exited with an error");
    }
}
