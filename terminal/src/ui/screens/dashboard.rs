//! # Dashboard Screen
//!
//! Portfolio overview, market status, trending movers, news and recommendations.

use egui;
use shared::dto::NewsImpact;

use crate::app::{AppLike, AppState};
use crate::pages::dashboard::{QuickAction, RECOMMENDATIONS, WELCOME_TITLE};
use crate::ui::theme::Theme;
use crate::ui::widgets::animated_value::{render_animated_value, ValueFormat};
use crate::ui::widgets::asset_card::render_portfolio_card;
use crate::ui::widgets::layouts::{render_card, render_page_header, render_split_layout};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let dashboard = &state.dashboard;
    render_page_header(ui, WELCOME_TITLE, Some("Here's your portfolio overview."), theme);

    render_card(ui, Some("Total Portfolio Value"), theme, |ui| {
        render_animated_value(ui, "portfolio_total", dashboard.total_value(), &ValueFormat::usd(), 30.0);
        ui.colored_label(theme.colors.gain, &dashboard.portfolio_change_label);
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for action in [QuickAction::Deposit, QuickAction::Withdraw, QuickAction::StartTrading] {
                if ui.button(action.label()).clicked() {
                    app.handle_quick_action(action);
                }
            }
        });
    });
    ui.add_space(12.0);

    ui.columns(dashboard.portfolio.len().max(1), |columns| {
        for (column, asset) in columns.iter_mut().zip(&dashboard.portfolio) {
            if render_portfolio_card(column, asset, theme) {
                app.handle_quick_action(QuickAction::TradeAsset);
            }
        }
    });
    ui.add_space(12.0);

    render_split_layout(
        ui,
        |ui| {
            render_card(ui, Some("Market Status"), theme, |ui| {
                let status = &dashboard.market_status;
                ui.colored_label(theme.colors.text_muted, "Global Market Cap");
                render_animated_value(
                    ui,
                    "market_cap",
                    status.value,
                    &ValueFormat::new("$", status.suffix, 2),
                    22.0,
                );
                let (text, color) = theme.format_price_change(status.change_percentage);
                ui.colored_label(color, format!("{} (24h)", text));
            });
            ui.add_space(12.0);
            render_card(ui, Some("Trending"), theme, |ui| {
                for asset in &dashboard.trending {
                    ui.horizontal(|ui| {
                        ui.label(&asset.name);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let (text, color) = theme.format_price_change(asset.change);
                            ui.colored_label(color, text);
                        });
                    });
                }
            });
        },
        |ui| {
            render_card(ui, Some("News"), theme, |ui| {
                for item in &dashboard.news {
                    let impact_color = match item.impact {
                        NewsImpact::High => theme.colors.loss,
                        NewsImpact::Medium => theme.colors.warning,
                        NewsImpact::Low => theme.colors.text_muted,
                    };
                    ui.label(egui::RichText::new(&item.title).strong());
                    ui.horizontal(|ui| {
                        ui.colored_label(theme.colors.text_muted, format!("{} · {}", item.source, item.time));
                        ui.colored_label(impact_color, item.impact.label());
                    });
                    ui.add_space(6.0);
                }
            });
            ui.add_space(12.0);
            render_card(ui, Some("Recommended for You"), theme, |ui| {
                for recommendation in RECOMMENDATIONS {
                    ui.label(egui::RichText::new(recommendation.title).strong());
                    ui.colored_label(theme.colors.text_muted, recommendation.description);
                    if ui.button(recommendation.action_label).clicked() {
                        match recommendation.action {
                            Some(action) => app.handle_quick_action(action),
                            None => tracing::info!(title = recommendation.title, "Recommendation opened"),
                        }
                    }
                    ui.add_space(6.0);
                }
            });
        },
    );
}
