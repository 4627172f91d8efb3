//! # Earn Screen
//!
//! Staking products, launchpad projects, the FAQ and the stake dialog.

use egui;
use shared::dto::LaunchpadStatus;
use shared::utils::format_number;

use crate::app::{AppLike, AppState};
use crate::pages::earn::{EarnTab, FAQ};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{render_field_error, render_hint, render_primary_button, render_text_input};
use crate::ui::widgets::layouts::{render_card, render_page_header};
use crate::ui::widgets::staking_card::render_staking_card;
use crate::ui::widgets::tables::render_empty_state;

const CARDS_PER_ROW: usize = 2;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let earn = &state.earn;
    render_page_header(ui, "Earn", Some("Put your crypto to work and earn rewards."), theme);

    ui.horizontal(|ui| {
        for tab in EarnTab::all() {
            let response = ui.add_enabled(
                tab.is_enabled(),
                egui::Button::selectable(earn.tab == *tab, tab.label()),
            );
            if response.clicked() {
                app.handle_earn_tab(*tab);
            }
        }
    });
    ui.separator();
    ui.add_space(8.0);

    match earn.tab {
        EarnTab::Staking | EarnTab::Savings => {
            for chunk in earn.products.chunks(CARDS_PER_ROW) {
                ui.columns(CARDS_PER_ROW, |columns| {
                    for (column, product) in columns.iter_mut().zip(chunk) {
                        if render_staking_card(column, product, theme) {
                            app.handle_stake_click(&product.id);
                        }
                    }
                });
                ui.add_space(8.0);
            }
        }
        EarnTab::Launchpad => render_launchpad(ui, state, app, theme),
    }

    ui.add_space(12.0);
    render_card(ui, Some("Frequently Asked Questions"), theme, |ui| {
        for (question, answer) in FAQ {
            egui::CollapsingHeader::new(*question)
                .id_salt(("earn_faq", *question))
                .show(ui, |ui| {
                    ui.colored_label(theme.colors.text_muted, *answer);
                });
        }
    });

    render_stake_dialog(ui.ctx(), state, app, theme);
}

fn render_launchpad(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let projects = &state.earn.launchpad;
    if projects.is_empty() {
        render_empty_state(ui, "No launchpad projects right now.", None, theme);
        return;
    }

    for project in projects {
        render_card(ui, None, theme, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&project.name).size(16.0).strong());
                let status_color = match project.status {
                    LaunchpadStatus::SubscriptionOpen => theme.colors.gain,
                    LaunchpadStatus::Upcoming => theme.colors.info,
                };
                ui.colored_label(status_color, project.status.label());
            });
            ui.colored_label(theme.colors.text_muted, &project.description);
            ui.label(format!("Ends in: {}", project.ends_in));
            ui.add_space(6.0);
            let label = if project.can_participate() { "Participate" } else { "Coming Soon" };
            if render_primary_button(ui, label, theme.colors.primary, project.can_participate()).clicked() {
                app.handle_participate_click(&project.id);
            }
        });
        ui.add_space(8.0);
    }
}

fn render_stake_dialog(ctx: &egui::Context, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let earn = &state.earn;
    let (Some(dialog), Some(product)) = (&earn.stake_dialog, earn.dialog_product()) else {
        return;
    };

    let mut open = true;
    egui::Window::new(format!("Stake {}", product.asset_symbol))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .open(&mut open)
        .show(ctx, |ui| {
            render_hint(
                ui,
                &format!("{:.1}% APY · {}", product.apy, product.duration_label()),
                theme,
            );
            ui.add_space(6.0);
            let hint = format!("Min. {} {}", product.min_stake_amount, product.asset_symbol);
            if let Some(amount) = render_text_input(ui, "Amount", &dialog.amount, &hint, true) {
                app.handle_stake_amount_change(amount);
            }
            if let Some(reward) = earn.estimated_daily_reward() {
                render_hint(
                    ui,
                    &format!("Estimated daily reward: {} {}", format_number(reward, 6), product.asset_symbol),
                    theme,
                );
            }
            render_field_error(ui, dialog.error.as_deref(), theme);
            ui.add_space(8.0);
            if render_primary_button(ui, "Confirm Stake", theme.colors.primary, true).clicked() {
                app.handle_stake_confirm();
            }
        });

    if !open {
        app.handle_stake_close();
    }
}
