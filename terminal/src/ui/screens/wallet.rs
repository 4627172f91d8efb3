//! # Wallet Screen
//!
//! Total balance, allocation chart, holdings, transaction history and the deposit and
//! withdraw dialogs.

use egui;
use shared::dto::TransactionStatus;
use shared::utils::{format_number, format_usd};

use crate::app::{AppLike, AppState};
use crate::pages::wallet::{deposit_address, WalletDialog, MIN_DEPOSIT, WITHDRAWAL_FEE};
use crate::ui::chart::render_allocation_chart;
use crate::ui::theme::Theme;
use crate::ui::widgets::animated_value::{render_animated_value, ValueFormat};
use crate::ui::widgets::forms::{render_field_error, render_hint, render_primary_button, render_text_input};
use crate::ui::widgets::layouts::{render_card, render_page_header, render_split_layout};
use crate::ui::widgets::tables::{render_empty_state, render_table};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let wallet = &state.wallet;
    render_page_header(ui, "Wallet", Some("Manage your assets, deposits and withdrawals."), theme);

    render_split_layout(
        ui,
        |ui| {
            render_card(ui, Some("Total Balance"), theme, |ui| {
                render_animated_value(ui, "wallet_total", wallet.total_value(), &ValueFormat::usd(), 30.0);
            });
        },
        |ui| {
            render_card(ui, Some("Asset Allocation"), theme, |ui| {
                render_allocation_chart(ui, &wallet.allocations());
            });
        },
    );
    ui.add_space(12.0);

    render_card(ui, Some("Your Assets"), theme, |ui| {
        render_table(ui, "holdings", &["Asset", "Balance", "Value", "", ""], theme, |ui| {
            for holding in &wallet.holdings {
                let [r, g, b] = holding.color;
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::from_rgb(r, g, b), "●");
                    ui.label(egui::RichText::new(&holding.name).strong());
                    ui.colored_label(theme.colors.text_muted, &holding.symbol);
                });
                ui.label(format!("{} {}", holding.balance, holding.symbol));
                ui.label(format_usd(holding.value_usd, 2));
                if ui.button("Deposit").clicked() {
                    app.handle_deposit_click(&holding.id);
                }
                if ui.button("Withdraw").clicked() {
                    app.handle_withdraw_click(&holding.id);
                }
                ui.end_row();
            }
        });
    });
    ui.add_space(12.0);

    render_card(ui, Some("Transaction History"), theme, |ui| {
        if wallet.transactions.is_empty() {
            render_empty_state(ui, "No transactions yet.", None, theme);
            return;
        }
        render_table(ui, "transactions", &["Date", "Type", "Asset", "Amount", "Status", "Details"], theme, |ui| {
            for tx in &wallet.transactions {
                let status_color = match tx.status {
                    TransactionStatus::Completed => theme.colors.gain,
                    TransactionStatus::Pending => theme.colors.warning,
                    TransactionStatus::Failed => theme.colors.loss,
                };
                ui.label(tx.date.format("%Y-%m-%d").to_string());
                ui.label(tx.tx_type.label());
                ui.label(&tx.asset_symbol);
                ui.label(tx.amount.to_string());
                ui.colored_label(status_color, tx.status.label());
                ui.colored_label(theme.colors.text_muted, &tx.details);
                ui.end_row();
            }
        });
    });

    render_dialog(ui.ctx(), state, app, theme);
}

fn render_dialog(ctx: &egui::Context, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let (Some(dialog), Some(holding)) = (&state.wallet.dialog, state.wallet.dialog_holding()) else {
        return;
    };

    let mut open = true;
    match dialog {
        WalletDialog::Deposit { .. } => {
            let address = deposit_address(&holding.symbol);
            egui::Window::new(format!("Deposit {}", holding.symbol))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(format!("Send only {} to this address.", holding.symbol));
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.monospace(&address);
                        if ui.button("Copy").clicked() {
                            ui.ctx().copy_text(address.clone());
                            app.handle_address_copied(&address);
                        }
                    });
                    ui.add_space(6.0);
                    render_hint(ui, &format!("Minimum deposit: {} {}", MIN_DEPOSIT, holding.symbol), theme);
                });
        }
        WalletDialog::Withdraw(draft) => {
            egui::Window::new(format!("Withdraw {}", holding.symbol))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .open(&mut open)
                .show(ctx, |ui| {
                    render_hint(
                        ui,
                        &format!("Available: {} {}", format_number(holding.balance, 8), holding.symbol),
                        theme,
                    );
                    ui.add_space(6.0);
                    if let Some(address) =
                        render_text_input(ui, "Recipient Address", &draft.address, "Enter address", true)
                    {
                        app.handle_withdraw_edit(Some(address), None);
                    }
                    let hint = format!("Amount ({})", holding.symbol);
                    if let Some(amount) = render_text_input(ui, "Amount", &draft.amount, &hint, true) {
                        app.handle_withdraw_edit(None, Some(amount));
                    }
                    render_hint(ui, &format!("Network fee: {} {}", WITHDRAWAL_FEE, holding.symbol), theme);
                    render_field_error(ui, draft.error.as_deref(), theme);
                    ui.add_space(8.0);
                    if render_primary_button(ui, "Withdraw", theme.colors.primary, true).clicked() {
                        app.handle_withdraw_submit();
                    }
                });
        }
    }

    if !open {
        app.handle_wallet_dialog_close();
    }
}
