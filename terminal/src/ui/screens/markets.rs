//! # Markets Screen
//!
//! Global stats header and the searchable, filterable listing table.

use egui;
use egui_extras::{Column, TableBuilder};

use crate::app::{AppLike, AppState};
use crate::pages::markets::{MarketFilter, MarketSort, MarketTab, NO_FAVORITES_MESSAGE};
use crate::ui::theme::Theme;
use crate::ui::widgets::layouts::{render_card, render_page_header};
use crate::ui::widgets::tables::render_empty_state;
use shared::utils::{format_compact_usd, format_usd};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let markets = &state.markets;
    render_page_header(ui, "Markets", Some("Track prices of the top cryptocurrencies."), theme);

    ui.columns(4, |columns| {
        let stats = [
            ("Global Market Cap", format_compact_usd(markets.stats.global_market_cap)),
            ("24h Volume", format_compact_usd(markets.stats.volume_24h)),
            ("BTC Dominance", format!("{:.1}%", markets.stats.btc_dominance)),
            ("Active Cryptos", markets.active_cryptos_label()),
        ];
        for (column, (label, value)) in columns.iter_mut().zip(stats) {
            render_card(column, None, theme, |ui| {
                ui.colored_label(theme.colors.text_muted, label);
                ui.label(egui::RichText::new(value).size(18.0).strong());
            });
        }
    });
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let mut search = markets.search.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search coin name or symbol")
                .desired_width(240.0),
        );
        if response.changed() {
            app.handle_market_search(search);
        }

        egui::ComboBox::from_id_salt("market_filter")
            .selected_text(markets.filter.label())
            .show_ui(ui, |ui| {
                for filter in MarketFilter::all() {
                    if ui.selectable_label(markets.filter == *filter, filter.label()).clicked() {
                        app.handle_market_filter(*filter);
                    }
                }
            });

        egui::ComboBox::from_id_salt("market_sort")
            .selected_text(markets.sort.label())
            .show_ui(ui, |ui| {
                for sort in MarketSort::all() {
                    if ui.selectable_label(markets.sort == *sort, sort.label()).clicked() {
                        app.handle_market_sort(*sort);
                    }
                }
            });
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        for tab in [MarketTab::AllCoins, MarketTab::Favorites] {
            if ui.selectable_label(markets.tab == tab, tab.label()).clicked() {
                app.handle_market_tab(tab);
            }
        }
    });
    ui.separator();

    let rows = markets.tab_rows();
    if rows.is_empty() {
        let message = match markets.tab {
            MarketTab::Favorites => NO_FAVORITES_MESSAGE,
            MarketTab::AllCoins => "No coins match your search.",
        };
        render_empty_state(ui, message, None, theme);
        return;
    }

    ui.push_id("markets_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(28.0))
            .column(Column::remainder().at_least(160.0))
            .column(Column::auto().at_least(110.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(110.0))
            .column(Column::auto().at_least(110.0))
            .column(Column::auto().at_least(70.0))
            .header(24.0, |mut header| {
                for title in ["", "Name", "Price", "24h %", "24h Volume", "Market Cap", ""] {
                    header.col(|ui| {
                        ui.colored_label(theme.colors.text_muted, title);
                    });
                }
            })
            .body(|mut body| {
                for listing in &rows {
                    body.row(32.0, |mut row| {
                        row.col(|ui| {
                            let (star, color) = if listing.is_favorite {
                                ("★", theme.colors.warning)
                            } else {
                                ("☆", theme.colors.text_muted)
                            };
                            if ui.add(egui::Button::new(egui::RichText::new(star).color(color)).frame(false)).clicked() {
                                app.handle_toggle_favorite(&listing.id);
                            }
                        });
                        row.col(|ui| {
                            ui.label(egui::RichText::new(&listing.name).strong());
                            ui.colored_label(theme.colors.text_muted, &listing.symbol);
                        });
                        row.col(|ui| {
                            ui.label(format_usd(listing.price, 2));
                        });
                        row.col(|ui| {
                            let (text, color) = theme.format_price_change(listing.change_24h);
                            ui.colored_label(color, text);
                        });
                        row.col(|ui| {
                            ui.label(format_compact_usd(listing.volume_24h));
                        });
                        row.col(|ui| {
                            ui.label(format_compact_usd(listing.market_cap));
                        });
                        row.col(|ui| {
                            if ui.button("Trade").clicked() {
                                app.navigate("/trading");
                            }
                        });
                    });
                }
            });
    });
}
