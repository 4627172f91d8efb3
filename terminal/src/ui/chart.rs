//! # Chart Module
//!
//! egui_plot renderers for the trading page candles and depth book and the wallet
//! allocation chart.

use egui;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};
use tracing::trace;

use crate::pages::wallet::Allocation;
use crate::trading::market_data::{ChartData, DepthBook};
use crate::ui::theme::Theme;

const BODY_WIDTH: f64 = 0.4;

/// Candlestick chart for the demo series
pub fn render_candlestick_chart(ui: &mut egui::Ui, chart: &ChartData, theme: &Theme) {
    if chart.candles.is_empty() {
        ui.colored_label(theme.colors.text_muted, "No chart data available");
        return;
    }

    trace!(candle_count = chart.candles.len(), "Rendering candlestick chart");

    let (min_price, max_price) = chart.price_range();
    let padding = (max_price - min_price) * 0.1;

    Plot::new("candlestick_chart")
        .height(320.0)
        .include_y(min_price - padding)
        .include_y(max_price + padding)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (idx, candle) in chart.candles.iter().enumerate() {
                let x = idx as f64;
                let color = if candle.is_bullish() {
                    theme.colors.gain
                } else {
                    theme.colors.loss
                };

                plot_ui.line(
                    Line::new("wick", PlotPoints::from(vec![[x, candle.low], [x, candle.high]]))
                        .color(color)
                        .width(1.0),
                );

                let top = candle.open.max(candle.close);
                let bottom = candle.open.min(candle.close);
                let body = vec![
                    [x - BODY_WIDTH / 2.0, bottom],
                    [x - BODY_WIDTH / 2.0, top],
                    [x + BODY_WIDTH / 2.0, top],
                    [x + BODY_WIDTH / 2.0, bottom],
                    [x - BODY_WIDTH / 2.0, bottom],
                ];
                plot_ui.line(Line::new("body", PlotPoints::from(body)).color(color).width(3.0));
            }
        });

    if let Some(last) = chart.candles.back() {
        ui.horizontal(|ui| {
            ui.label(format!("Last: {}", shared::utils::format_usd(last.close, 2)));
            if let Some(change) = chart.change_percentage() {
                let (text, color) = theme.format_price_change(change);
                ui.colored_label(color, text);
            }
        });
    }
}

/// Cumulative depth curves, bids left of the mid price and asks right of it
pub fn render_depth_chart(ui: &mut egui::Ui, depth: &DepthBook, theme: &Theme) {
    if depth.bids.is_empty() && depth.asks.is_empty() {
        ui.colored_label(theme.colors.text_muted, "No depth data available");
        return;
    }

    let bids: Vec<[f64; 2]> = depth.bids.iter().rev().map(|l| [l.price, l.cumulative]).collect();
    let asks: Vec<[f64; 2]> = depth.asks.iter().map(|l| [l.price, l.cumulative]).collect();

    Plot::new("depth_chart")
        .height(160.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Bids", PlotPoints::from(bids))
                    .color(theme.colors.gain)
                    .fill(0.0),
            );
            plot_ui.line(
                Line::new("Asks", PlotPoints::from(asks))
                    .color(theme.colors.loss)
                    .fill(0.0),
            );
        });

    if let Some(spread) = depth.spread() {
        ui.colored_label(
            theme.colors.text_muted,
            format!("Spread: {}", shared::utils::format_number(spread, 2)),
        );
    }
}

/// One bar per holding, height = share of the portfolio in percent
pub fn render_allocation_chart(ui: &mut egui::Ui, allocations: &[Allocation]) {
    let bars: Vec<Bar> = allocations
        .iter()
        .enumerate()
        .map(|(idx, a)| {
            let [r, g, b] = a.color;
            Bar::new(idx as f64, a.share)
                .name(format!("{} {:.1}%", a.symbol, a.share))
                .fill(egui::Color32::from_rgb(r, g, b))
        })
        .collect();

    Plot::new("allocation_chart")
        .height(180.0)
        .allow_scroll(false)
        .allow_drag(false)
        .include_y(0.0)
        .include_y(100.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("Allocation", bars).width(0.6));
        });
}
