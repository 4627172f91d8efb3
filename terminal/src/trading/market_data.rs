//! # Demo Market Data
//!
//! Random-walk candles and a synthetic order book for the trading page charts.
//! Nothing here is live; both are regenerated from the pair's listed price.

use rand::Rng;
use std::collections::VecDeque;

/// OHLCV candlestick data point
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

/// Chart timeframe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    FifteenMinutes,
    OneHour,
    FourHours,
    OneDay,
}

impl Timeframe {
    pub fn all() -> &'static [Timeframe] {
        &[
            Timeframe::FifteenMinutes,
            Timeframe::OneHour,
            Timeframe::FourHours,
            Timeframe::OneDay,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::FifteenMinutes => "15m",
            Timeframe::OneHour => "1H",
            Timeframe::FourHours => "4H",
            Timeframe::OneDay => "1D",
        }
    }

    pub fn seconds(&self) -> i64 {
        match self {
            Timeframe::FifteenMinutes => 900,
            Timeframe::OneHour => 3600,
            Timeframe::FourHours => 14400,
            Timeframe::OneDay => 86400,
        }
    }
}

/// Chart state and data
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub candles: VecDeque<Candle>,
    pub timeframe: Timeframe,
    pub symbol: String,
    pub base_price: f64,
    pub max_candles: usize,
}

impl ChartData {
    pub fn new(symbol: impl Into<String>, base_price: f64) -> Self {
        Self {
            candles: VecDeque::with_capacity(100),
            timeframe: Timeframe::OneHour,
            symbol: symbol.into(),
            base_price,
            max_candles: 100,
        }
    }

    /// Add a new candle
    pub fn add_candle(&mut self, candle: Candle) {
        self.candles.push_back(candle);
        while self.candles.len() > self.max_candles {
            self.candles.pop_front();
        }
    }

    /// Switch timeframe and regenerate the series
    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        if self.timeframe != timeframe {
            self.timeframe = timeframe;
            self.generate_demo_data(self.max_candles);
        }
    }

    /// Get price range for visible candles, padded by 5%
    pub fn price_range(&self) -> (f64, f64) {
        if self.candles.is_empty() {
            return (0.0, 100.0);
        }

        let (min, max) = self
            .candles
            .iter()
            .fold((f64::MAX, f64::MIN), |(min, max), c| (min.min(c.low), max.max(c.high)));

        let padding = (max - min) * 0.05;
        (min - padding, max + padding)
    }

    /// Replace the series with `count` random-walk candles around the base price.
    ///
    /// Steps are proportional to the price so low-priced assets get a usable chart, and
    /// the walk stays within ±20% of the base.
    pub fn generate_demo_data(&mut self, count: usize) {
        let mut rng = rand::rng();

        let base_price = if self.base_price > 0.0 { self.base_price } else { 1.0 };
        let step = base_price * 0.01;
        let mut current_price = base_price;
        let now = chrono::Utc::now().timestamp();

        self.candles.clear();
        for i in 0..count {
            let timestamp = now - ((count - i - 1) as i64 * self.timeframe.seconds());

            current_price += rng.random_range(-step..step);
            current_price = current_price.clamp(base_price * 0.8, base_price * 1.2);

            let open = current_price;
            let close = (open + rng.random_range(-step * 0.6..step * 0.6))
                .clamp(base_price * 0.8, base_price * 1.2);
            let high = open.max(close) + rng.random_range(0.0..step * 0.4);
            let low = open.min(close) - rng.random_range(0.0..step * 0.4);
            let volume = rng.random_range(1000.0..10000.0);

            self.add_candle(Candle {
                timestamp,
                open,
                high,
                low,
                close,
                volume,
            });

            current_price = close;
        }
    }

    /// Change of the last candle versus the first, in percent
    pub fn change_percentage(&self) -> Option<f64> {
        let first = self.candles.front()?;
        let last = self.candles.back()?;
        if first.open == 0.0 {
            return None;
        }
        Some((last.close - first.open) / first.open * 100.0)
    }
}

/// One price level of the synthetic book
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthLevel {
    pub price: f64,
    pub size: f64,
    /// Running size from the mid price outwards
    pub cumulative: f64,
}

/// Synthetic order book around a mid price
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DepthBook {
    /// Best (highest) bid first
    pub bids: Vec<DepthLevel>,
    /// Best (lowest) ask first
    pub asks: Vec<DepthLevel>,
}

impl DepthBook {
    /// `levels` price levels per side, spaced 0.1% apart
    pub fn generate(mid_price: f64, levels: usize) -> Self {
        let mut rng = rand::rng();
        let tick = (mid_price * 0.001).max(f64::EPSILON);

        let mut side = |direction: f64| {
            let mut cumulative = 0.0;
            (1..=levels)
                .map(|i| {
                    let size = rng.random_range(0.1..5.0);
                    cumulative += size;
                    DepthLevel {
                        price: mid_price + direction * tick * i as f64,
                        size,
                        cumulative,
                    }
                })
                .collect::<Vec<_>>()
        };

        let bids = side(-1.0);
        let asks = side(1.0);
        Self { bids, asks }
    }

    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().map(|l| l.price)
    }

    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().map(|l| l.price)
    }

    pub fn spread(&self) -> Option<f64> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_candles_stay_near_base_price() {
        let mut chart = ChartData::new("BTC/USDT", 67000.5);
        chart.generate_demo_data(100);
        assert_eq!(chart.candles.len(), 100);
        for candle in &chart.candles {
            assert!(candle.close >= 67000.5 * 0.8 && candle.close <= 67000.5 * 1.2);
            assert!(candle.high >= candle.open.max(candle.close));
            assert!(candle.low <= candle.open.min(candle.close));
        }
        let (min, max) = chart.price_range();
        assert!(min < max);
    }

    #[test]
    fn test_candle_buffer_is_bounded() {
        let mut chart = ChartData::new("ADA/USDT", 0.45);
        chart.generate_demo_data(250);
        assert_eq!(chart.candles.len(), chart.max_candles);
    }

    #[test]
    fn test_timeframe_switch_regenerates() {
        let mut chart = ChartData::new("ETH/USDT", 3500.75);
        chart.generate_demo_data(10);
        chart.set_timeframe(Timeframe::OneDay);
        assert_eq!(chart.timeframe, Timeframe::OneDay);
        assert_eq!(chart.candles.len(), chart.max_candles);
        let stamps: Vec<i64> = chart.candles.iter().map(|c| c.timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[1] - w[0] == 86400));
    }

    #[test]
    fn test_depth_book_is_cumulative_and_ordered() {
        let book = DepthBook::generate(100.0, 20);
        assert_eq!(book.bids.len(), 20);
        assert_eq!(book.asks.len(), 20);
        assert!(book.best_bid().unwrap() < 100.0);
        assert!(book.best_ask().unwrap() > 100.0);
        assert!(book.spread().unwrap() > 0.0);
        assert!(book.bids.windows(2).all(|w| w[1].price < w[0].price && w[1].cumulative > w[0].cumulative));
        assert!(book.asks.windows(2).all(|w| w[1].price > w[0].price && w[1].cumulative > w[0].cumulative));
    }

    #[test]
    fn test_empty_chart_defaults() {
        let chart = ChartData::new("SOL/USDT", 150.2);
        assert_eq!(chart.price_range(), (0.0, 100.0));
        assert_eq!(chart.change_percentage(), None);
    }
}
