//! # Animated Value Widget
//!
//! Count-up label for financial figures. When the target changes, the label eases from
//! whatever it currently shows to the new value over [`DURATION_SECS`].

use egui::RichText;

/// Length of one count-up
pub const DURATION_SECS: f64 = 1.5;

/// Exponential ease-out, normalized so that `ease_out_expo(1.0) == 1.0`
pub fn ease_out_expo(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return 1.0;
    }
    (1.0 - 2f64.powf(-10.0 * t)) * 1024.0 / 1023.0
}

/// Prefix, suffix and fixed decimals for the displayed number
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueFormat {
    pub prefix: String,
    pub suffix: String,
    pub decimals: usize,
}

impl ValueFormat {
    pub fn usd() -> Self {
        Self {
            prefix: "$".to_string(),
            suffix: String::new(),
            decimals: 2,
        }
    }

    pub fn new(prefix: &str, suffix: &str, decimals: usize) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            decimals,
        }
    }

    pub fn format(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            shared::utils::format_number(value, self.decimals),
            self.suffix
        )
    }
}

/// One count-up in progress, keyed by widget id in egui memory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    from: f64,
    to: f64,
    started_at: f64,
}

impl CountUp {
    pub fn new(from: f64, to: f64, now: f64) -> Self {
        Self { from, to, started_at: now }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Value to display at time `now` (seconds)
    pub fn value_at(&self, now: f64) -> f64 {
        let t = (now - self.started_at) / DURATION_SECS;
        self.from + (self.to - self.from) * ease_out_expo(t)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now - self.started_at >= DURATION_SECS
    }

    /// Restart from the currently displayed value when the target moves
    pub fn retarget(&mut self, to: f64, now: f64) {
        if to != self.to {
            *self = Self::new(self.value_at(now), to, now);
        }
    }
}

/// Render `value` as a count-up label. The first render counts up from zero.
pub fn render_animated_value(
    ui: &mut egui::Ui,
    id_salt: &str,
    value: f64,
    format: &ValueFormat,
    size: f32,
) -> egui::Response {
    let id = ui.id().with(id_salt);
    let now = ui.input(|i| i.time);

    let mut count_up = ui
        .ctx()
        .data_mut(|d| d.get_temp::<CountUp>(id))
        .unwrap_or_else(|| CountUp::new(0.0, value, now));
    count_up.retarget(value, now);

    let shown = count_up.value_at(now);
    if !count_up.is_finished(now) {
        ui.ctx().request_repaint();
    }
    ui.ctx().data_mut(|d| d.insert_temp(id, count_up));

    ui.label(RichText::new(format.format(shown)).size(size).strong())
}
