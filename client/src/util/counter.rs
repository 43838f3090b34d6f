//! Count-up animation for the hero statistics.
//!
//! The value follows a cubic ease-out from zero to the target over a fixed
//! duration. Frame scheduling lives in `components::hero`.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// One hero statistic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub end: u32,
    pub duration_ms: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const HERO_COUNTERS: [CounterSpec; 3] = [
    CounterSpec { end: 20, duration_ms: 2000, suffix: "+", label: "Años de experiencia" },
    CounterSpec { end: 500, duration_ms: 2500, suffix: "+", label: "Familias felices" },
    CounterSpec { end: 300, duration_ms: 2200, suffix: "+", label: "Clientes satisfechos" },
];

/// `1 - (1 - p)^3` for `p` clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

impl CounterSpec {
    /// Displayed value after `elapsed_ms`.
    #[must_use]
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        if self.duration_ms == 0 {
            return self.end;
        }
        let progress = elapsed_ms / f64::from(self.duration_ms);
        let value = (ease_out_cubic(progress) * f64::from(self.end)).floor();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = value as u32;
        value.min(self.end)
    }

    #[must_use]
    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= f64::from(self.duration_ms)
    }
}
