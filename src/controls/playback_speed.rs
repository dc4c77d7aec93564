// SPDX-License-Identifier: MPL-2.0
//! Playback speed presets offered by the speed menu.
//!
//! Rates are never clamped or interpolated: a rate is either one of the
//! enumerated presets or it is refused.

use crate::config::{DEFAULT_SPEED_PRESETS, NORMAL_PLAYBACK_SPEED};

/// Tolerance used to match a requested rate against a preset.
const PRESET_MATCH_EPSILON: f64 = 1e-6;

/// The enumerated set of allowed playback rates, sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedPresets {
    rates: Vec<f64>,
}

impl SpeedPresets {
    /// Builds the preset set; non-positive or non-finite rates are dropped.
    ///
    /// Falls back to the default presets when nothing usable remains.
    #[must_use]
    pub fn new(rates: &[f64]) -> Self {
        let mut rates: Vec<f64> = rates
            .iter()
            .copied()
            .filter(|r| r.is_finite() && *r > 0.0)
            .collect();
        rates.sort_by(f64::total_cmp);
        rates.dedup();
        if rates.is_empty() {
            rates = DEFAULT_SPEED_PRESETS.to_vec();
        }
        Self { rates }
    }

    /// Returns the matching preset, if `rate` is a member of the set.
    #[must_use]
    pub fn resolve(&self, rate: f64) -> Option<f64> {
        self.rates
            .iter()
            .copied()
            .find(|p| (p - rate).abs() < PRESET_MATCH_EPSILON)
    }

    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }
}

impl Default for SpeedPresets {
    fn default() -> Self {
        Self::new(&DEFAULT_SPEED_PRESETS)
    }
}

/// Returns true when `rate` is the normal 1x rate.
#[must_use]
pub fn is_normal(rate: f64) -> bool {
    (rate - NORMAL_PLAYBACK_SPEED).abs() < PRESET_MATCH_EPSILON
}

/// Formats a rate for the speed button and menu (`1x`, `1.25x`, `0.5x`).
#[must_use]
pub fn format_rate(rate: f64) -> String {
    let text = format!("{rate:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}x")
}
