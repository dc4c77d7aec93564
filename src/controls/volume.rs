// SPDX-License-Identifier: MPL-2.0
//! Volume domain type and the volume icon bands.

use crate::config::{MAX_VOLUME, MIN_VOLUME, VOLUME_HIGH_THRESHOLD};

/// Distance under which a stepped level is pulled onto the step grid.
const GRID_SNAP_EPSILON: f64 = 1e-9;

/// Volume level, guaranteed to be within `[0.0, 1.0]`.
///
/// # Example
///
/// ```
/// use vidskin::controls::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// assert_eq!(Volume::new(f64::NAN).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f64) -> Self {
        if volume.is_nan() {
            return Self(MIN_VOLUME);
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true for a zero level; setting this level also mutes.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 <= MIN_VOLUME
    }

    /// Raises the level by `step`, clamping to maximum.
    #[must_use]
    pub fn increase(self, step: f64) -> Self {
        Self::new(snap_to_grid(self.0 + step, step))
    }

    /// Lowers the level by `step`, clamping to minimum.
    #[must_use]
    pub fn decrease(self, step: f64) -> Self {
        Self::new(snap_to_grid(self.0 - step, step))
    }
}

/// Drops the float drift accumulated by repeated steps.
///
/// Levels that sit between grid points (set from the slider) are kept.
fn snap_to_grid(level: f64, step: f64) -> f64 {
    if !(step.is_finite() && step > 0.0) {
        return level;
    }
    let grid = (level / step).round() * step;
    if (level - grid).abs() < GRID_SNAP_EPSILON {
        grid
    } else {
        level
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(crate::config::DEFAULT_VOLUME)
    }
}

/// Volume icon shown on the mute button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    High,
}

impl VolumeIcon {
    /// Picks the icon band for a level and mute flag.
    #[must_use]
    pub fn for_level(level: Volume, muted: bool) -> Self {
        if muted || level.is_silent() {
            VolumeIcon::Muted
        } else if level.value() < VOLUME_HIGH_THRESHOLD {
            VolumeIcon::Low
        } else {
            VolumeIcon::High
        }
    }
}
