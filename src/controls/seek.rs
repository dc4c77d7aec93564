// SPDX-License-Identifier: MPL-2.0
//! Seek track geometry and the percentage math behind the progress and
//! buffer bars.

/// Horizontal extent of the seek track, in the same units as pointer X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub left: f32,
    pub width: f32,
}

impl TrackGeometry {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Fraction of the track under `pointer_x`, clamped to `[0, 1]`.
    ///
    /// A collapsed track (zero or negative width) maps everything to 0.
    #[must_use]
    pub fn fraction_at(&self, pointer_x: f32) -> f64 {
        if self.width.is_nan() || self.width <= 0.0 || !pointer_x.is_finite() {
            return 0.0;
        }
        f64::from((pointer_x - self.left) / self.width).clamp(0.0, 1.0)
    }

    /// Pointer offset from the track start, clamped to the track.
    #[must_use]
    pub fn offset_at(&self, pointer_x: f32) -> f32 {
        (pointer_x - self.left).clamp(0.0, self.width.max(0.0))
    }
}

/// Returns the duration only when it is known and positive.
#[must_use]
pub fn known_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}

/// Playback position as a percentage of the duration.
#[must_use]
pub fn progress_percent(current: f64, duration: Option<f64>) -> Option<f64> {
    known_duration(duration).map(|d| (current / d * 100.0).clamp(0.0, 100.0))
}

/// Buffered range end as a percentage of the duration.
#[must_use]
pub fn buffered_percent(buffered_end: Option<f64>, duration: Option<f64>) -> Option<f64> {
    let end = buffered_end?;
    known_duration(duration).map(|d| (end / d * 100.0).clamp(0.0, 100.0))
}
