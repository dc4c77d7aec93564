// SPDX-License-Identifier: MPL-2.0
//! Render model of the player skin.
//!
//! The [`Surface`] holds exactly what the widgets draw. It changes only by
//! folding [`Signal`]s emitted by the player, so it can be tested without a
//! renderer.

use crate::controls::playback_speed::format_rate;
use crate::controls::time_format::format_time_display;
use crate::controls::{Signal, SkipDirection, VolumeIcon};
use crate::config::{DEFAULT_VOLUME, NORMAL_PLAYBACK_SPEED};

/// Tooltip shown above the seek track.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTime {
    pub text: String,
    /// Offset from the start of the track, in logical pixels.
    pub offset: f32,
    pub visible: bool,
}

/// Everything the control skin displays.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub controls_visible: bool,
    pub progress_percent: f64,
    pub buffer_percent: f64,
    pub time_display: String,
    pub hover: HoverTime,
    pub playing: bool,
    pub volume: f64,
    pub volume_icon: VolumeIcon,
    pub fullscreen: bool,
    /// Jump length shown by each skip indicator while it is visible.
    pub rewind_indicator: Option<f64>,
    pub forward_indicator: Option<f64>,
    pub speed_menu_open: bool,
    pub active_speed: f64,
    pub track_enabled: bool,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            controls_visible: true,
            progress_percent: 0.0,
            buffer_percent: 0.0,
            time_display: format_time_display(0.0, None),
            hover: HoverTime {
                text: String::new(),
                offset: 0.0,
                visible: false,
            },
            playing: false,
            volume: DEFAULT_VOLUME,
            volume_icon: VolumeIcon::High,
            fullscreen: false,
            rewind_indicator: None,
            forward_indicator: None,
            speed_menu_open: false,
            active_speed: NORMAL_PLAYBACK_SPEED,
            track_enabled: false,
        }
    }
}

impl Surface {
    pub fn apply(&mut self, signal: Signal) {
        match signal {
            Signal::ControlsVisible(visible) => self.controls_visible = visible,
            Signal::Progress(percent) => self.progress_percent = percent,
            Signal::Buffer(percent) => self.buffer_percent = percent,
            Signal::TimeDisplay(text) => self.time_display = text,
            Signal::HoverTime { text, offset } => {
                self.hover.text = text;
                self.hover.offset = offset;
            }
            Signal::HoverTimeVisible(visible) => self.hover.visible = visible,
            Signal::Playing(playing) => self.playing = playing,
            Signal::Volume { level, icon } => {
                self.volume = level;
                self.volume_icon = icon;
            }
            Signal::Fullscreen(active) => self.fullscreen = active,
            Signal::SkipIndicator { direction, seconds } => {
                *self.indicator_mut(direction) = Some(seconds);
            }
            Signal::SkipIndicatorHidden(direction) => *self.indicator_mut(direction) = None,
            Signal::SpeedMenuOpen(open) => self.speed_menu_open = open,
            Signal::ActiveSpeed(rate) => self.active_speed = rate,
            Signal::TrackEnabled(enabled) => self.track_enabled = enabled,
        }
    }

    pub fn apply_all(&mut self, signals: impl IntoIterator<Item = Signal>) {
        for signal in signals {
            self.apply(signal);
        }
    }

    /// The title bar appears once the media is loaded and then fades in and
    /// out together with the controls.
    #[must_use]
    pub fn title_bar_visible(&self) -> bool {
        self.track_enabled && self.controls_visible
    }

    /// The centered play overlay is shown whenever playback is paused.
    #[must_use]
    pub fn play_overlay_visible(&self) -> bool {
        !self.playing
    }

    #[must_use]
    pub fn speed_label(&self) -> String {
        format_rate(self.active_speed)
    }

    fn indicator_mut(&mut self, direction: SkipDirection) -> &mut Option<f64> {
        match direction {
            SkipDirection::Rewind => &mut self.rewind_indicator,
            SkipDirection::Forward => &mut self.forward_indicator,
        }
    }
}
