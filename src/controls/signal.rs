// SPDX-License-Identifier: MPL-2.0
//! Output of the player towards the presentation layer.

use super::skip::SkipDirection;
use super::volume::VolumeIcon;

/// A presentation update produced while handling one input.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// The controls overlay was shown (`true`) or hidden.
    ControlsVisible(bool),
    /// Progress bar fill, in percent.
    Progress(f64),
    /// Buffer bar fill, in percent.
    Buffer(f64),
    /// `current / duration` text.
    TimeDisplay(String),
    /// Tooltip text above the seek track and its offset from the track start.
    HoverTime { text: String, offset: f32 },
    HoverTimeVisible(bool),
    /// Playback state for the play button and the centered play overlay.
    Playing(bool),
    /// Volume slider position and icon band.
    Volume { level: f64, icon: VolumeIcon },
    /// Fullscreen button state.
    Fullscreen(bool),
    /// Transient skip indicator shown with the jump length.
    SkipIndicator {
        direction: SkipDirection,
        seconds: f64,
    },
    SkipIndicatorHidden(SkipDirection),
    SpeedMenuOpen(bool),
    /// Preset highlighted in the speed menu.
    ActiveSpeed(f64),
    /// Whether the seek track accepts input.
    TrackEnabled(bool),
}
