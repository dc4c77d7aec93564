// SPDX-License-Identifier: MPL-2.0
//! Contracts of the host collaborators the player drives.
//!
//! The player never talks to a platform directly. It reads and writes the
//! media element through [`MediaElement`], asks for fullscreen through a
//! ranked [`FullscreenChain`], and locks orientation through
//! [`OrientationLock`]. Notifications from the host come back as
//! [`MediaEvent`]s.

pub mod fullscreen;
pub mod orientation;
pub mod simulated;

pub use fullscreen::{FullscreenChain, FullscreenProvider};
pub use orientation::{NoOrientationLock, OrientationLock, Viewport};
pub use simulated::{FullscreenHandle, SimulatedFullscreen, SimulatedMedia, SimulatedOrientation};

use crate::error::HostError;

/// The native media element wrapped by the player.
///
/// Times are in seconds. `duration` is `None` until metadata is known.
pub trait MediaElement {
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    fn duration(&self) -> Option<f64>;

    fn paused(&self) -> bool;

    /// Asks the host to start playback.
    ///
    /// Hosts that resolve the request later return `Ok` here and report a
    /// refusal through [`MediaEvent::RequestFailed`].
    fn play(&mut self) -> Result<(), HostError>;
    fn pause(&mut self);

    fn muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);

    /// End of the last contiguous buffered range, if anything is buffered.
    fn buffered_end(&self) -> Option<f64>;

    /// Whether this element is the current picture-in-picture target.
    fn is_picture_in_picture(&self) -> bool;
    fn request_picture_in_picture(&mut self) -> Result<(), HostError>;
    fn exit_picture_in_picture(&mut self) -> Result<(), HostError>;
}

/// Notifications emitted by the media element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback started.
    Played,
    /// Playback paused (including reaching the end).
    Paused,
    /// The playback position advanced.
    TimeUpdated,
    /// Duration and dimensions are known.
    MetadataLoaded,
    /// Enough data is available to start playing.
    CanPlay,
    /// The resource failed to load.
    LoadError,
    /// More data was buffered.
    BufferProgress,
    /// An asynchronous request resolved with a failure.
    RequestFailed(HostError),
}
