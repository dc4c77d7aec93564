// SPDX-License-Identifier: MPL-2.0
//! In-memory host collaborators.
//!
//! [`SimulatedMedia`] plays a virtual clip: a clock advanced by the host
//! loop, a buffered range growing ahead of it, and a queue of
//! [`MediaEvent`]s the loop drains and feeds back to the player.
//! [`SimulatedFullscreen`] and [`SimulatedOrientation`] record requests
//! through shared handles so the loop (or a test) can apply them.

use super::{FullscreenProvider, MediaElement, MediaEvent, OrientationLock};
use crate::error::{HostError, HostRequest};
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

/// Seconds of media buffered per second of wall time.
const BUFFER_RATE: f64 = 4.0;

/// A media element without a decoder.
#[derive(Debug, Clone)]
pub struct SimulatedMedia {
    clip_duration: f64,
    loaded: bool,
    load_remaining: Duration,
    current_time: f64,
    paused: bool,
    muted: bool,
    volume: f64,
    playback_rate: f64,
    buffered_end: Option<f64>,
    picture_in_picture: bool,
    pip_supported: bool,
    rejected_play: Option<String>,
    events: VecDeque<MediaEvent>,
}

impl SimulatedMedia {
    /// A clip of `duration` seconds whose metadata loads on the first
    /// [`advance`](Self::advance).
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            clip_duration: duration.max(0.0),
            loaded: false,
            load_remaining: Duration::ZERO,
            current_time: 0.0,
            paused: true,
            muted: false,
            volume: 1.0,
            playback_rate: 1.0,
            buffered_end: None,
            picture_in_picture: false,
            pip_supported: true,
            rejected_play: None,
            events: VecDeque::new(),
        }
    }

    /// Delays metadata loading by `delay` of advanced time.
    #[must_use]
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_remaining = delay;
        self
    }

    /// Removes picture-in-picture support.
    #[must_use]
    pub fn without_picture_in_picture(mut self) -> Self {
        self.pip_supported = false;
        self
    }

    /// Makes the next `play()` fail, as an autoplay policy would.
    pub fn reject_next_play(&mut self, reason: impl Into<String>) {
        self.rejected_play = Some(reason.into());
    }

    /// Starts playback at `seconds` without going through `play()`.
    pub fn start_at(&mut self, seconds: f64) {
        self.set_current_time(seconds);
        if self.paused {
            self.paused = false;
            self.events.push_back(MediaEvent::Played);
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Advances the clock by `elapsed` wall time.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.loaded {
            self.load_remaining = self.load_remaining.saturating_sub(elapsed);
            if self.load_remaining.is_zero() {
                self.loaded = true;
                log::debug!("simulated media loaded ({}s)", self.clip_duration);
                self.events.push_back(MediaEvent::MetadataLoaded);
                self.events.push_back(MediaEvent::CanPlay);
            }
            return;
        }

        let secs = elapsed.as_secs_f64();
        let buffered = self.buffered_end.unwrap_or(0.0);
        if buffered < self.clip_duration {
            let target = (buffered.max(self.current_time) + secs * BUFFER_RATE).min(self.clip_duration);
            self.buffered_end = Some(target);
            self.events.push_back(MediaEvent::BufferProgress);
        }

        if self.paused {
            return;
        }
        self.current_time = (self.current_time + secs * self.playback_rate).min(self.clip_duration);
        self.events.push_back(MediaEvent::TimeUpdated);
        if self.current_time >= self.clip_duration {
            self.paused = true;
            self.events.push_back(MediaEvent::Paused);
        }
    }

    /// Removes and returns the queued notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<MediaEvent> {
        self.events.drain(..).collect()
    }
}

impl MediaElement for SimulatedMedia {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let upper = if self.loaded { self.clip_duration } else { 0.0 };
        self.current_time = if seconds.is_finite() {
            seconds.clamp(0.0, upper)
        } else {
            0.0
        };
        self.events.push_back(MediaEvent::TimeUpdated);
    }

    fn duration(&self) -> Option<f64> {
        self.loaded.then_some(self.clip_duration)
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) -> Result<(), HostError> {
        if let Some(reason) = self.rejected_play.take() {
            return Err(HostError::rejected(HostRequest::Play, reason));
        }
        if !self.loaded {
            return Err(HostError::rejected(HostRequest::Play, "media not ready"));
        }
        if self.current_time >= self.clip_duration {
            self.current_time = 0.0;
        }
        if self.paused {
            self.paused = false;
            self.events.push_back(MediaEvent::Played);
        }
        Ok(())
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.events.push_back(MediaEvent::Paused);
        }
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        if rate > 0.0 {
            self.playback_rate = rate;
        }
    }

    fn buffered_end(&self) -> Option<f64> {
        self.buffered_end
    }

    fn is_picture_in_picture(&self) -> bool {
        self.picture_in_picture
    }

    fn request_picture_in_picture(&mut self) -> Result<(), HostError> {
        if !self.pip_supported {
            return Err(HostError::Unsupported(HostRequest::EnterPictureInPicture));
        }
        self.picture_in_picture = true;
        Ok(())
    }

    fn exit_picture_in_picture(&mut self) -> Result<(), HostError> {
        if !self.picture_in_picture {
            return Err(HostError::rejected(
                HostRequest::ExitPictureInPicture,
                "not in picture-in-picture",
            ));
        }
        self.picture_in_picture = false;
        Ok(())
    }
}

/// Host side of a [`SimulatedFullscreen`] provider.
#[derive(Debug, Clone, Default)]
pub struct FullscreenHandle {
    active: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<bool>>>,
}

impl FullscreenHandle {
    /// Takes the mode requested since the last call.
    pub fn take_request(&self) -> Option<bool> {
        self.pending.take()
    }

    /// Records the mode the host actually switched to.
    pub fn set_active(&self, active: bool) {
        self.active.set(active);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

/// Fullscreen provider that records requests for the host to apply.
#[derive(Debug, Clone)]
pub struct SimulatedFullscreen {
    name: &'static str,
    supported: bool,
    handle: FullscreenHandle,
}

impl SimulatedFullscreen {
    /// A supported provider plus the handle the host applies requests with.
    #[must_use]
    pub fn new(name: &'static str) -> (Self, FullscreenHandle) {
        let handle = FullscreenHandle::default();
        let provider = Self {
            name,
            supported: true,
            handle: handle.clone(),
        };
        (provider, handle)
    }

    /// A provider the host does not expose.
    #[must_use]
    pub fn unsupported(name: &'static str) -> Self {
        Self {
            name,
            supported: false,
            handle: FullscreenHandle::default(),
        }
    }
}

impl FullscreenProvider for SimulatedFullscreen {
    fn name(&self) -> &str {
        self.name
    }

    fn is_supported(&self) -> bool {
        self.supported
    }

    fn request(&mut self) -> Result<(), HostError> {
        self.handle.pending.set(Some(true));
        Ok(())
    }

    fn exit(&mut self) -> Result<(), HostError> {
        self.handle.pending.set(Some(false));
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.handle.active.get()
    }
}

/// Orientation lock that records whether landscape is locked.
#[derive(Debug, Clone, Default)]
pub struct SimulatedOrientation {
    locked: Rc<Cell<bool>>,
    lock_calls: Rc<Cell<u32>>,
}

impl SimulatedOrientation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// Number of landscape lock requests received.
    #[must_use]
    pub fn lock_calls(&self) -> u32 {
        self.lock_calls.get()
    }
}

impl OrientationLock for SimulatedOrientation {
    fn lock_landscape(&mut self) -> Result<(), HostError> {
        self.lock_calls.set(self.lock_calls.get() + 1);
        self.locked.set(true);
        Ok(())
    }

    fn unlock(&mut self) -> Result<(), HostError> {
        self.locked.set(false);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn loaded(duration: f64) -> SimulatedMedia {
        let mut media = SimulatedMedia::new(duration);
        media.advance(Duration::ZERO);
        media.take_events();
        media
    }

    #[test]
    fn metadata_loads_after_delay() {
        let mut media = SimulatedMedia::new(60.0).with_load_delay(Duration::from_millis(200));
        assert_eq!(media.duration(), None);

        media.advance(Duration::from_millis(100));
        assert!(!media.is_loaded());
        assert!(media.take_events().is_empty());

        media.advance(Duration::from_millis(100));
        assert_eq!(media.duration(), Some(60.0));
        assert_eq!(
            media.take_events(),
            vec![MediaEvent::MetadataLoaded, MediaEvent::CanPlay]
        );
    }

    #[test]
    fn playing_advances_clock_by_rate() {
        let mut media = loaded(60.0);
        media.play().unwrap();
        media.set_playback_rate(2.0);
        media.advance(Duration::from_secs(1));

        assert_abs_diff_eq!(media.current_time(), 2.0);
        assert!(media.take_events().contains(&MediaEvent::TimeUpdated));
    }

    #[test]
    fn reaching_the_end_pauses() {
        let mut media = loaded(1.0);
        media.play().unwrap();
        media.advance(Duration::from_secs(2));

        assert!(media.paused());
        assert_abs_diff_eq!(media.current_time(), 1.0);
        assert!(media.take_events().contains(&MediaEvent::Paused));

        media.play().unwrap();
        assert_abs_diff_eq!(media.current_time(), 0.0);
    }

    #[test]
    fn buffer_grows_ahead_and_stops_at_duration() {
        let mut media = loaded(10.0);
        media.advance(Duration::from_secs(1));
        assert_eq!(media.buffered_end(), Some(4.0));

        media.advance(Duration::from_secs(5));
        assert_eq!(media.buffered_end(), Some(10.0));
        media.take_events();

        media.advance(Duration::from_secs(1));
        assert!(media.take_events().is_empty());
    }

    #[test]
    fn rejected_play_fails_once() {
        let mut media = loaded(10.0);
        media.reject_next_play("blocked by autoplay policy");

        let err = media.play().unwrap_err();
        assert_eq!(err.request(), HostRequest::Play);
        assert!(media.paused());
        assert!(media.play().is_ok());
    }

    #[test]
    fn play_before_load_is_rejected() {
        let mut media = SimulatedMedia::new(10.0).with_load_delay(Duration::from_secs(1));
        assert!(media.play().is_err());
    }

    #[test]
    fn seeking_clamps_to_clip() {
        let mut media = loaded(30.0);
        media.set_current_time(45.0);
        assert_abs_diff_eq!(media.current_time(), 30.0);
        media.set_current_time(-3.0);
        assert_abs_diff_eq!(media.current_time(), 0.0);
    }

    #[test]
    fn picture_in_picture_can_be_unsupported() {
        let mut media = loaded(10.0).without_picture_in_picture();
        assert_eq!(
            media.request_picture_in_picture(),
            Err(HostError::Unsupported(HostRequest::EnterPictureInPicture))
        );

        let mut media = loaded(10.0);
        media.request_picture_in_picture().unwrap();
        assert!(media.is_picture_in_picture());
        media.exit_picture_in_picture().unwrap();
        assert!(!media.is_picture_in_picture());
    }

    #[test]
    fn fullscreen_requests_wait_for_the_host() {
        let (mut provider, handle) = SimulatedFullscreen::new("window");
        provider.request().unwrap();
        assert!(!provider.is_active());

        assert_eq!(handle.take_request(), Some(true));
        handle.set_active(true);
        assert!(provider.is_active());
        assert_eq!(handle.take_request(), None);
    }

    #[test]
    fn orientation_records_lock_state() {
        let orientation = SimulatedOrientation::new();
        let mut lock = orientation.clone();
        lock.lock_landscape().unwrap();
        assert!(orientation.is_locked());
        assert_eq!(orientation.lock_calls(), 1);
        lock.unlock().unwrap();
        assert!(!orientation.is_locked());
    }
}
