// SPDX-License-Identifier: MPL-2.0
//! One player instance: the visibility controller and the transport mapper
//! wired to their host collaborators.
//!
//! The host loop feeds [`Input`]s with the instant they happened and calls
//! [`Player::tick`] periodically so deadlines can fire. Every call returns
//! the [`Signal`]s the presentation layer should apply, in order.

use super::keyboard::{binding_for, Key, KeyAction};
use super::seek::TrackGeometry;
use super::signal::Signal;
use super::skip::SkipDirection;
use super::transport::{TouchZone, TransportMapper, UpdateContext};
use super::visibility::{self, Timings, VisibilityController};
use super::volume::{Volume, VolumeIcon};
use crate::config::PlayerSettings;
use crate::host::{
    FullscreenChain, MediaElement, MediaEvent, NoOrientationLock, OrientationLock, Viewport,
};
use std::time::Instant;

/// Raw input from the host, already resolved to the player region it hit.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    PointerMoved,
    PointerLeftPlayer,
    PointerEnteredControls,
    PointerLeftControls,
    Key(Key),
    /// Play button, video surface or centered overlay clicked.
    PlayClicked,
    SkipClicked(SkipDirection),
    Touch(TouchZone),
    /// Pointer pressed on the seek track; starts a drag.
    TrackPressed { x: f32, track: TrackGeometry },
    /// Pointer moved while the button is held.
    TrackDragged { x: f32, track: TrackGeometry },
    TrackReleased,
    TrackHovered { x: f32, track: TrackGeometry },
    TrackHoverChanged(bool),
    VolumeChanged(f64),
    MuteClicked,
    SpeedButtonClicked,
    SpeedSelected(f64),
    /// Click anywhere outside the speed button and menu.
    ClickedOutsideSpeedMenu,
    FullscreenClicked,
    PictureInPictureClicked,
    Media(MediaEvent),
    /// The host entered or left fullscreen.
    FullscreenChanged(bool),
    Resized(Viewport),
}

/// A player wrapping one media element.
pub struct Player<M: MediaElement> {
    media: M,
    visibility: VisibilityController,
    transport: TransportMapper,
    fullscreen: FullscreenChain,
    orientation: Box<dyn OrientationLock>,
    viewport: Viewport,
}

impl<M: MediaElement> Player<M> {
    /// Creates a player with no fullscreen provider and no orientation lock.
    pub fn new(media: M, settings: PlayerSettings) -> Self {
        Self {
            media,
            visibility: VisibilityController::new(Timings::from(&settings)),
            transport: TransportMapper::new(settings),
            fullscreen: FullscreenChain::new(),
            orientation: Box::new(NoOrientationLock),
            viewport: Viewport::default(),
        }
    }

    #[must_use]
    pub fn with_fullscreen(mut self, chain: FullscreenChain) -> Self {
        self.fullscreen = chain;
        self
    }

    #[must_use]
    pub fn with_orientation_lock(mut self, lock: impl OrientationLock + 'static) -> Self {
        self.orientation = Box::new(lock);
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn visibility(&self) -> &VisibilityController {
        &self.visibility
    }

    pub fn transport(&self) -> &TransportMapper {
        &self.transport
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Signals describing the current state, for a freshly built surface.
    pub fn snapshot(&self) -> Vec<Signal> {
        let level = Volume::new(self.media.volume());
        vec![
            Signal::ControlsVisible(self.visibility.controls_visible()),
            Signal::Playing(!self.media.paused()),
            Signal::Volume {
                level: level.value(),
                icon: VolumeIcon::for_level(level, self.media.muted()),
            },
            Signal::ActiveSpeed(self.media.playback_rate()),
            Signal::Fullscreen(self.visibility.is_fullscreen()),
            Signal::TrackEnabled(self.transport.is_loaded()),
        ]
    }

    /// Dispatches one input.
    pub fn handle(&mut self, input: Input, now: Instant) -> Vec<Signal> {
        let mut signals = Vec::new();

        let orientation_flipped = match &input {
            Input::Resized(viewport) => {
                let flipped = viewport.is_portrait() != self.viewport.is_portrait();
                self.viewport = *viewport;
                flipped
            }
            _ => false,
        };

        let (transport, mut ctx) = self.split(now, &mut signals);
        match input {
            Input::PointerMoved => ctx.notify_visibility(visibility::Message::PointerMoved),
            Input::PointerLeftPlayer => {
                ctx.notify_visibility(visibility::Message::PointerLeftPlayer);
            }
            Input::PointerEnteredControls => {
                ctx.notify_visibility(visibility::Message::PointerEnteredControls);
            }
            Input::PointerLeftControls => {
                ctx.notify_visibility(visibility::Message::PointerLeftControls);
            }
            Input::Key(key) => match binding_for(key).action {
                KeyAction::TogglePlay => transport.toggle_play(&mut ctx),
                KeyAction::Skip(direction) => transport.skip(direction, &mut ctx),
                KeyAction::VolumeUp => transport.volume_up(&mut ctx),
                KeyAction::VolumeDown => transport.volume_down(&mut ctx),
                KeyAction::ToggleMute => transport.toggle_mute(&mut ctx),
                KeyAction::ToggleFullscreen => transport.toggle_fullscreen(&mut ctx),
            },
            Input::PlayClicked => transport.toggle_play(&mut ctx),
            Input::SkipClicked(direction) => transport.skip(direction, &mut ctx),
            Input::Touch(zone) => transport.touch(zone, &mut ctx),
            Input::TrackPressed { x, track } => transport.begin_seek_drag(x, track, &mut ctx),
            Input::TrackDragged { x, track } => transport.continue_seek_drag(x, track, &mut ctx),
            Input::TrackReleased => transport.end_seek_drag(&mut ctx),
            Input::TrackHovered { x, track } => transport.hover_track(x, track, &mut ctx),
            Input::TrackHoverChanged(inside) => transport.track_hover_changed(inside, &mut ctx),
            Input::VolumeChanged(level) => transport.set_volume(level, &mut ctx),
            Input::MuteClicked => transport.toggle_mute(&mut ctx),
            Input::SpeedButtonClicked => transport.toggle_speed_menu(&mut ctx),
            Input::SpeedSelected(rate) => transport.set_speed(rate, &mut ctx),
            Input::ClickedOutsideSpeedMenu => transport.dismiss_speed_menu(&mut ctx),
            Input::FullscreenClicked => transport.toggle_fullscreen(&mut ctx),
            Input::PictureInPictureClicked => transport.toggle_picture_in_picture(&mut ctx),
            Input::Media(event) => transport.media_event(event, &mut ctx),
            Input::FullscreenChanged(active) => transport.fullscreen_changed(active, &mut ctx),
            Input::Resized(_) => {
                if orientation_flipped {
                    transport.orientation_changed(&mut ctx);
                }
            }
        }
        signals
    }

    /// Fires every deadline due at `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<Signal> {
        let mut signals = Vec::new();
        let (transport, mut ctx) = self.split(now, &mut signals);
        transport.tick(&mut ctx);
        ctx.notify_visibility(visibility::Message::Tick);
        signals
    }

    fn split<'a>(
        &'a mut self,
        now: Instant,
        signals: &'a mut Vec<Signal>,
    ) -> (&'a mut TransportMapper, UpdateContext<'a, M>) {
        let ctx = UpdateContext {
            media: &mut self.media,
            visibility: &mut self.visibility,
            fullscreen: &mut self.fullscreen,
            orientation: self.orientation.as_mut(),
            viewport: self.viewport,
            now,
            signals,
        };
        (&mut self.transport, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{FullscreenHandle, SimulatedFullscreen, SimulatedMedia};
    use crate::test_utils::{after, assert_abs_diff_eq};
    use std::time::Duration;

    fn player(duration: f64) -> (Player<SimulatedMedia>, FullscreenHandle) {
        let (provider, handle) = SimulatedFullscreen::new("window");
        let mut player = Player::new(SimulatedMedia::new(duration), PlayerSettings::default())
            .with_fullscreen(FullscreenChain::new().with(provider));
        pump(&mut player, Instant::now());
        (player, handle)
    }

    fn pump(player: &mut Player<SimulatedMedia>, now: Instant) -> Vec<Signal> {
        player.media_mut().advance(Duration::ZERO);
        let mut signals = Vec::new();
        for event in player.media_mut().take_events() {
            signals.extend(player.handle(Input::Media(event), now));
        }
        signals
    }

    #[test]
    fn loading_enables_track_and_time_display() {
        let (mut player, _) = {
            let (provider, handle) = SimulatedFullscreen::new("window");
            let player = Player::new(SimulatedMedia::new(90.0), PlayerSettings::default())
                .with_fullscreen(FullscreenChain::new().with(provider));
            (player, handle)
        };
        let signals = pump(&mut player, Instant::now());
        assert_eq!(
            signals,
            vec![
                Signal::TrackEnabled(true),
                Signal::TimeDisplay("00:00:00 / 00:01:30".to_string()),
            ]
        );
    }

    #[test]
    fn keys_dispatch_to_transport() {
        let (mut player, _) = player(60.0);
        let now = Instant::now();

        player.handle(Input::Key(Key::Space), now);
        assert!(!player.media().paused());

        player.handle(Input::Key(Key::KeyM), now);
        assert!(player.media().muted());

        player.handle(Input::Key(Key::ArrowDown), now);
        assert_abs_diff_eq!(player.media().volume(), 0.9);
        assert!(!player.media().muted());

        player.handle(Input::Key(Key::ArrowRight), now);
        assert_abs_diff_eq!(player.media().current_time(), 10.0);
    }

    #[test]
    fn fullscreen_key_goes_through_the_host() {
        let (mut player, handle) = player(60.0);
        let now = Instant::now();

        player.handle(Input::Key(Key::KeyF), now);
        assert_eq!(handle.take_request(), Some(true));
        handle.set_active(true);
        let signals = player.handle(Input::FullscreenChanged(true), now);
        assert!(signals.contains(&Signal::Fullscreen(true)));
        assert!(player.visibility().is_fullscreen());

        player.handle(Input::Key(Key::KeyF), now);
        assert_eq!(handle.take_request(), Some(false));
    }

    #[test]
    fn idle_fullscreen_playback_hides_then_pointer_shows() {
        let (mut player, _) = player(600.0);
        let t0 = Instant::now();
        player.handle(Input::PlayClicked, t0);
        pump(&mut player, t0);
        player.handle(Input::FullscreenChanged(true), t0);

        assert!(player.tick(after(t0, 2999)).is_empty());
        assert_eq!(
            player.tick(after(t0, 3000)),
            vec![Signal::ControlsVisible(false)]
        );

        let signals = player.handle(Input::PointerMoved, after(t0, 4000));
        assert_eq!(signals, vec![Signal::ControlsVisible(true)]);
    }

    #[test]
    fn resize_only_reacts_to_orientation_flips() {
        let (mut player, _) = player(60.0);
        let now = Instant::now();
        assert!(player
            .handle(Input::Resized(Viewport::new(1024.0, 600.0)), now)
            .is_empty());
        assert_eq!(player.viewport(), Viewport::new(1024.0, 600.0));
    }

    #[test]
    fn snapshot_reflects_media_state() {
        let (player, _) = player(60.0);
        let snapshot = player.snapshot();
        assert!(snapshot.contains(&Signal::TrackEnabled(true)));
        assert!(snapshot.contains(&Signal::Playing(false)));
        assert!(snapshot.contains(&Signal::ActiveSpeed(1.0)));
    }

    #[test]
    fn players_are_independent() {
        let (mut first, _) = player(60.0);
        let (second, _) = player(60.0);
        first.handle(Input::SkipClicked(SkipDirection::Forward), Instant::now());

        assert_abs_diff_eq!(first.media().current_time(), 10.0);
        assert_abs_diff_eq!(second.media().current_time(), 0.0);
        assert_eq!(
            second
                .transport()
                .acceleration(SkipDirection::Forward)
                .repeat_count(),
            0
        );
    }
}
