// SPDX-License-Identifier: MPL-2.0
//! Transport input mapping.
//!
//! Turns discrete user gestures into mutations of the media element and
//! host requests. Every transport action also counts as activity for the
//! [`VisibilityController`], which shows the controls and, during
//! fullscreen playback, re-arms the hide check.
//!
//! Host requests that fail are logged and dropped. Operations that need
//! loaded media (seeking) are silent no-ops until the media reports it is
//! loaded.

use super::playback_speed::SpeedPresets;
use super::seek::{buffered_percent, known_duration, progress_percent, TrackGeometry};
use super::signal::Signal;
use super::skip::{apply_jump, SkipAcceleration, SkipDirection};
use super::time_format::{format_time, format_time_display};
use super::timer::Deadline;
use super::visibility::{self, Effect, VisibilityController};
use super::volume::{Volume, VolumeIcon};
use crate::config::PlayerSettings;
use crate::error::log_rejection;
use crate::host::{FullscreenChain, MediaElement, MediaEvent, OrientationLock, Viewport};
use std::time::Instant;

/// Regions of the touch overlay covering the video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchZone {
    Left,
    Center,
    Right,
}

/// Everything a transport operation may touch besides its own state.
pub struct UpdateContext<'a, M: MediaElement> {
    pub media: &'a mut M,
    pub visibility: &'a mut VisibilityController,
    pub fullscreen: &'a mut FullscreenChain,
    pub orientation: &'a mut dyn OrientationLock,
    pub viewport: Viewport,
    pub now: Instant,
    pub signals: &'a mut Vec<Signal>,
}

impl<M: MediaElement> UpdateContext<'_, M> {
    /// Forwards a message to the visibility controller and reports the
    /// visibility change, if any.
    pub fn notify_visibility(&mut self, msg: visibility::Message) {
        let ctx = visibility::Context {
            now: self.now,
            paused: self.media.paused(),
        };
        if let Effect::VisibilityChanged(visible) = self.visibility.handle(msg, ctx) {
            self.signals.push(Signal::ControlsVisible(visible));
        }
    }

    fn emit(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    fn activity(&mut self) {
        self.notify_visibility(visibility::Message::Activity);
    }

    fn emit_volume(&mut self) {
        let level = Volume::new(self.media.volume());
        let icon = VolumeIcon::for_level(level, self.media.muted());
        self.emit(Signal::Volume {
            level: level.value(),
            icon,
        });
    }

    fn emit_time_display(&mut self) {
        let text = format_time_display(self.media.current_time(), self.media.duration());
        self.emit(Signal::TimeDisplay(text));
    }
}

/// State of the transport controls that outlives a single gesture.
#[derive(Debug, Clone)]
pub struct TransportMapper {
    settings: PlayerSettings,
    rewind: SkipAcceleration,
    forward: SkipAcceleration,
    rewind_indicator: Deadline,
    forward_indicator: Deadline,
    loaded: bool,
    speed_menu_open: bool,
    orientation_locked: bool,
}

impl Default for TransportMapper {
    fn default() -> Self {
        Self::new(PlayerSettings::default())
    }
}

impl TransportMapper {
    #[must_use]
    pub fn new(settings: PlayerSettings) -> Self {
        Self {
            settings,
            rewind: SkipAcceleration::default(),
            forward: SkipAcceleration::default(),
            rewind_indicator: Deadline::default(),
            forward_indicator: Deadline::default(),
            loaded: false,
            speed_menu_open: false,
            orientation_locked: false,
        }
    }

    /// Whether the media reported itself loaded; seeking waits for this.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn speed_menu_open(&self) -> bool {
        self.speed_menu_open
    }

    #[must_use]
    pub fn speed_presets(&self) -> &SpeedPresets {
        &self.settings.speed_presets
    }

    #[must_use]
    pub fn acceleration(&self, direction: SkipDirection) -> &SkipAcceleration {
        match direction {
            SkipDirection::Rewind => &self.rewind,
            SkipDirection::Forward => &self.forward,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    // =========================================================================
    // Playback
    // =========================================================================

    pub fn toggle_play<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        if ctx.media.paused() {
            if let Err(err) = ctx.media.play() {
                log_rejection(&err);
            }
        } else {
            ctx.media.pause();
        }
        ctx.activity();
    }

    /// Jumps back or forward, escalating with rapid repeats.
    pub fn skip<M: MediaElement>(&mut self, direction: SkipDirection, ctx: &mut UpdateContext<'_, M>) {
        let step = self.settings.skip_step_secs;
        let window = self.settings.skip_window;
        let indicator_for = self.settings.skip_indicator;
        let (acceleration, indicator) = match direction {
            SkipDirection::Rewind => (&mut self.rewind, &mut self.rewind_indicator),
            SkipDirection::Forward => (&mut self.forward, &mut self.forward_indicator),
        };

        let jump = acceleration.trigger(ctx.now, step, window);
        let target = apply_jump(ctx.media.current_time(), jump, direction, ctx.media.duration());
        log::debug!("skip {direction:?} by {jump}s to {target:.2}s");
        ctx.media.set_current_time(target);

        indicator.schedule(ctx.now, indicator_for);
        ctx.emit(Signal::SkipIndicator {
            direction,
            seconds: jump,
        });
        ctx.activity();
    }

    pub fn touch<M: MediaElement>(&mut self, zone: TouchZone, ctx: &mut UpdateContext<'_, M>) {
        match zone {
            TouchZone::Left => self.skip(SkipDirection::Rewind, ctx),
            TouchZone::Center => self.toggle_play(ctx),
            TouchZone::Right => self.skip(SkipDirection::Forward, ctx),
        }
    }

    // =========================================================================
    // Seeking
    // =========================================================================

    /// Seeks to the track position under `pointer_x`.
    ///
    /// The progress bar moves even when the duration is still unknown.
    pub fn seek<M: MediaElement>(
        &mut self,
        pointer_x: f32,
        track: TrackGeometry,
        ctx: &mut UpdateContext<'_, M>,
    ) {
        if !self.loaded {
            log::debug!("seek ignored: media not loaded");
            return;
        }
        let fraction = track.fraction_at(pointer_x);
        if let Some(duration) = known_duration(ctx.media.duration()) {
            ctx.media.set_current_time(fraction * duration);
        }
        ctx.emit(Signal::Progress(fraction * 100.0));
        ctx.activity();
    }

    pub fn begin_seek_drag<M: MediaElement>(
        &mut self,
        pointer_x: f32,
        track: TrackGeometry,
        ctx: &mut UpdateContext<'_, M>,
    ) {
        if !self.loaded {
            log::debug!("seek drag ignored: media not loaded");
            return;
        }
        ctx.notify_visibility(visibility::Message::SeekDragStarted);
        self.seek(pointer_x, track, ctx);
    }

    /// Follows the pointer while a seek drag is in progress.
    pub fn continue_seek_drag<M: MediaElement>(
        &mut self,
        pointer_x: f32,
        track: TrackGeometry,
        ctx: &mut UpdateContext<'_, M>,
    ) {
        if ctx.visibility.is_dragging_seek() {
            self.seek(pointer_x, track, ctx);
        }
    }

    pub fn end_seek_drag<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        if ctx.visibility.is_dragging_seek() {
            ctx.notify_visibility(visibility::Message::SeekDragEnded);
        }
    }

    /// Updates the hover tooltip text and position over the track.
    pub fn hover_track<M: MediaElement>(
        &mut self,
        pointer_x: f32,
        track: TrackGeometry,
        ctx: &mut UpdateContext<'_, M>,
    ) {
        if !self.loaded {
            return;
        }
        if let Some(duration) = known_duration(ctx.media.duration()) {
            let time = track.fraction_at(pointer_x) * duration;
            ctx.emit(Signal::HoverTime {
                text: format_time(time),
                offset: track.offset_at(pointer_x),
            });
        }
    }

    pub fn track_hover_changed<M: MediaElement>(
        &mut self,
        inside: bool,
        ctx: &mut UpdateContext<'_, M>,
    ) {
        if inside && !self.loaded {
            return;
        }
        ctx.emit(Signal::HoverTimeVisible(inside));
    }

    // =========================================================================
    // Volume & Speed
    // =========================================================================

    /// Sets the volume; a zero level mutes, any other level unmutes.
    pub fn set_volume<M: MediaElement>(&mut self, level: f64, ctx: &mut UpdateContext<'_, M>) {
        let level = Volume::new(level);
        ctx.media.set_volume(level.value());
        ctx.media.set_muted(level.is_silent());
        ctx.emit_volume();
        ctx.activity();
    }

    pub fn volume_up<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        let level = Volume::new(ctx.media.volume()).increase(self.settings.keyboard_volume_step);
        self.set_volume(level.value(), ctx);
    }

    pub fn volume_down<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        let level = Volume::new(ctx.media.volume()).decrease(self.settings.keyboard_volume_step);
        self.set_volume(level.value(), ctx);
    }

    /// Flips the mute flag; the stored level is kept.
    pub fn toggle_mute<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        let muted = !ctx.media.muted();
        ctx.media.set_muted(muted);
        ctx.emit_volume();
        ctx.activity();
    }

    /// Applies a preset rate and closes the speed menu.
    ///
    /// Rates outside the preset set are ignored.
    pub fn set_speed<M: MediaElement>(&mut self, rate: f64, ctx: &mut UpdateContext<'_, M>) {
        match self.settings.speed_presets.resolve(rate) {
            Some(preset) => {
                ctx.media.set_playback_rate(preset);
                ctx.emit(Signal::ActiveSpeed(preset));
            }
            None => log::debug!("ignoring playback rate {rate}: not a preset"),
        }
        self.dismiss_speed_menu(ctx);
        ctx.activity();
    }

    pub fn toggle_speed_menu<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        self.speed_menu_open = !self.speed_menu_open;
        ctx.emit(Signal::SpeedMenuOpen(self.speed_menu_open));
        ctx.activity();
    }

    /// Closes the speed menu (click outside of it).
    pub fn dismiss_speed_menu<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        if self.speed_menu_open {
            self.speed_menu_open = false;
            ctx.emit(Signal::SpeedMenuOpen(false));
        }
    }

    // =========================================================================
    // Fullscreen, Orientation & Picture-in-Picture
    // =========================================================================

    /// Enters or leaves fullscreen through the first supported provider.
    ///
    /// Entering on a narrow portrait viewport also asks for a landscape
    /// lock.
    pub fn toggle_fullscreen<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        if ctx.visibility.is_fullscreen() {
            ctx.fullscreen.exit();
            return;
        }
        if ctx.fullscreen.request()
            && ctx.viewport.is_narrow(self.settings.narrow_viewport_px)
            && ctx.viewport.is_portrait()
        {
            self.lock_landscape(ctx);
        }
    }

    /// Reacts to the host entering or leaving fullscreen.
    pub fn fullscreen_changed<M: MediaElement>(
        &mut self,
        active: bool,
        ctx: &mut UpdateContext<'_, M>,
    ) {
        ctx.notify_visibility(visibility::Message::FullscreenChanged(active));
        ctx.emit(Signal::Fullscreen(active));
        if !active {
            self.unlock_orientation(ctx);
        }
    }

    /// Reacts to the device rotating.
    pub fn orientation_changed<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        if ctx.visibility.is_fullscreen() {
            if ctx.viewport.is_portrait() {
                self.lock_landscape(ctx);
            }
        } else {
            self.unlock_orientation(ctx);
        }
    }

    fn lock_landscape<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        match ctx.orientation.lock_landscape() {
            Ok(()) => self.orientation_locked = true,
            Err(err) => log_rejection(&err),
        }
    }

    fn unlock_orientation<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        if !self.orientation_locked {
            return;
        }
        self.orientation_locked = false;
        if let Err(err) = ctx.orientation.unlock() {
            log_rejection(&err);
        }
    }

    pub fn toggle_picture_in_picture<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        let result = if ctx.media.is_picture_in_picture() {
            ctx.media.exit_picture_in_picture()
        } else {
            ctx.media.request_picture_in_picture()
        };
        if let Err(err) = result {
            log_rejection(&err);
        }
        ctx.activity();
    }

    // =========================================================================
    // Media Notifications & Timers
    // =========================================================================

    pub fn media_event<M: MediaElement>(&mut self, event: MediaEvent, ctx: &mut UpdateContext<'_, M>) {
        match event {
            MediaEvent::Played | MediaEvent::Paused => {
                let playing = !ctx.media.paused();
                ctx.emit(Signal::Playing(playing));
                ctx.notify_visibility(visibility::Message::PlaybackChanged);
            }
            MediaEvent::TimeUpdated => {
                if !ctx.visibility.is_dragging_seek() {
                    if let Some(percent) =
                        progress_percent(ctx.media.current_time(), ctx.media.duration())
                    {
                        ctx.emit(Signal::Progress(percent));
                    }
                }
                ctx.emit_time_display();
            }
            MediaEvent::MetadataLoaded => {
                self.set_loaded(true, ctx);
                ctx.emit_time_display();
            }
            MediaEvent::CanPlay => self.set_loaded(true, ctx),
            MediaEvent::LoadError => {
                log::warn!("media failed to load");
                self.set_loaded(false, ctx);
            }
            MediaEvent::BufferProgress => {
                if let Some(percent) = buffered_percent(ctx.media.buffered_end(), ctx.media.duration())
                {
                    ctx.emit(Signal::Buffer(percent));
                }
            }
            MediaEvent::RequestFailed(err) => log_rejection(&err),
        }
    }

    fn set_loaded<M: MediaElement>(&mut self, loaded: bool, ctx: &mut UpdateContext<'_, M>) {
        if self.loaded != loaded {
            self.loaded = loaded;
            ctx.emit(Signal::TrackEnabled(loaded));
        }
    }

    /// Fires the skip decay and indicator deadlines.
    pub fn tick<M: MediaElement>(&mut self, ctx: &mut UpdateContext<'_, M>) {
        self.rewind.tick(ctx.now);
        self.forward.tick(ctx.now);
        if self.rewind_indicator.fire(ctx.now) {
            ctx.emit(Signal::SkipIndicatorHidden(SkipDirection::Rewind));
        }
        if self.forward_indicator.fire(ctx.now) {
            ctx.emit(Signal::SkipIndicatorHidden(SkipDirection::Forward));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{HostError, HostRequest};
    use crate::host::{SimulatedFullscreen, SimulatedMedia, SimulatedOrientation};
    use crate::test_utils::{after, assert_abs_diff_eq};
    use std::time::Duration;

    struct Fixture {
        transport: TransportMapper,
        media: SimulatedMedia,
        visibility: VisibilityController,
        fullscreen: FullscreenChain,
        orientation: SimulatedOrientation,
        viewport: Viewport,
    }

    impl Fixture {
        fn new(duration: f64) -> Self {
            let mut media = SimulatedMedia::new(duration);
            media.advance(Duration::ZERO);
            media.take_events();
            let (provider, _) = SimulatedFullscreen::new("window");
            Self {
                transport: TransportMapper::default(),
                media,
                visibility: VisibilityController::default(),
                fullscreen: FullscreenChain::new().with(provider),
                orientation: SimulatedOrientation::new(),
                viewport: Viewport::default(),
            }
        }

        fn loaded(duration: f64) -> Self {
            let mut fixture = Self::new(duration);
            fixture.run(Instant::now(), |t, ctx| t.media_event(MediaEvent::MetadataLoaded, ctx));
            fixture
        }

        fn run(
            &mut self,
            now: Instant,
            op: impl FnOnce(&mut TransportMapper, &mut UpdateContext<'_, SimulatedMedia>),
        ) -> Vec<Signal> {
            let mut signals = Vec::new();
            let mut ctx = UpdateContext {
                media: &mut self.media,
                visibility: &mut self.visibility,
                fullscreen: &mut self.fullscreen,
                orientation: &mut self.orientation,
                viewport: self.viewport,
                now,
                signals: &mut signals,
            };
            op(&mut self.transport, &mut ctx);
            signals
        }
    }

    #[test]
    fn seek_before_load_is_ignored() {
        let mut fx = Fixture::new(120.0);
        let signals = fx.run(Instant::now(), |t, ctx| {
            t.seek(50.0, TrackGeometry::new(0.0, 100.0), ctx);
        });
        assert!(signals.is_empty());
        assert_abs_diff_eq!(fx.media.current_time(), 0.0);
    }

    #[test]
    fn seek_sets_time_from_track_fraction() {
        let mut fx = Fixture::loaded(120.0);
        let signals = fx.run(Instant::now(), |t, ctx| {
            t.seek(125.0, TrackGeometry::new(100.0, 100.0), ctx);
        });
        assert_abs_diff_eq!(fx.media.current_time(), 30.0);
        assert!(signals.contains(&Signal::Progress(25.0)));
    }

    #[test]
    fn drag_follows_pointer_until_released() {
        let mut fx = Fixture::loaded(100.0);
        let track = TrackGeometry::new(0.0, 200.0);
        let t0 = Instant::now();

        fx.run(t0, |t, ctx| t.begin_seek_drag(20.0, track, ctx));
        assert!(fx.visibility.is_dragging_seek());
        fx.run(after(t0, 10), |t, ctx| t.continue_seek_drag(100.0, track, ctx));
        assert_abs_diff_eq!(fx.media.current_time(), 50.0);

        fx.run(after(t0, 20), |t, ctx| t.end_seek_drag(ctx));
        assert!(!fx.visibility.is_dragging_seek());
        fx.run(after(t0, 30), |t, ctx| t.continue_seek_drag(200.0, track, ctx));
        assert_abs_diff_eq!(fx.media.current_time(), 50.0);
    }

    #[test]
    fn progress_is_frozen_while_dragging() {
        let mut fx = Fixture::loaded(100.0);
        let track = TrackGeometry::new(0.0, 100.0);
        let t0 = Instant::now();
        fx.run(t0, |t, ctx| t.begin_seek_drag(10.0, track, ctx));

        let signals = fx.run(t0, |t, ctx| t.media_event(MediaEvent::TimeUpdated, ctx));
        assert!(!signals.iter().any(|s| matches!(s, Signal::Progress(_))));
        assert!(signals
            .iter()
            .any(|s| matches!(s, Signal::TimeDisplay(text) if text == "00:00:10 / 00:01:40")));
    }

    #[test]
    fn skip_escalates_and_decays() {
        let mut fx = Fixture::loaded(600.0);
        fx.media.set_current_time(300.0);
        let t0 = Instant::now();

        fx.run(t0, |t, ctx| t.skip(SkipDirection::Forward, ctx));
        fx.run(after(t0, 500), |t, ctx| t.skip(SkipDirection::Forward, ctx));
        assert_abs_diff_eq!(fx.media.current_time(), 330.0);

        fx.run(after(t0, 1600), |t, ctx| t.tick(ctx));
        assert_eq!(fx.transport.acceleration(SkipDirection::Forward).repeat_count(), 0);

        fx.run(after(t0, 1700), |t, ctx| t.skip(SkipDirection::Forward, ctx));
        assert_abs_diff_eq!(fx.media.current_time(), 340.0);
    }

    #[test]
    fn directions_accelerate_independently() {
        let mut fx = Fixture::loaded(600.0);
        fx.media.set_current_time(300.0);
        let t0 = Instant::now();

        fx.run(t0, |t, ctx| t.skip(SkipDirection::Forward, ctx));
        fx.run(after(t0, 100), |t, ctx| t.skip(SkipDirection::Rewind, ctx));
        assert_abs_diff_eq!(fx.media.current_time(), 300.0);
        assert_eq!(fx.transport.acceleration(SkipDirection::Rewind).repeat_count(), 1);
    }

    #[test]
    fn skip_indicator_hides_after_its_duration() {
        let mut fx = Fixture::loaded(60.0);
        let t0 = Instant::now();
        let shown = fx.run(t0, |t, ctx| t.skip(SkipDirection::Forward, ctx));
        assert!(shown.contains(&Signal::SkipIndicator {
            direction: SkipDirection::Forward,
            seconds: 10.0,
        }));

        assert!(fx.run(after(t0, 699), |t, ctx| t.tick(ctx)).is_empty());
        let hidden = fx.run(after(t0, 700), |t, ctx| t.tick(ctx));
        assert_eq!(hidden, vec![Signal::SkipIndicatorHidden(SkipDirection::Forward)]);
    }

    #[test]
    fn zero_volume_mutes_and_toggle_keeps_level() {
        let mut fx = Fixture::loaded(60.0);
        let now = Instant::now();

        let signals = fx.run(now, |t, ctx| t.set_volume(0.0, ctx));
        assert!(fx.media.muted());
        assert!(signals.contains(&Signal::Volume {
            level: 0.0,
            icon: VolumeIcon::Muted,
        }));

        fx.run(now, |t, ctx| t.set_volume(0.3, ctx));
        assert!(!fx.media.muted());

        let signals = fx.run(now, |t, ctx| t.toggle_mute(ctx));
        assert!(fx.media.muted());
        assert_abs_diff_eq!(fx.media.volume(), 0.3);
        assert!(signals.contains(&Signal::Volume {
            level: 0.3,
            icon: VolumeIcon::Muted,
        }));
    }

    #[test]
    fn keyboard_volume_steps_are_clamped() {
        let mut fx = Fixture::loaded(60.0);
        let now = Instant::now();
        fx.run(now, |t, ctx| t.volume_up(ctx));
        assert_abs_diff_eq!(fx.media.volume(), 1.0);

        for _ in 0..12 {
            fx.run(now, |t, ctx| t.volume_down(ctx));
        }
        assert_abs_diff_eq!(fx.media.volume(), 0.0);
        assert!(fx.media.muted());
    }

    #[test]
    fn tenth_volume_down_from_full_mutes() {
        let mut fx = Fixture::loaded(60.0);
        let now = Instant::now();
        let mut signals = Vec::new();
        for _ in 0..10 {
            signals = fx.run(now, |t, ctx| t.volume_down(ctx));
        }
        assert!(fx.media.muted());
        assert!(signals.contains(&Signal::Volume {
            level: 0.0,
            icon: VolumeIcon::Muted,
        }));
    }

    #[test]
    fn speed_accepts_presets_only_and_closes_menu() {
        let mut fx = Fixture::loaded(60.0);
        let now = Instant::now();

        fx.run(now, |t, ctx| t.toggle_speed_menu(ctx));
        assert!(fx.transport.speed_menu_open());

        let signals = fx.run(now, |t, ctx| t.set_speed(1.5, ctx));
        assert_abs_diff_eq!(fx.media.playback_rate(), 1.5);
        assert!(signals.contains(&Signal::ActiveSpeed(1.5)));
        assert!(signals.contains(&Signal::SpeedMenuOpen(false)));
        assert!(!fx.transport.speed_menu_open());

        fx.run(now, |t, ctx| t.set_speed(3.0, ctx));
        assert_abs_diff_eq!(fx.media.playback_rate(), 1.5);
    }

    #[test]
    fn dismissing_a_closed_menu_is_silent() {
        let mut fx = Fixture::loaded(60.0);
        assert!(fx
            .run(Instant::now(), |t, ctx| t.dismiss_speed_menu(ctx))
            .is_empty());
    }

    #[test]
    fn hover_time_requires_loaded_media() {
        let track = TrackGeometry::new(0.0, 100.0);
        let mut fx = Fixture::new(120.0);
        let now = Instant::now();
        assert!(fx
            .run(now, |t, ctx| {
                t.track_hover_changed(true, ctx);
                t.hover_track(50.0, track, ctx);
            })
            .is_empty());

        let mut fx = Fixture::loaded(120.0);
        let signals = fx.run(now, |t, ctx| {
            t.track_hover_changed(true, ctx);
            t.hover_track(50.0, track, ctx);
        });
        assert_eq!(
            signals,
            vec![
                Signal::HoverTimeVisible(true),
                Signal::HoverTime {
                    text: "00:01:00".to_string(),
                    offset: 50.0,
                },
            ]
        );
    }

    #[test]
    fn load_error_disables_track() {
        let mut fx = Fixture::loaded(60.0);
        let signals = fx.run(Instant::now(), |t, ctx| t.media_event(MediaEvent::LoadError, ctx));
        assert_eq!(signals, vec![Signal::TrackEnabled(false)]);
        assert!(!fx.transport.is_loaded());
    }

    #[test]
    fn rejected_play_leaves_media_paused() {
        let mut fx = Fixture::loaded(60.0);
        fx.media.reject_next_play("blocked by autoplay policy");
        fx.run(Instant::now(), |t, ctx| t.toggle_play(ctx));
        assert!(fx.media.paused());

        fx.run(Instant::now(), |t, ctx| {
            t.media_event(
                MediaEvent::RequestFailed(HostError::rejected(HostRequest::Play, "late")),
                ctx,
            );
        });
        assert!(fx.media.paused());
    }

    #[test]
    fn narrow_portrait_fullscreen_locks_landscape() {
        let mut fx = Fixture::loaded(60.0);
        fx.viewport = Viewport::new(390.0, 844.0);
        let now = Instant::now();

        fx.run(now, |t, ctx| t.toggle_fullscreen(ctx));
        assert!(fx.orientation.is_locked());

        fx.run(now, |t, ctx| t.fullscreen_changed(true, ctx));
        fx.run(now, |t, ctx| t.fullscreen_changed(false, ctx));
        assert!(!fx.orientation.is_locked());
    }

    #[test]
    fn wide_fullscreen_leaves_orientation_alone() {
        let mut fx = Fixture::loaded(60.0);
        fx.run(Instant::now(), |t, ctx| t.toggle_fullscreen(ctx));
        assert_eq!(fx.orientation.lock_calls(), 0);
    }

    #[test]
    fn rotating_to_portrait_in_fullscreen_relocks() {
        let mut fx = Fixture::loaded(60.0);
        let now = Instant::now();
        fx.run(now, |t, ctx| t.fullscreen_changed(true, ctx));

        fx.viewport = Viewport::new(390.0, 844.0);
        fx.run(now, |t, ctx| t.orientation_changed(ctx));
        assert!(fx.orientation.is_locked());
    }

    #[test]
    fn picture_in_picture_toggles() {
        let mut fx = Fixture::loaded(60.0);
        let now = Instant::now();
        fx.run(now, |t, ctx| t.toggle_picture_in_picture(ctx));
        assert!(fx.media.is_picture_in_picture());
        fx.run(now, |t, ctx| t.toggle_picture_in_picture(ctx));
        assert!(!fx.media.is_picture_in_picture());
    }

    #[test]
    fn touch_zones_map_to_transport() {
        let mut fx = Fixture::loaded(60.0);
        let t0 = Instant::now();
        fx.run(t0, |t, ctx| t.touch(TouchZone::Right, ctx));
        assert_abs_diff_eq!(fx.media.current_time(), 10.0);
        fx.run(after(t0, 2000), |t, ctx| t.touch(TouchZone::Left, ctx));
        assert_abs_diff_eq!(fx.media.current_time(), 0.0);
        fx.run(after(t0, 2100), |t, ctx| t.touch(TouchZone::Center, ctx));
        assert!(!fx.media.paused());
    }
}
