// SPDX-License-Identifier: MPL-2.0
//! Update logic: widget messages, native events and ticks become player
//! inputs, and the signals they produce are folded into the surface.

use super::NativeEvent;
use crate::controls::{Input, Player, Signal, TrackGeometry};
use crate::error::log_rejection;
use crate::host::{FullscreenHandle, MediaElement, SimulatedMedia, Viewport};
use crate::ui::controls::Message as UiMessage;
use crate::ui::Surface;
use iced::{window, Task};
use std::time::Instant;

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub player: &'a mut Player<SimulatedMedia>,
    pub surface: &'a mut Surface,
    pub fullscreen: &'a FullscreenHandle,
    pub window_id: &'a mut Option<window::Id>,
    pub last_tick: &'a mut Option<Instant>,
    pub track_pointer: &'a mut Option<(f32, f32)>,
    pub autoplay_pending: &'a mut bool,
}

impl UpdateContext<'_> {
    /// Dispatches one input, applies its signals and carries out any
    /// fullscreen change the player asked for.
    fn dispatch(&mut self, input: Input, now: Instant) -> Task<super::Message> {
        let signals = self.player.handle(input, now);
        self.apply(signals);
        self.apply_fullscreen_request(now)
    }

    fn apply(&mut self, signals: Vec<Signal>) {
        self.surface.apply_all(signals);
    }

    /// Forwards every queued media notification to the player.
    fn pump_media(&mut self, now: Instant) {
        for event in self.player.media_mut().take_events() {
            let signals = self.player.handle(Input::Media(event), now);
            self.apply(signals);
        }
    }

    fn apply_fullscreen_request(&mut self, now: Instant) -> Task<super::Message> {
        let Some(desired) = self.fullscreen.take_request() else {
            return Task::none();
        };
        let Some(window_id) = *self.window_id else {
            log::debug!("fullscreen requested before the window was known");
            return Task::none();
        };

        self.fullscreen.set_active(desired);
        let signals = self.player.handle(Input::FullscreenChanged(desired), now);
        self.apply(signals);

        let mode = if desired {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(window_id, mode)
    }

    fn track_geometry(&self) -> Option<(f32, TrackGeometry)> {
        self.track_pointer
            .map(|(x, width)| (x, TrackGeometry::new(0.0, width)))
    }
}

/// Handles a message from the skin widgets.
pub fn handle_ui_message(
    ctx: &mut UpdateContext<'_>,
    message: UiMessage,
    now: Instant,
) -> Task<super::Message> {
    let mut tasks = Vec::new();

    // Any click other than the speed controls closes the speed menu first.
    if is_click(&message)
        && !matches!(
            message,
            UiMessage::SpeedButtonClicked | UiMessage::SpeedSelected(_)
        )
        && ctx.player.transport().speed_menu_open()
    {
        tasks.push(ctx.dispatch(Input::ClickedOutsideSpeedMenu, now));
    }

    let input = match message {
        UiMessage::PlayClicked => Input::PlayClicked,
        UiMessage::SkipClicked(direction) => Input::SkipClicked(direction),
        UiMessage::Touch(zone) => Input::Touch(zone),
        UiMessage::MuteClicked => Input::MuteClicked,
        UiMessage::VolumeChanged(level) => Input::VolumeChanged(level),
        UiMessage::SpeedButtonClicked => Input::SpeedButtonClicked,
        UiMessage::SpeedSelected(rate) => Input::SpeedSelected(rate),
        UiMessage::FullscreenClicked => Input::FullscreenClicked,
        UiMessage::PictureInPictureClicked => Input::PictureInPictureClicked,
        UiMessage::TrackPressed => {
            let Some((x, track)) = ctx.track_geometry() else {
                return Task::batch(tasks);
            };
            Input::TrackPressed { x, track }
        }
        UiMessage::TrackReleased => Input::TrackReleased,
        UiMessage::TrackMoved { x, width } => {
            *ctx.track_pointer = Some((x, width));
            let track = TrackGeometry::new(0.0, width);
            if ctx.player.visibility().is_dragging_seek() {
                tasks.push(ctx.dispatch(Input::TrackDragged { x, track }, now));
            }
            Input::TrackHovered { x, track }
        }
        UiMessage::TrackEntered => Input::TrackHoverChanged(true),
        UiMessage::TrackExited => {
            *ctx.track_pointer = None;
            Input::TrackHoverChanged(false)
        }
        UiMessage::ControlsEntered => Input::PointerEnteredControls,
        UiMessage::ControlsExited => Input::PointerLeftControls,
    };
    tasks.push(ctx.dispatch(input, now));
    Task::batch(tasks)
}

fn is_click(message: &UiMessage) -> bool {
    matches!(
        message,
        UiMessage::PlayClicked
            | UiMessage::SkipClicked(_)
            | UiMessage::Touch(_)
            | UiMessage::MuteClicked
            | UiMessage::SpeedButtonClicked
            | UiMessage::SpeedSelected(_)
            | UiMessage::FullscreenClicked
            | UiMessage::PictureInPictureClicked
            | UiMessage::TrackPressed
    )
}

/// Handles a native event routed by the subscription.
pub fn handle_native_event(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    event: NativeEvent,
    now: Instant,
) -> Task<super::Message> {
    *ctx.window_id = Some(window);

    match event {
        NativeEvent::Key(key) => ctx.dispatch(Input::Key(key), now),
        NativeEvent::CursorMoved => ctx.dispatch(Input::PointerMoved, now),
        NativeEvent::CursorLeft => ctx.dispatch(Input::PointerLeftPlayer, now),
        NativeEvent::MouseReleased => {
            // A drag may end outside the track.
            if ctx.player.visibility().is_dragging_seek() {
                ctx.dispatch(Input::TrackReleased, now)
            } else {
                Task::none()
            }
        }
        NativeEvent::UncapturedPress => ctx.dispatch(Input::ClickedOutsideSpeedMenu, now),
        NativeEvent::Resized(size) => {
            let resized = ctx.dispatch(Input::Resized(Viewport::new(size.width, size.height)), now);
            let mode = window::mode(window).map(move |mode| super::Message::WindowMode { window, mode });
            Task::batch([resized, mode])
        }
    }
}

/// Reconciles the player with the window mode reported by the shell.
///
/// Only a mismatch is forwarded: the player already knows about the changes
/// it requested itself.
pub fn handle_window_mode(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    mode: window::Mode,
    now: Instant,
) -> Task<super::Message> {
    *ctx.window_id = Some(window);

    let active = matches!(mode, window::Mode::Fullscreen);
    if active == ctx.fullscreen.is_active() {
        return Task::none();
    }

    log::debug!("window manager changed fullscreen to {active}");
    ctx.fullscreen.set_active(active);
    let signals = ctx.player.handle(Input::FullscreenChanged(active), now);
    ctx.apply(signals);
    Task::none()
}

/// Advances the simulated media, starts the pending autoplay and fires
/// every due player deadline.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<super::Message> {
    let elapsed = ctx
        .last_tick
        .map(|last| now.saturating_duration_since(last))
        .unwrap_or_default();
    *ctx.last_tick = Some(now);

    ctx.player.media_mut().advance(elapsed);
    ctx.pump_media(now);

    if *ctx.autoplay_pending && ctx.player.transport().is_loaded() {
        *ctx.autoplay_pending = false;
        match ctx.player.media_mut().play() {
            Ok(()) => log::info!("autoplay started"),
            Err(err) => log_rejection(&err),
        }
        ctx.pump_media(now);
    }

    let signals = ctx.player.tick(now);
    ctx.apply(signals);
    Task::none()
}
