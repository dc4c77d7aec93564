// SPDX-License-Identifier: MPL-2.0
//! Controls overlay visibility for fullscreen playback.
//!
//! The overlay has two states, visible and hidden. It starts visible and may
//! only hide while the player is fullscreen, playback is running, the
//! pointer is outside the controls, no seek drag is in progress and the
//! pointer has been idle long enough. Any interaction shows it again
//! immediately.
//!
//! Hiding goes through a deferred check armed after the last qualifying
//! activity. While fullscreen playback continues but some condition still
//! blocks the hide, the check re-arms itself at the recheck interval; it is
//! dropped silently once playback pauses or fullscreen is left.

use super::timer::Deadline;
use crate::config::PlayerSettings;
use std::time::{Duration, Instant};

/// Timings used by the visibility controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub hide_delay: Duration,
    pub idle_threshold: Duration,
    pub recheck_interval: Duration,
    pub pointer_moving_flag: Duration,
}

impl From<&PlayerSettings> for Timings {
    fn from(settings: &PlayerSettings) -> Self {
        Self {
            hide_delay: settings.hide_delay,
            idle_threshold: settings.idle_threshold,
            recheck_interval: settings.recheck_interval,
            pointer_moving_flag: settings.pointer_moving_flag,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::from(&PlayerSettings::default())
    }
}

/// Inputs of the visibility state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Pointer moved anywhere inside the player.
    PointerMoved,
    /// Pointer entered the controls region.
    PointerEnteredControls,
    /// Pointer left the controls region.
    PointerLeftControls,
    /// Pointer left the player.
    PointerLeftPlayer,
    /// A drag on the seek track started.
    SeekDragStarted,
    /// The seek drag ended.
    SeekDragEnded,
    /// Any transport action (play, skip, seek, volume, speed, mute...).
    Activity,
    /// Fullscreen was entered (`true`) or left (`false`).
    FullscreenChanged(bool),
    /// Playback started or paused; the new state is read from the context.
    PlaybackChanged,
    /// Host loop poll; fires the hide check when due.
    Tick,
}

/// Effects produced by visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Visibility changed.
    VisibilityChanged(bool),
}

/// Playback facts the controller reads but does not own.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub now: Instant,
    pub paused: bool,
}

/// Owner of the controls visibility state.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    timings: Timings,
    controls_visible: bool,
    is_fullscreen: bool,
    /// Last pointer movement inside the player.
    last_activity: Option<Instant>,
    pointer_inside_controls: bool,
    dragging_seek: bool,
    /// The pointer counts as moving until this instant.
    pointer_moving_until: Option<Instant>,
    hide_check: Deadline,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl VisibilityController {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            controls_visible: true,
            is_fullscreen: false,
            last_activity: None,
            pointer_inside_controls: false,
            dragging_seek: false,
            pointer_moving_until: None,
            hide_check: Deadline::default(),
        }
    }

    /// Handle a visibility message.
    pub fn handle(&mut self, msg: Message, ctx: Context) -> Effect {
        match msg {
            Message::PointerMoved => {
                self.last_activity = Some(ctx.now);
                self.pointer_moving_until = Some(ctx.now + self.timings.pointer_moving_flag);
                let effect = self.show();
                self.arm(ctx, self.timings.hide_delay);
                effect
            }
            Message::PointerEnteredControls => {
                self.pointer_inside_controls = true;
                self.show()
            }
            Message::PointerLeftControls => {
                self.pointer_inside_controls = false;
                self.arm(ctx, self.timings.hide_delay);
                Effect::None
            }
            Message::PointerLeftPlayer => {
                self.arm(ctx, self.timings.hide_delay);
                Effect::None
            }
            Message::SeekDragStarted => {
                self.dragging_seek = true;
                self.show()
            }
            Message::SeekDragEnded => {
                self.dragging_seek = false;
                let effect = self.show();
                self.arm(ctx, self.timings.hide_delay);
                effect
            }
            Message::Activity => {
                let effect = self.show();
                self.arm(ctx, self.timings.hide_delay);
                effect
            }
            Message::FullscreenChanged(true) => {
                self.is_fullscreen = true;
                self.arm(ctx, self.timings.hide_delay);
                Effect::None
            }
            Message::FullscreenChanged(false) => {
                self.is_fullscreen = false;
                self.show()
            }
            Message::PlaybackChanged => {
                if ctx.paused {
                    self.show()
                } else {
                    self.arm(ctx, self.timings.hide_delay);
                    Effect::None
                }
            }
            Message::Tick => self.check(ctx),
        }
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[must_use]
    pub fn pointer_inside_controls(&self) -> bool {
        self.pointer_inside_controls
    }

    #[must_use]
    pub fn is_dragging_seek(&self) -> bool {
        self.dragging_seek
    }

    #[must_use]
    pub fn last_activity(&self) -> Option<Instant> {
        self.last_activity
    }

    /// Instant of the pending hide check, if one is armed.
    #[must_use]
    pub fn pending_hide_check(&self) -> Option<Instant> {
        self.hide_check.due_at()
    }

    /// Shows the controls and cancels any pending hide check.
    fn show(&mut self) -> Effect {
        self.hide_check.cancel();
        if self.controls_visible {
            Effect::None
        } else {
            self.controls_visible = true;
            Effect::VisibilityChanged(true)
        }
    }

    /// Arms the hide check, but only during fullscreen playback.
    fn arm(&mut self, ctx: Context, delay: Duration) {
        if self.is_fullscreen && !ctx.paused {
            self.hide_check.schedule(ctx.now, delay);
        } else {
            self.hide_check.cancel();
        }
    }

    fn check(&mut self, ctx: Context) -> Effect {
        if !self.hide_check.fire(ctx.now) {
            return Effect::None;
        }

        if self.may_hide(ctx) {
            self.controls_visible = false;
            log::debug!("controls hidden after idle period");
            return Effect::VisibilityChanged(false);
        }

        // Still fullscreen and playing: try again shortly.
        self.arm(ctx, self.timings.recheck_interval);
        Effect::None
    }

    fn may_hide(&self, ctx: Context) -> bool {
        let idle_long_enough = self
            .last_activity
            .is_none_or(|t| ctx.now.saturating_duration_since(t) > self.timings.idle_threshold);
        let pointer_moving = self.pointer_moving_until.is_some_and(|t| ctx.now < t);

        self.controls_visible
            && self.is_fullscreen
            && !ctx.paused
            && !self.pointer_inside_controls
            && !self.dragging_seek
            && !pointer_moving
            && idle_long_enough
    }
}
