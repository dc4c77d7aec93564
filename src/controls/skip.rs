// SPDX-License-Identifier: MPL-2.0
//! Accelerating rewind/forward.
//!
//! Each direction keeps its own repeat counter. A skip jumps
//! `step × (repeat_count + 1)` seconds, so rapid repeats escalate by one
//! step per press. A gap longer than the window resets the counter before
//! the jump is computed; a decay deadline one window after the last press
//! resets it as well.

use super::timer::Deadline;
use std::time::{Duration, Instant};

/// Skip direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirection {
    Rewind,
    Forward,
}

impl SkipDirection {
    /// Sign applied to the jump amount.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            SkipDirection::Rewind => -1.0,
            SkipDirection::Forward => 1.0,
        }
    }
}

/// Acceleration state for one skip direction.
#[derive(Debug, Clone, Default)]
pub struct SkipAcceleration {
    repeat_count: u32,
    last_trigger: Option<Instant>,
    decay: Deadline,
}

impl SkipAcceleration {
    /// Registers a press at `now` and returns the jump length in seconds.
    pub fn trigger(&mut self, now: Instant, step_secs: f64, window: Duration) -> f64 {
        let cold = self
            .last_trigger
            .is_none_or(|last| now.saturating_duration_since(last) > window);
        if cold {
            self.repeat_count = 0;
        }

        let jump = step_secs * f64::from(self.repeat_count + 1);

        self.last_trigger = Some(now);
        self.repeat_count = self.repeat_count.saturating_add(1);
        self.decay.schedule(now, window);
        jump
    }

    /// Resets the counter once more than a full window passed without
    /// another press.
    ///
    /// A press landing exactly on the window boundary still escalates, so the
    /// decay only fires strictly after its due instant.
    pub fn tick(&mut self, now: Instant) {
        let expired = self.decay.due_at().is_some_and(|due| now > due);
        if expired {
            self.decay.cancel();
            self.repeat_count = 0;
        }
    }

    #[must_use]
    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    #[must_use]
    pub fn last_trigger(&self) -> Option<Instant> {
        self.last_trigger
    }
}

/// Applies a jump to `current`, clamped to `[0, duration]`.
///
/// With an unknown duration only the lower bound applies.
#[must_use]
pub fn apply_jump(current: f64, jump: f64, direction: SkipDirection, duration: Option<f64>) -> f64 {
    let target = (current + direction.sign() * jump).max(0.0);
    match duration {
        Some(d) if d.is_finite() => target.min(d.max(0.0)),
        _ => target,
    }
}
