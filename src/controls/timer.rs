// SPDX-License-Identifier: MPL-2.0
//! Cancellable deferred callbacks.
//!
//! A [`Deadline`] replaces a platform timeout handle: it is armed with an
//! instant, polled by the host loop through `fire`, and cancelled or re-armed
//! by whichever state machine owns it. Because firing only happens when the
//! owner polls, a cancelled deadline can never run against stale state.

use std::time::{Duration, Instant};

/// A single pending deferred callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    due: Option<Instant>,
}

impl Deadline {
    /// Arms the deadline at `now + delay`, replacing any pending one.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    #[must_use]
    pub fn due_at(&self) -> Option<Instant> {
        self.due
    }

    /// Returns true exactly once when `now` has reached the deadline.
    ///
    /// The deadline is disarmed when it fires; the owner decides whether to
    /// schedule it again.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
