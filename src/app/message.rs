// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::controls::Key;
use crate::ui::controls;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A widget of the player skin was used.
    Ui(controls::Message),
    /// Periodic tick driving the simulated clock and every player deadline.
    Tick(Instant),
    /// Native event routed from the event subscription.
    Native {
        window: window::Id,
        event: NativeEvent,
    },
    /// Current mode of the window, queried after each resize so fullscreen
    /// changes made by the window manager are noticed.
    WindowMode {
        window: window::Id,
        mode: window::Mode,
    },
}

/// Native events the player cares about, already filtered by the subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeEvent {
    Key(Key),
    CursorMoved,
    CursorLeft,
    /// Left button released anywhere in the window.
    MouseReleased,
    /// Left button pressed where no widget handled it.
    UncapturedPress,
    Resized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VIDSKIN_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Length of the simulated clip, in seconds.
    pub duration_secs: Option<f64>,
    /// Refuse the first play request, as a browser autoplay policy would.
    pub block_autoplay: bool,
}
