// SPDX-License-Identifier: MPL-2.0
//! Desktop demo hosting one player over a simulated media element.
//!
//! The `App` struct owns the [`Player`], the [`Surface`] folded from its
//! signals and the handle through which the player asks for window
//! fullscreen. Native events and widget messages are translated into player
//! inputs in [`update`]; the resulting signals are applied to the surface
//! before the next render.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, NativeEvent};

use crate::config::{self, Config, PlayerSettings};
use crate::controls::time_format::format_time;
use crate::controls::Player;
use crate::host::{FullscreenChain, FullscreenHandle, SimulatedFullscreen, SimulatedMedia, Viewport};
use crate::ui::Surface;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    player: Player<SimulatedMedia>,
    surface: Surface,
    fullscreen: FullscreenHandle,
    window_id: Option<window::Id>,
    /// Instant of the previous tick; the simulated clock advances by the gap.
    last_tick: Option<Instant>,
    /// Last pointer position over the seek track, with the track width.
    track_pointer: Option<(f32, f32)>,
    /// Whether the demo still has to start playback once the media is ready.
    autoplay_pending: bool,
    /// Text of the title bar.
    clip_title: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("window_id", &self.window_id)
            .field("controls_visible", &self.surface.controls_visible)
            .field("playing", &self.surface.playing)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 540.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Length of the simulated clip when none is given on the command line.
pub const DEFAULT_CLIP_SECS: f64 = 120.0;

/// Delay before the simulated media reports its metadata.
const SIMULATED_LOAD_DELAY: Duration = Duration::from_millis(400);

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the application from the on-disk configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }
        (Self::with_config(&flags, &config), Task::none())
    }

    /// Builds the application state without touching the filesystem.
    fn with_config(flags: &Flags, config: &Config) -> Self {
        let settings = PlayerSettings::from(config);
        let duration = flags
            .duration_secs
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .unwrap_or(DEFAULT_CLIP_SECS);

        let mut media = SimulatedMedia::new(duration).with_load_delay(SIMULATED_LOAD_DELAY);
        if flags.block_autoplay {
            media.reject_next_play("autoplay blocked until user interaction");
        }

        let (provider, fullscreen) = SimulatedFullscreen::new("window");
        let player = Player::new(media, settings)
            .with_fullscreen(FullscreenChain::new().with(provider))
            .with_viewport(Viewport::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));

        let mut surface = Surface::default();
        surface.apply_all(player.snapshot());
        log::info!("simulated clip of {duration:.1}s");

        Self {
            player,
            surface,
            fullscreen,
            window_id: None,
            last_tick: None,
            track_pointer: None,
            autoplay_pending: true,
            clip_title: format!("Simulated clip ({})", format_time(duration)),
        }
    }

    fn title(&self) -> String {
        let state = if self.surface.playing {
            "playing"
        } else {
            "paused"
        };
        format!("Vidskin ({state})")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            player: &mut self.player,
            surface: &mut self.surface,
            fullscreen: &self.fullscreen,
            window_id: &mut self.window_id,
            last_tick: &mut self.last_tick,
            track_pointer: &mut self.track_pointer,
            autoplay_pending: &mut self.autoplay_pending,
        };

        match message {
            Message::Ui(ui_message) => update::handle_ui_message(&mut ctx, ui_message, Instant::now()),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::Native { window, event } => {
                update::handle_native_event(&mut ctx, window, event, Instant::now())
            }
            Message::WindowMode { window, mode } => {
                update::handle_window_mode(&mut ctx, window, mode, Instant::now())
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            surface: &self.surface,
            title: &self.clip_title,
            presets: self.player.transport().speed_presets().rates(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::Key;
    use crate::host::MediaElement;
    use crate::ui::controls::Message as UiMessage;

    fn app() -> App {
        App::with_config(&Flags::default(), &Config::default())
    }

    /// Ticks until the simulated media has loaded.
    fn load(app: &mut App, start: Instant) -> Instant {
        let mut now = start;
        for _ in 0..20 {
            let _ = app.update(Message::Tick(now));
            now += subscription::TICK_INTERVAL;
        }
        now
    }

    #[test]
    fn starts_with_visible_controls_and_disabled_track() {
        let app = app();
        assert!(app.surface.controls_visible);
        assert!(!app.surface.track_enabled);
        assert!(!app.surface.playing);
        assert_eq!(app.title(), "Vidskin (paused)");
    }

    #[test]
    fn autoplay_starts_once_media_is_ready() {
        let mut app = app();
        let _ = load(&mut app, Instant::now());

        assert!(app.surface.track_enabled);
        assert!(app.surface.playing);
        assert!(!app.autoplay_pending);
    }

    #[test]
    fn blocked_autoplay_leaves_player_paused() {
        let flags = Flags {
            block_autoplay: true,
            ..Flags::default()
        };
        let mut app = App::with_config(&flags, &Config::default());
        let now = load(&mut app, Instant::now());

        assert!(!app.surface.playing);
        assert!(app.surface.play_overlay_visible());

        // A user gesture afterwards is honored.
        let _ = app.update(Message::Ui(UiMessage::PlayClicked));
        let _ = app.update(Message::Tick(now));
        assert!(app.surface.playing);
    }

    #[test]
    fn invalid_duration_falls_back_to_default_clip() {
        let flags = Flags {
            duration_secs: Some(-3.0),
            ..Flags::default()
        };
        let mut app = App::with_config(&flags, &Config::default());
        let _ = load(&mut app, Instant::now());
        assert_eq!(app.player.media().duration(), Some(DEFAULT_CLIP_SECS));
    }

    #[test]
    fn fullscreen_key_requests_window_mode_and_reports_back() {
        let mut app = app();
        let window = window::Id::unique();
        let _ = app.update(Message::Native {
            window,
            event: NativeEvent::Key(Key::KeyF),
        });

        assert_eq!(app.window_id, Some(window));
        assert!(app.fullscreen.is_active());
        assert!(app.surface.fullscreen);
        assert!(app.player.visibility().is_fullscreen());

        let _ = app.update(Message::Native {
            window,
            event: NativeEvent::Key(Key::KeyF),
        });
        assert!(!app.surface.fullscreen);
    }

    #[test]
    fn outside_click_closes_speed_menu() {
        let mut app = app();
        let _ = app.update(Message::Ui(UiMessage::SpeedButtonClicked));
        assert!(app.surface.speed_menu_open);

        let _ = app.update(Message::Native {
            window: window::Id::unique(),
            event: NativeEvent::UncapturedPress,
        });
        assert!(!app.surface.speed_menu_open);
    }
}
