// SPDX-License-Identifier: MPL-2.0
//! This module handles the player configuration loaded from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[controls]` - Fullscreen idle auto-hide timings
//! - `[skip]` - Skip step, acceleration window and indicator duration
//! - `[keyboard]` - Keyboard volume step
//! - `[speed]` - Playback rate presets
//! - `[fullscreen]` - Narrow viewport threshold for orientation lock
//!
//! The file is only ever read. User choices made while the player runs
//! (volume, speed, mute) are not written back.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `VIDSKIN_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use vidskin::config::{self, PlayerSettings};
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let settings = PlayerSettings::from(&config);
//! assert!(settings.hide_delay.as_millis() > 0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::controls::SpeedPresets;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Idle auto-hide timings, in milliseconds.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ControlsConfig {
    #[serde(default)]
    pub hide_delay_ms: Option<u64>,

    #[serde(default)]
    pub idle_threshold_ms: Option<u64>,

    #[serde(default)]
    pub recheck_interval_ms: Option<u64>,
}

/// Accelerating skip settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SkipConfig {
    /// Seconds jumped by a cold skip; each rapid repeat adds one more step.
    #[serde(default)]
    pub step_secs: Option<f64>,

    #[serde(default)]
    pub window_ms: Option<u64>,

    #[serde(default)]
    pub indicator_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct KeyboardConfig {
    #[serde(default)]
    pub volume_step: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SpeedConfig {
    #[serde(default)]
    pub presets: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FullscreenConfig {
    #[serde(default)]
    pub narrow_viewport_px: Option<u32>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub controls: ControlsConfig,

    #[serde(default)]
    pub skip: SkipConfig,

    #[serde(default)]
    pub keyboard: KeyboardConfig,

    #[serde(default)]
    pub speed: SpeedConfig,

    #[serde(default)]
    pub fullscreen: FullscreenConfig,
}

// =============================================================================
// Resolved Settings
// =============================================================================

/// Fully resolved player settings with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSettings {
    pub hide_delay: Duration,
    pub idle_threshold: Duration,
    pub recheck_interval: Duration,
    pub pointer_moving_flag: Duration,
    pub skip_step_secs: f64,
    pub skip_window: Duration,
    pub skip_indicator: Duration,
    pub keyboard_volume_step: f64,
    pub speed_presets: SpeedPresets,
    pub narrow_viewport_px: u32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for PlayerSettings {
    fn from(config: &Config) -> Self {
        let hide_delay_ms = config
            .controls
            .hide_delay_ms
            .unwrap_or(DEFAULT_HIDE_DELAY_MS)
            .clamp(MIN_HIDE_DELAY_MS, MAX_HIDE_DELAY_MS);
        // Idle threshold must stay below the hide delay or the first check never hides.
        let idle_threshold_ms = config
            .controls
            .idle_threshold_ms
            .unwrap_or(DEFAULT_IDLE_THRESHOLD_MS)
            .min(hide_delay_ms.saturating_sub(1));
        let recheck_interval_ms = config
            .controls
            .recheck_interval_ms
            .unwrap_or(DEFAULT_RECHECK_INTERVAL_MS)
            .max(1);

        let skip_step_secs = config
            .skip
            .step_secs
            .filter(|s| s.is_finite())
            .unwrap_or(DEFAULT_SKIP_STEP_SECS)
            .clamp(MIN_SKIP_STEP_SECS, MAX_SKIP_STEP_SECS);

        let keyboard_volume_step = config
            .keyboard
            .volume_step
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_KEYBOARD_VOLUME_STEP)
            .min(MAX_VOLUME);

        Self {
            hide_delay: Duration::from_millis(hide_delay_ms),
            idle_threshold: Duration::from_millis(idle_threshold_ms),
            recheck_interval: Duration::from_millis(recheck_interval_ms),
            pointer_moving_flag: Duration::from_millis(POINTER_MOVING_FLAG_MS),
            skip_step_secs,
            skip_window: Duration::from_millis(
                config.skip.window_ms.unwrap_or(DEFAULT_SKIP_WINDOW_MS).max(1),
            ),
            skip_indicator: Duration::from_millis(
                config
                    .skip
                    .indicator_ms
                    .unwrap_or(DEFAULT_SKIP_INDICATOR_MS),
            ),
            keyboard_volume_step,
            speed_presets: config
                .speed
                .presets
                .as_deref()
                .map(SpeedPresets::new)
                .unwrap_or_default(),
            narrow_viewport_px: config
                .fullscreen
                .narrow_viewport_px
                .unwrap_or(DEFAULT_NARROW_VIEWPORT_PX),
        }
    }
}

// =============================================================================
// Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "Ignoring {}: {}; using default settings",
                            path.display(),
                            err
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
