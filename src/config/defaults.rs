// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the player. Constants are organized by category.
//!
//! # Categories
//!
//! - **Controls**: Fullscreen idle auto-hide timings
//! - **Skip**: Accelerating rewind/forward
//! - **Volume**: Keyboard volume step and initial level
//! - **Speed**: Playback rate presets offered by the speed menu
//! - **Fullscreen**: Narrow viewport threshold for orientation lock

// ==========================================================================
// Controls Visibility Defaults
// ==========================================================================

/// Delay between the last qualifying activity and the first hide check (ms).
pub const DEFAULT_HIDE_DELAY_MS: u64 = 3000;

/// Pointer idle time required before the controls may hide (ms).
pub const DEFAULT_IDLE_THRESHOLD_MS: u64 = 2800;

/// Interval at which a blocked hide check re-arms itself (ms).
pub const DEFAULT_RECHECK_INTERVAL_MS: u64 = 1000;

/// How long the pointer counts as "moving" after a move event (ms).
pub const POINTER_MOVING_FLAG_MS: u64 = 100;

/// Minimum configurable hide delay (ms).
pub const MIN_HIDE_DELAY_MS: u64 = 500;

/// Maximum configurable hide delay (ms).
pub const MAX_HIDE_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Skip Defaults
// ==========================================================================

/// Jump length of a cold skip, in seconds. Repeats add one step each.
pub const DEFAULT_SKIP_STEP_SECS: f64 = 10.0;

/// Minimum configurable skip step (s).
pub const MIN_SKIP_STEP_SECS: f64 = 1.0;

/// Maximum configurable skip step (s).
pub const MAX_SKIP_STEP_SECS: f64 = 60.0;

/// Window in which a repeated skip keeps accelerating (ms).
pub const DEFAULT_SKIP_WINDOW_MS: u64 = 1000;

/// How long the skip indicator stays on screen (ms).
pub const DEFAULT_SKIP_INDICATOR_MS: u64 = 700;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Initial volume level (0.0 to 1.0).
pub const DEFAULT_VOLUME: f64 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f64 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f64 = 1.0;

/// Volume adjustment per arrow key press.
pub const DEFAULT_KEYBOARD_VOLUME_STEP: f64 = 0.1;

/// Boundary between the "low" and "high" volume icons.
pub const VOLUME_HIGH_THRESHOLD: f64 = 0.5;

// ==========================================================================
// Speed Defaults
// ==========================================================================

/// Playback rates offered by the speed menu.
pub const DEFAULT_SPEED_PRESETS: [f64; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Normal playback rate.
pub const NORMAL_PLAYBACK_SPEED: f64 = 1.0;

// ==========================================================================
// Fullscreen Defaults
// ==========================================================================

/// Viewports narrower than this (px) count as mobile for orientation lock.
pub const DEFAULT_NARROW_VIEWPORT_PX: u32 = 768;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Visibility timings
    assert!(DEFAULT_IDLE_THRESHOLD_MS < DEFAULT_HIDE_DELAY_MS);
    assert!(DEFAULT_RECHECK_INTERVAL_MS > 0);
    assert!(POINTER_MOVING_FLAG_MS < DEFAULT_IDLE_THRESHOLD_MS);
    assert!(MIN_HIDE_DELAY_MS <= DEFAULT_HIDE_DELAY_MS);
    assert!(MAX_HIDE_DELAY_MS >= DEFAULT_HIDE_DELAY_MS);

    // Skip
    assert!(MIN_SKIP_STEP_SECS > 0.0);
    assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS <= MAX_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_WINDOW_MS > 0);
    assert!(DEFAULT_SKIP_INDICATOR_MS > 0);

    // Volume
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(DEFAULT_KEYBOARD_VOLUME_STEP > 0.0);
    assert!(VOLUME_HIGH_THRESHOLD > MIN_VOLUME);
    assert!(VOLUME_HIGH_THRESHOLD < MAX_VOLUME);
};
