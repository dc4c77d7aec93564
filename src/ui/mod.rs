// SPDX-License-Identifier: MPL-2.0
//! Presentation of the player, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`surface`] - Render model folded from player signals
//! - [`controls`] - Iced widgets of the skin
//! - [`styles`] - Style functions (buttons, overlays, track)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod controls;
pub mod design_tokens;
pub mod styles;
pub mod surface;

pub use surface::Surface;
