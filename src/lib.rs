// SPDX-License-Identifier: MPL-2.0
//! `vidskin` is a skin of custom video player controls built with the Iced
//! GUI framework.
//!
//! The control logic lives in [`controls`] and talks to the platform only
//! through the traits of [`host`], so it runs unchanged against a real media
//! element or the in-memory [`host::SimulatedMedia`]. [`ui`] folds the
//! player's signals into a render model and draws it.

#![doc(html_root_url = "https://docs.rs/vidskin/0.1.0")]

pub mod app;
pub mod config;
pub mod controls;
pub mod error;
pub mod host;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
