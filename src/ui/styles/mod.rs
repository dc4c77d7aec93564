// SPDX-License-Identifier: MPL-2.0
//! Style functions for the player skin.

pub mod button;
pub mod overlay;
pub mod track;
